pub mod config;
pub mod model;
pub mod store;
pub mod tutor;
pub mod web;

use tera::Tera;

use model::ModelManager;
use store::ChatStore;

// App state structure
pub struct AppState {
    pub tera: Tera,
    pub model: ModelManager,
    pub store: ChatStore,
}
