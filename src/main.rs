use actix_files as fs;
use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use tera::Tera;

use french_tutor::config::Config;
use french_tutor::model::ModelManager;
use french_tutor::store::ChatStore;
use french_tutor::web::routes;
use french_tutor::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting French tutor web application");

    let config = Config::from_env();

    let model = match ModelManager::new(&config) {
        Ok(model) => model,
        Err(e) => {
            error!("Failed to initialize answer provider: {}", e);
            std::process::exit(1);
        }
    };

    // The chat keeps answering without a database
    let store = ChatStore::new(&config.database_path);
    match store.ensure_tables() {
        Ok(()) => info!("Database ready at {}", config.database_path.display()),
        Err(e) => error!("Failed to prepare database tables: {}", e),
    }

    // Initialize template engine
    let mut tera = match Tera::new(&config.templates_glob) {
        Ok(t) => t,
        Err(e) => {
            error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    tera.autoescape_on(vec![".html"]);

    let app_state = Data::new(AppState { tera, model, store });
    let static_dir = config.static_dir.clone();

    info!("Listening on http://{}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", &static_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
