use actix_web::{error, web, HttpResponse};

use crate::web::handlers;
use crate::web::models::ErrorResponse;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/chat", web::post().to(handlers::chat))
        .route("/history/{session_id}", web::get().to(handlers::history))
        .route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health_check));
}

/// Bodies that are not valid JSON get the same `{error, success}` shape as
/// every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(format!(
            "Requête invalide : {err}"
        )));
        error::InternalError::from_response(err, response).into()
    })
}
