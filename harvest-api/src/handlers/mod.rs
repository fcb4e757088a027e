pub mod extract;
pub mod health;
pub mod sources;

use actix_web::{web, HttpResponse};
use shared_types::ErrorResponse;

/// Register every API route on an app or test service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/api/extract", web::post().to(extract::extract))
        .route("/api/health", web::get().to(health::health))
        .route("/api/sources", web::get().to(sources::list_sources));
}

/// Malformed or missing JSON bodies are answered with the API's own error
/// payload instead of actix's plain text.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse {
            error: err.to_string(),
        });
        actix_web::error::InternalError::from_response(err, response).into()
    })
}
