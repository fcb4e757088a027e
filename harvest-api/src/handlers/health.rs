use actix_web::{HttpResponse, Responder};
use shared_types::HealthResponse;

use crate::helpers::source_catalog::SERVICE_NAME;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
