use actix_web::{HttpResponse, Responder};
use shared_types::SourcesResponse;

use crate::helpers::source_catalog;

pub async fn list_sources() -> impl Responder {
    HttpResponse::Ok().json(SourcesResponse {
        sources: source_catalog::catalog(),
    })
}
