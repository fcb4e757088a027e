use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{
    ErrorResponse, ExtractFailureResponse, ExtractRequest, ExtractResponse, ExtractionError,
};
use std::sync::Arc;
use tracing::{error, info_span};
use uuid::Uuid;

use crate::helpers::request_validator;
use crate::jobs::extraction_service::{ExtractionOutcome, ExtractionService};

pub async fn extract(
    service: web::Data<Arc<ExtractionService>>,
    request: web::Json<ExtractRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    let source = match request_validator::parse_source(request.source.as_ref()) {
        Ok(source) => source,
        Err(e) => return Ok(bad_request(e.to_string())),
    };

    let limit = match request_validator::parse_limit(request.limit.as_ref()) {
        Ok(limit) => limit,
        Err(e) => return Ok(bad_request(e.to_string())),
    };

    let request_id = Uuid::new_v4();
    let span = info_span!("extract", %request_id, source = %source, limit);
    let service = service.get_ref().clone();

    // Rendering the page blocks for several seconds
    let result = web::block(move || {
        let _entered = span.enter();
        service.extract(&source, limit)
    })
    .await
    .unwrap_or_else(|e| Err(ExtractionError::Internal(e.to_string())));

    Ok(extraction_response(request_id, result))
}

fn extraction_response(
    request_id: Uuid,
    result: Result<ExtractionOutcome, ExtractionError>,
) -> HttpResponse {
    match result {
        Ok(outcome) => HttpResponse::Ok().json(ExtractResponse {
            success: true,
            data: outcome.records,
            stats: outcome.stats,
        }),
        Err(ExtractionError::InvalidInput(message)) => bad_request(message),
        Err(e) => {
            error!("Extraction {} failed: {}", request_id, e);
            internal_error(e.to_string())
        }
    }
}

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse { error: message })
}

fn internal_error(message: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(ExtractFailureResponse {
        success: false,
        error: message,
    })
}
