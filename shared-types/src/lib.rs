use serde::{Deserialize, Serialize};

pub mod contact;
pub mod extraction;
pub mod harvest;

pub use contact::{ContactCategory, ContactRecord};
pub use extraction::{ExtractionError, ExtractionStats, RowSource, RowSourceProvider};
pub use harvest::{
    DataSource, ExtractFailureResponse, ExtractRequest, ExtractResponse, HealthResponse,
    SourcesResponse,
};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
