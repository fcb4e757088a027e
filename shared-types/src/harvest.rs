use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::{ContactRecord, ExtractionStats};

/// Body of `POST /api/extract`.
///
/// Both members are kept as raw JSON so a value of the wrong type can be
/// reported as a validation failure instead of a deserialization failure.
/// An explicit `null` arrives as `Some(Value::Null)`, only a missing member
/// is `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtractRequest {
    #[serde(default, deserialize_with = "present_value")]
    #[ts(type = "string | null")]
    pub source: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present_value")]
    #[ts(type = "number | null")]
    pub limit: Option<serde_json::Value>,
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtractResponse {
    pub success: bool,
    pub data: Vec<ContactRecord>,
    pub stats: ExtractionStats,
}

/// Payload for an extraction that failed unexpectedly
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtractFailureResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// A listing the service knows how to harvest
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DataSource {
    pub id: String,
    pub name: String,
    pub max_records: u32,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SourcesResponse {
    pub sources: Vec<DataSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_request_distinguishes_null_limit() {
        let missing: ExtractRequest = serde_json::from_str(r#"{"source": "kerala-rera"}"#).unwrap();
        assert_eq!(missing.source, Some(serde_json::json!("kerala-rera")));
        assert!(missing.limit.is_none());

        let null: ExtractRequest = serde_json::from_str(r#"{"limit": null}"#).unwrap();
        assert_eq!(null.limit, Some(serde_json::Value::Null));
        assert!(null.source.is_none());

        let number: ExtractRequest = serde_json::from_str(r#"{"limit": 25}"#).unwrap();
        assert_eq!(number.limit, Some(serde_json::json!(25)));
    }

    #[test]
    fn test_extract_request_keeps_source_of_any_type() {
        let null: ExtractRequest = serde_json::from_str(r#"{"source": null}"#).unwrap();
        assert_eq!(null.source, Some(serde_json::Value::Null));

        let number: ExtractRequest = serde_json::from_str(r#"{"source": 5}"#).unwrap();
        assert_eq!(number.source, Some(serde_json::json!(5)));
    }
}
