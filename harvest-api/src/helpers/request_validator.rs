use anyhow::{bail, Result};
use serde_json::Value;

use crate::helpers::source_catalog;

pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 200;
pub const DEFAULT_LIMIT: i64 = 50;

pub fn validate_source(source_id: &str) -> Result<()> {
    if !source_catalog::is_supported(source_id) {
        bail!("Invalid data source");
    }
    Ok(())
}

pub fn validate_limit(limit: i64) -> Result<usize> {
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        bail!("Limit must be between {} and {}", MIN_LIMIT, MAX_LIMIT);
    }
    Ok(limit as usize)
}

/// Read the `source` member of a request body. Absent means the only
/// supported source; `null`, a non-string or an unknown id is rejected.
pub fn parse_source(raw: Option<&Value>) -> Result<String> {
    match raw {
        None => Ok(source_catalog::KERALA_RERA_ID.to_string()),
        Some(Value::String(source)) => {
            validate_source(source)?;
            Ok(source.clone())
        }
        Some(_) => bail!("Invalid data source"),
    }
}

/// Read the `limit` member of a request body. Absent means the default;
/// anything other than a JSON integer is rejected.
pub fn parse_limit(raw: Option<&Value>) -> Result<i64> {
    match raw {
        None => Ok(DEFAULT_LIMIT),
        Some(value) => match value.as_i64() {
            Some(limit) => Ok(limit),
            None => bail!("Limit must be between {} and {}", MIN_LIMIT, MAX_LIMIT),
        },
    }
}
