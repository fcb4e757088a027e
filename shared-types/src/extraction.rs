use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::contact::{is_set, ContactRecord};

/// Producer of raw row text, one string per table row with the cell values
/// joined by `" | "`.
///
/// Implementations decide how the rows are obtained (a rendered page, a
/// fixture, a file). `Ok(None)` means the rows are exhausted.
pub trait RowSource {
    fn next_row(&mut self) -> Result<Option<String>, ExtractionError>;
}

/// Opens a fresh [`RowSource`] for a single extraction call.
pub trait RowSourceProvider: Send + Sync {
    fn open(&self, limit: usize) -> Result<Box<dyn RowSource>, ExtractionError>;
}

/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Row source error: {0}")]
    Source(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Counts over a finished set of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtractionStats {
    pub total: usize,
    pub with_email: usize,
    pub with_phone: usize,
    pub with_address: usize,
}

impl ExtractionStats {
    pub fn record(&mut self, contact: &ContactRecord) {
        self.total += 1;
        if is_set(&contact.email) {
            self.with_email += 1;
        }
        if is_set(&contact.phone) {
            self.with_phone += 1;
        }
        if is_set(&contact.address) {
            self.with_address += 1;
        }
    }
}
