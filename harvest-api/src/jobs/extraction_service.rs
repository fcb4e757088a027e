use std::sync::Arc;

use extractors::{summarize, AgentListingExtractor};
use shared_types::{ContactRecord, ExtractionError, ExtractionStats, RowSourceProvider};
use tracing::{debug, info, warn};

use crate::helpers::request_validator;

/// Records accepted from one extraction call and their counts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionOutcome {
    pub records: Vec<ContactRecord>,
    pub stats: ExtractionStats,
}

/// Runs one listing extraction per call: opens a row source, parses every
/// row, and summarizes what was kept.
///
/// Calls are independent. Each opens its own row source and releases it
/// before returning, so the service can be shared between workers.
pub struct ExtractionService {
    provider: Arc<dyn RowSourceProvider>,
    extractor: AgentListingExtractor,
}

impl ExtractionService {
    pub fn new(provider: Arc<dyn RowSourceProvider>) -> Self {
        Self {
            provider,
            extractor: AgentListingExtractor::new(),
        }
    }

    /// Blocking; run it off the async executor.
    ///
    /// Only invalid input is an error. A row source that fails to open or
    /// breaks mid-way yields an empty outcome, discarding any rows it
    /// produced before the failure.
    pub fn extract(&self, source_id: &str, limit: i64) -> Result<ExtractionOutcome, ExtractionError> {
        request_validator::validate_source(source_id)
            .map_err(|e| ExtractionError::InvalidInput(e.to_string()))?;
        let limit = request_validator::validate_limit(limit)
            .map_err(|e| ExtractionError::InvalidInput(e.to_string()))?;

        let records = match self.collect_records(limit) {
            Ok(records) => records,
            Err(e) => {
                warn!("Extraction from {} failed, returning no records: {}", source_id, e);
                Vec::new()
            }
        };

        let stats = summarize(&records);
        info!(
            "Extraction from {} completed: total={}, with_email={}, with_phone={}, with_address={}",
            source_id, stats.total, stats.with_email, stats.with_phone, stats.with_address
        );

        Ok(ExtractionOutcome { records, stats })
    }

    fn collect_records(&self, limit: usize) -> Result<Vec<ContactRecord>, ExtractionError> {
        let mut source = self.provider.open(limit)?;
        let mut rows = Vec::new();

        while rows.len() < limit {
            let Some(text) = source.next_row()? else {
                break;
            };
            rows.push(text);
        }
        // Release the row source before parsing
        drop(source);

        let records = self.extractor.extract_from_rows(&rows);
        debug!("Read {} rows, accepted {} records", rows.len(), records.len());
        Ok(records)
    }
}
