use shared_types::{ContactRecord, ExtractionStats};

/// Count records and how many carry an email, phone and address.
pub fn summarize(records: &[ContactRecord]) -> ExtractionStats {
    records
        .iter()
        .fold(ExtractionStats::default(), |mut stats, record| {
            stats.record(record);
            stats
        })
}
