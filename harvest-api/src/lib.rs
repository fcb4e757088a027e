pub mod config;
pub mod handlers;
pub mod helpers;
pub mod integrations;
pub mod jobs;

#[cfg(test)]
pub(crate) mod testing;

pub use jobs::extraction_service::{ExtractionOutcome, ExtractionService};
