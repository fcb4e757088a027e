//! Extractors Crate
//!
//! Pattern based extraction of contact records from the flattened text of
//! agent listing tables. Every table row arrives as its cell values joined
//! by `" | "`; the parsers here pull a name, phone, email, address and
//! category out of that text on a best-effort basis.
//!
//! # Architecture
//!
//! - **Types**: Records, stats and the row source trait live in `shared-types`
//! - **Parsers**: `RowFieldParser` holds one independent parser per field
//! - **Assembly**: `AgentListingExtractor` builds a record per row and drops
//!   rows that identify nobody
//! - **Summary**: `summarize` counts the fields present in a batch
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::{summarize, AgentListingExtractor};
//!
//! let extractor = AgentListingExtractor::new();
//! let records = extractor.extract_from_rows(rows);
//! let stats = summarize(&records);
//! ```

pub mod agent_listing;
pub mod summary;

// Re-export commonly used types
pub use agent_listing::{AgentListingExtractor, RowFieldParser, CELL_DELIMITER};
pub use summary::summarize;
