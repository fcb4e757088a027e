use crate::agent_listing::RowFieldParser;
use shared_types::ContactRecord;

/// Turns listing rows into contact records.
pub struct AgentListingExtractor {
    parser: RowFieldParser,
}

impl AgentListingExtractor {
    pub fn new() -> Self {
        Self {
            parser: RowFieldParser::new(),
        }
    }

    /// Parse one row. Returns `None` when the row has no name, email or
    /// phone number.
    pub fn extract_from_text(&self, text: &str) -> Option<ContactRecord> {
        let record = ContactRecord {
            name: self.parser.name(text),
            phone: self.parser.phone(text),
            email: self.parser.email(text),
            address: self.parser.address(text),
            category: self.parser.category(text),
        };

        if record.is_identifiable() {
            Some(record)
        } else {
            None
        }
    }

    /// Parse a batch of rows, keeping row order.
    pub fn extract_from_rows<I, S>(&self, rows: I) -> Vec<ContactRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        rows.into_iter()
            .filter_map(|row| self.extract_from_text(row.as_ref()))
            .collect()
    }
}

impl Default for AgentListingExtractor {
    fn default() -> Self {
        Self::new()
    }
}
