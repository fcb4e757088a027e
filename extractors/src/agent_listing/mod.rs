mod extractor;

pub use extractor::AgentListingExtractor;

use regex::Regex;
use shared_types::ContactCategory;

/// Delimiter placed between cell values when a table row is flattened.
pub const CELL_DELIMITER: &str = " | ";

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";
const PHONE_PATTERN: &str = r"[0-9\s()\-]{10,}";
// Registration ID followed by ",," and the holder's name
const NAME_PATTERN: &str = r"[0-9]{10},,([A-Z][A-Za-z\s]+?)(?:\s*\||$)";
const NAME_FALLBACK_PATTERN: &str = r",,([^|,]+?)\s*\|";
const NAME_BLOCKLIST_PATTERN: &str = r"(?i)\b(?:individual|company|house|road)\b";
const ADDRESS_PATTERN: &str =
    r"\|\s*(?:Individual|Company|Partnership|Proprietor)\s*\|\s*(.+?)(?:$|\|)";

/// Checked in order; the first token contained in the row wins.
const CATEGORY_TOKENS: [(&str, ContactCategory); 4] = [
    ("Individual", ContactCategory::Individual),
    ("Company", ContactCategory::Company),
    ("Partnership", ContactCategory::Partnership),
    ("Proprietor", ContactCategory::Proprietorship),
];

const DEFAULT_COUNTRY_CODE: &str = "91";
const LOCAL_NUMBER_DIGITS: usize = 10;

/// Independent field parsers over a single row of listing text.
///
/// None of them fail: a row that doesn't carry a field yields `None`.
pub struct RowFieldParser {
    email: Regex,
    phone: Regex,
    name: Regex,
    name_fallback: Regex,
    name_blocklist: Regex,
    address: Regex,
}

impl RowFieldParser {
    pub fn new() -> Self {
        Self {
            email: Regex::new(EMAIL_PATTERN).expect("email pattern compiles"),
            phone: Regex::new(PHONE_PATTERN).expect("phone pattern compiles"),
            name: Regex::new(NAME_PATTERN).expect("name pattern compiles"),
            name_fallback: Regex::new(NAME_FALLBACK_PATTERN)
                .expect("fallback name pattern compiles"),
            name_blocklist: Regex::new(NAME_BLOCKLIST_PATTERN)
                .expect("name blocklist pattern compiles"),
            address: Regex::new(ADDRESS_PATTERN).expect("address pattern compiles"),
        }
    }

    /// First email-shaped substring, case preserved.
    pub fn email(&self, text: &str) -> Option<String> {
        self.email.find(text).map(|m| m.as_str().to_string())
    }

    /// First run of phone-like characters, reduced to digits and written as
    /// `+91XXXXXXXXXX` (exactly ten digits) or `+<digits>` (country code
    /// already present). Only the first run is considered.
    pub fn phone(&self, text: &str) -> Option<String> {
        let run = self.phone.find(text)?;
        let digits: String = run
            .as_str()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        match digits.len() {
            LOCAL_NUMBER_DIGITS => Some(format!("+{}{}", DEFAULT_COUNTRY_CODE, digits)),
            n if n > LOCAL_NUMBER_DIGITS => Some(format!("+{}", digits)),
            _ => None,
        }
    }

    pub fn name(&self, text: &str) -> Option<String> {
        if let Some(caps) = self.name.captures(text) {
            let name = caps.get(1)?.as_str().trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }

        let candidate = self.name_fallback.captures(text)?.get(1)?.as_str().trim();

        // Category and street words mean the span is an address fragment
        if candidate.is_empty() || self.name_blocklist.is_match(candidate) {
            return None;
        }

        Some(candidate.to_string())
    }

    pub fn category(&self, text: &str) -> Option<ContactCategory> {
        CATEGORY_TOKENS
            .iter()
            .find(|(token, _)| text.contains(token))
            .map(|(_, category)| *category)
    }

    /// Cell following a `| <category> |` boundary.
    pub fn address(&self, text: &str) -> Option<String> {
        let caps = self.address.captures(text)?;
        let address = caps.get(1)?.as_str().trim();

        if address.is_empty() {
            None
        } else {
            Some(address.to_string())
        }
    }
}

impl Default for RowFieldParser {
    fn default() -> Self {
        Self::new()
    }
}
