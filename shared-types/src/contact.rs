use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Registration category printed in an agent listing row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ContactCategory {
    Individual,
    Company,
    Partnership,
    Proprietorship,
}

/// One contact parsed out of a listing row. Every field is optional; unset
/// fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactRecord {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub category: Option<ContactCategory>,
}

impl ContactRecord {
    /// A record is worth keeping only when it identifies someone: a name,
    /// an email or a phone number.
    pub fn is_identifiable(&self) -> bool {
        is_set(&self.name) || is_set(&self.email) || is_set(&self.phone)
    }
}

pub(crate) fn is_set(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&ContactCategory::Proprietorship).unwrap();
        assert_eq!(json, "\"Proprietorship\"");

        let deserialized: ContactCategory = serde_json::from_str("\"Company\"").unwrap();
        assert_eq!(deserialized, ContactCategory::Company);
    }

    #[test]
    fn test_unset_fields_serialize_as_null() {
        let record = ContactRecord {
            name: Some("ANITA GEORGE".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["name"], "ANITA GEORGE");
        assert!(value["phone"].is_null());
        assert!(value["category"].is_null());
    }

    #[test]
    fn test_identifiable_requires_name_email_or_phone() {
        assert!(!ContactRecord::default().is_identifiable());

        let address_only = ContactRecord {
            address: Some("Kowdiar, Thiruvananthapuram".to_string()),
            category: Some(ContactCategory::Individual),
            ..Default::default()
        };
        assert!(!address_only.is_identifiable());

        let empty_name = ContactRecord {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(!empty_name.is_identifiable());

        let phone_only = ContactRecord {
            phone: Some("+919876543210".to_string()),
            ..Default::default()
        };
        assert!(phone_only.is_identifiable());
    }
}
