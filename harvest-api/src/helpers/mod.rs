pub mod request_validator;
pub mod source_catalog;
