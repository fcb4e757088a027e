pub mod extraction_service;
