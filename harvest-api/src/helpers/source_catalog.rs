use shared_types::DataSource;

pub const KERALA_RERA_ID: &str = "kerala-rera";

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "DataHarvest API";

/// The listings this service can harvest. Only one is wired up.
pub fn catalog() -> Vec<DataSource> {
    vec![DataSource {
        id: KERALA_RERA_ID.to_string(),
        name: "Kerala RERA Agents".to_string(),
        max_records: 823,
    }]
}

pub fn is_supported(source_id: &str) -> bool {
    catalog().iter().any(|source| source.id == source_id)
}
