//! Mapping coverage helpers.

use crm_model::FieldMapping;

/// Headers that no mapping entry reads; their values are dropped on transform.
pub fn unmapped_columns(headers: &[String], mapping: &FieldMapping) -> Vec<String> {
    headers
        .iter()
        .filter(|header| mapping.target_for(header).is_none())
        .cloned()
        .collect()
}

/// Mapping sources absent from `headers`; their targets will always be empty.
pub fn missing_columns(headers: &[String], mapping: &FieldMapping) -> Vec<String> {
    mapping
        .sources()
        .filter(|source| !headers.iter().any(|header| header == source))
        .map(str::to_string)
        .collect()
}
