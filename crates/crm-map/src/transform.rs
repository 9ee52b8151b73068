//! Record transformation.

use crm_model::{FieldMapping, Record};
use tracing::debug;

/// Target field whose values are lower-cased.
pub const EMAIL_FIELD: &str = "email";

/// Builds a record holding only the mapped target fields.
///
/// Values are trimmed; a source column missing from `record` yields `""`.
pub fn transform_record(record: &Record, mapping: &FieldMapping) -> Record {
    let mut out = Record::with_capacity(mapping.len());
    for (source, target) in mapping.iter() {
        let value = record.get_or_empty(source).trim();
        if target == EMAIL_FIELD {
            out.insert(target, value.to_lowercase());
        } else {
            out.insert(target, value);
        }
    }
    out
}

/// Applies [`transform_record`] to every row.
pub fn transform_contacts(rows: &[Record], mapping: &FieldMapping) -> Vec<Record> {
    debug!(rows = rows.len(), fields = mapping.len(), "transforming contacts");
    rows.iter()
        .map(|record| transform_record(record, mapping))
        .collect()
}
