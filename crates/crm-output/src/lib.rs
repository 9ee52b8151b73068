//! CSV export for CRM records.
//!
//! Rows are JSON-like values so nested objects can be exported through
//! dot-separated column paths (`address.city`). Parsed [`Record`]s convert
//! directly via [`export_records`].
//!
//! # Example
//!
//! ```
//! use crm_model::ExportOptions;
//! use crm_output::export_to_csv;
//! use serde_json::json;
//!
//! let data = vec![json!({"name": "Ada", "address": {"city": "London, UK"}})];
//! let csv = export_to_csv(&data, &["name", "address.city"], &ExportOptions::default());
//!
//! assert_eq!(csv, "name,address.city\nAda,\"London, UK\"");
//! ```
//!
//! [`Record`]: crm_model::Record

mod csv;
mod error;
mod writer;

pub use csv::{BOM, escape_field, export_records, export_to_csv, resolve_path, stringify_value};
pub use error::{OutputError, Result};
pub use writer::{ensure_parent_dir, write_csv_file};

pub use crm_model::ExportOptions;
