//! Shared data model for the CRM CSV engine.
//!
//! Every type here is transient: built per call by a caller or by one of the
//! engine crates, never mutated after it is handed back.
//!
//! - [`ColumnSchema`] / [`ParseError`] / [`ParsedCsv`]: parse-time schema checks
//! - [`Record`]: one keyed row, header order preserved
//! - [`ExportOptions`]: CSV rendering options
//! - [`ValidationRule`] / [`ValidationOutcome`]: post-parse rule validation
//! - [`FieldMapping`]: source column to target field renames
//! - [`ImportProfile`]: schema, rules, and mapping bundled as one JSON document

mod ordered;

pub mod error;
pub mod export;
pub mod mapping;
pub mod profile;
pub mod record;
pub mod rules;
pub mod schema;

pub use error::{ModelError, Result};
pub use export::ExportOptions;
pub use mapping::FieldMapping;
pub use profile::ImportProfile;
pub use record::Record;
pub use rules::{RowIssue, RuleKind, ValidationOutcome, ValidationRule};
pub use schema::{ColumnSchema, ColumnType, ParseError, ParsedCsv};
