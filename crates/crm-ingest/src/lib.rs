//! CSV import for CRM records.
//!
//! Raw text flows through three stages:
//!
//! 1. **Delimiter detection**: the first line picks `,`, `;`, or tab
//! 2. **Tokenizing**: an RFC 4180 state machine splits text into rows of fields
//! 3. **Record building**: rows are keyed by the header row and checked
//!    against an optional column schema
//!
//! Malformed content never fails a parse. Short rows are padded, blank lines
//! are skipped, and schema problems are reported next to the complete row set.
//!
//! # Example
//!
//! ```
//! use crm_ingest::parse_csv;
//! use crm_model::{ColumnSchema, ColumnType};
//!
//! let schema = [ColumnSchema::new("age", ColumnType::Number).required()];
//! let parsed = parse_csv("name;age\nAda;36\nBob;\n", Some(&schema));
//!
//! assert_eq!(parsed.headers, vec!["name", "age"]);
//! assert_eq!(parsed.rows.len(), 2);
//! assert_eq!(parsed.errors[0].message, "Required field \"age\" is empty");
//! ```

mod coerce;
mod csv;
mod error;
mod parse;

// === Error Types ===
pub use error::{IngestError, Result};

// === Tokenizing ===
pub use csv::{
    CANDIDATE_DELIMITERS, MAX_CSV_FILE_SIZE, check_file_size_with_limit, delimiter_name,
    detect_delimiter, first_line, read_csv_file, read_csv_file_with_limit, tokenize,
};

// === Record Building ===
pub use parse::{is_blank_line, parse_csv};

// === Value Coercion ===
pub use coerce::{is_boolean, is_date, is_number};
