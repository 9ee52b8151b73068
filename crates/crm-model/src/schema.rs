//! Parse-time column schema and its diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Declared value type of a column.
///
/// Types are advisory: they drive validation only, values stay strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Number,
    Date,
    Boolean,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Date => "date",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected shape of one column during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default)]
    pub required: bool,
}

impl ColumnSchema {
    /// Creates an optional column of the given type.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            required: false,
        }
    }

    /// Marks the column as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A schema problem found while parsing.
///
/// Informational only: the offending row is still returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    /// Index in the tokenized input; the header is row 0.
    pub row: usize,
    pub column: String,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}: {}", self.row, self.column, self.message)
    }
}

/// Output of a parse: header names, every data row, and schema diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
    pub errors: Vec<ParseError>,
}

impl ParsedCsv {
    /// True when no rows were produced and no header was found.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_deserialize() {
        let column: ColumnSchema =
            serde_json::from_str(r#"{"name":"notes","type":"string"}"#).unwrap();
        assert_eq!(column, ColumnSchema::new("notes", ColumnType::String));
        assert!(!column.required);

        assert!(serde_json::from_str::<ColumnSchema>(r#"{"name":"notes"}"#).is_err());

        let column: ColumnSchema =
            serde_json::from_str(r#"{"name":"age","type":"number","required":true}"#).unwrap();
        assert_eq!(column, ColumnSchema::new("age", ColumnType::Number).required());
    }

    #[test]
    fn test_parsed_csv_helpers() {
        let mut parsed = ParsedCsv::default();
        assert!(parsed.is_empty());
        assert!(!parsed.has_errors());

        parsed.headers.push("age".to_string());
        parsed.errors.push(ParseError {
            row: 1,
            column: "age".to_string(),
            message: "\"x\" is not a valid number".to_string(),
        });
        assert!(!parsed.is_empty());
        assert!(parsed.has_errors());
        assert_eq!(ColumnType::Number.to_string(), "number");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError {
            row: 3,
            column: "age".to_string(),
            message: "\"abc\" is not a valid number".to_string(),
        };
        assert_eq!(err.to_string(), "row 3, column age: \"abc\" is not a valid number");
    }
}
