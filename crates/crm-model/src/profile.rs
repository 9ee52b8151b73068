//! Import profiles: schema, rules, and mapping loaded from one JSON document.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::mapping::FieldMapping;
use crate::rules::ValidationRule;
use crate::schema::ColumnSchema;

/// Everything an import needs besides the CSV text itself.
///
/// ```json
/// {
///   "schema": [{ "name": "Email", "type": "string", "required": true }],
///   "rules": [{ "field": "Email", "type": "email" }],
///   "mapping": { "Email": "email" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportProfile {
    #[serde(default)]
    pub schema: Vec<ColumnSchema>,
    #[serde(default)]
    pub rules: Vec<ValidationRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<FieldMapping>,
}

impl ImportProfile {
    /// Parses a profile from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| ModelError::Json {
            origin: "profile".to_string(),
            source,
        })
    }

    /// Reads and parses a profile file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ModelError::Json {
            origin: path.display().to_string(),
            source,
        })
    }

    /// Schema to pass to the parser, `None` when the profile declares no columns.
    pub fn schema(&self) -> Option<&[ColumnSchema]> {
        if self.schema.is_empty() {
            None
        } else {
            Some(&self.schema)
        }
    }
}
