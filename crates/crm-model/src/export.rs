//! CSV export options.

use serde::{Deserialize, Serialize};

/// Options controlling how records are rendered as CSV text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Field separator (default `,`).
    pub delimiter: char,
    /// Emit a header line with the column names (default `true`).
    pub include_headers: bool,
    /// Prefix the output with U+FEFF for spreadsheet applications (default `false`).
    pub bom: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            include_headers: true,
            bom: false,
        }
    }
}

impl ExportOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_headers(mut self, include: bool) -> Self {
        self.include_headers = include;
        self
    }

    #[must_use]
    pub fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }
}
