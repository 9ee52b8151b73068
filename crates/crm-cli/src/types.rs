use std::path::PathBuf;

use crm_model::{ParseError, Record, RowIssue};

#[derive(Debug)]
pub struct ImportResult {
    pub input: PathBuf,
    pub headers: Vec<String>,
    /// Rows produced by the parser.
    pub parsed_rows: usize,
    /// Schema errors raised while parsing.
    pub schema_errors: Vec<ParseError>,
    /// Rows that passed every rule.
    pub valid_rows: usize,
    /// Rule failures, one per failed rule.
    pub issues: Vec<RowIssue>,
    /// Output records, mapped when the profile has a mapping.
    pub records: Vec<Record>,
    /// Headers no mapping entry reads.
    pub unmapped: Vec<String>,
    /// Mapping sources absent from the headers.
    pub missing: Vec<String>,
    pub output: Option<PathBuf>,
}

impl ImportResult {
    /// Distinct rows with at least one rule failure.
    pub fn invalid_rows(&self) -> usize {
        self.parsed_rows - self.valid_rows
    }

    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty()
    }
}

#[derive(Debug)]
pub struct ExportResult {
    pub rows: usize,
    pub columns: usize,
    /// Written path, or `None` when the text went to stdout.
    pub output: Option<PathBuf>,
}
