//! Declarative post-parse validation rules and their outcome.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Kind of check a [`ValidationRule`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Required,
    Email,
    Phone,
    Date,
    Enum,
}

impl RuleKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    pub field: String,
    #[serde(rename = "type")]
    pub kind: RuleKind,
    /// Allowed values, only meaningful for [`RuleKind::Enum`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl ValidationRule {
    pub fn new(field: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            field: field.into(),
            kind,
            values: None,
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, RuleKind::Required)
    }

    pub fn email(field: impl Into<String>) -> Self {
        Self::new(field, RuleKind::Email)
    }

    pub fn phone(field: impl Into<String>) -> Self {
        Self::new(field, RuleKind::Phone)
    }

    pub fn date(field: impl Into<String>) -> Self {
        Self::new(field, RuleKind::Date)
    }

    /// Enum rule restricting the field to `values`.
    pub fn one_of<I, S>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field: field.into(),
            kind: RuleKind::Enum,
            values: Some(values.into_iter().map(Into::into).collect()),
        }
    }
}

/// One failed rule on one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowIssue {
    /// Zero-based index into the validated slice.
    pub row: usize,
    pub field: String,
    pub error: String,
}

/// Records that passed every rule, and every individual failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: Vec<Record>,
    pub invalid: Vec<RowIssue>,
}

impl ValidationOutcome {
    /// True when no rule failed.
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Number of distinct records with at least one failure.
    pub fn invalid_row_count(&self) -> usize {
        self.invalid
            .iter()
            .map(|issue| issue.row)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Failure counts per field, ordered by field name.
    pub fn issues_by_field(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.invalid {
            *counts.entry(issue.field.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
