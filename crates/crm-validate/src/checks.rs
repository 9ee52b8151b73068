//! Per-rule value checks.

use std::sync::LazyLock;

use crm_model::{RuleKind, ValidationRule};
use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "Field is required";
pub const EMAIL_MESSAGE: &str = "Invalid email format";
pub const PHONE_MESSAGE: &str = "Invalid phone format";
pub const DATE_MESSAGE: &str = "Invalid date format (expected YYYY-MM-DD)";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Optional leading `+`, then at least seven digits, spaces, dashes, dots, or parentheses.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-().]{7,}$").expect("Invalid phone regex"));

/// `YYYY-MM-DD` with an optional `THH:MM` or `THH:MM:SS` suffix.
static ISO_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}(T[0-9]{2}:[0-9]{2}(:[0-9]{2})?)?$")
        .expect("Invalid date regex")
});

pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Shape check only; calendar validity is not enforced.
pub fn is_iso_date(value: &str) -> bool {
    ISO_DATE_REGEX.is_match(value)
}

/// Message for a value outside an enum rule's allowed set.
pub fn enum_message(values: &[String]) -> String {
    format!("Value must be one of: {}", values.join(", "))
}

/// Applies one rule to a trimmed value, returning the failure message.
///
/// Only `required` fails on an empty value; the other kinds skip it.
pub fn check_rule(rule: &ValidationRule, value: &str) -> Option<String> {
    if value.is_empty() {
        return (rule.kind == RuleKind::Required).then(|| REQUIRED_MESSAGE.to_string());
    }

    match rule.kind {
        RuleKind::Required => None,
        RuleKind::Email if !is_email(value) => Some(EMAIL_MESSAGE.to_string()),
        RuleKind::Phone if !is_phone(value) => Some(PHONE_MESSAGE.to_string()),
        RuleKind::Date if !is_iso_date(value) => Some(DATE_MESSAGE.to_string()),
        RuleKind::Enum => match &rule.values {
            Some(values) if !values.iter().any(|allowed| allowed == value) => {
                Some(enum_message(values))
            }
            _ => None,
        },
        _ => None,
    }
}
