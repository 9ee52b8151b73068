//! Value coercion checks used by schema validation.
//!
//! Values are never converted; these only answer "would this string coerce".

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

/// Decimal or scientific notation, signed `Infinity`, or a prefixed integer
/// literal (`0x`, `0o`, `0b`). Thousands separators are not accepted.
static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[+-]?(?:(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?|Infinity)|0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+)$",
    )
    .expect("Invalid number regex")
});

const BOOLEAN_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Check if a string is a valid number.
pub fn is_number(value: &str) -> bool {
    NUMBER_REGEX.is_match(value.trim())
}

/// Check if a string is one of `true/false/1/0/yes/no`, ignoring case.
pub fn is_boolean(value: &str) -> bool {
    let lowered = value.trim().to_lowercase();
    BOOLEAN_VALUES.contains(&lowered.as_str())
}

/// Check if a string is a calendar-valid date or date-time.
///
/// Accepts ISO 8601 dates and date-times (`T` or space separator, optional
/// seconds and fraction, RFC 3339 offsets), RFC 2822, `YYYY/MM/DD`, and
/// `MM/DD/YYYY`.
pub fn is_date(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }

    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(trimmed, format).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(trimmed, format).is_ok())
        || DateTime::parse_from_rfc3339(trimmed).is_ok()
        || DateTime::parse_from_rfc2822(trimmed).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        for value in ["0", "42", "-7", "+3.5", "1.", ".5", "1e5", "2.5E-3", "0x1F", "Infinity"] {
            assert!(is_number(value), "{value} should be numeric");
        }
    }

    #[test]
    fn test_non_numbers() {
        for value in ["", "abc", "1,000", "NaN", "1.2.3", "12px", "e5", "-", "inf"] {
            assert!(!is_number(value), "{value} should not be numeric");
        }
    }

    #[test]
    fn test_booleans() {
        for value in ["true", "FALSE", "Yes", "no", "1", "0"] {
            assert!(is_boolean(value), "{value} should be boolean");
        }
        for value in ["y", "on", "2", "truthy"] {
            assert!(!is_boolean(value), "{value} should not be boolean");
        }
    }

    #[test]
    fn test_dates() {
        for value in [
            "2024-01-15",
            "2024/01/15",
            "01/15/2024",
            "2024-01-15T10:30",
            "2024-01-15T10:30:45",
            "2024-01-15T10:30:45.123",
            "2024-01-15 10:30:45",
            "2024-01-15T10:30:45Z",
            "2024-01-15T10:30:45+02:00",
            "Mon, 15 Jan 2024 10:30:45 +0000",
        ] {
            assert!(is_date(value), "{value} should be a date");
        }
    }

    #[test]
    fn test_non_dates() {
        for value in ["", "yesterday", "2024-13-01", "2024-02-30", "15.01.2024", "2024"] {
            assert!(!is_date(value), "{value} should not be a date");
        }
    }
}
