//! Applies a rule set to a batch of records.

use crm_model::{Record, RowIssue, ValidationOutcome, ValidationRule};
use tracing::debug;

use crate::checks::check_rule;

/// Partitions `rows` into records passing every rule and individual failures.
///
/// Each rule reads the trimmed value of its field (a missing field reads as
/// empty). A record with one or more failures is excluded from `valid` and
/// contributes one [`RowIssue`] per failing rule, with `row` as its
/// zero-based index in `rows`.
pub fn validate_rows(rows: &[Record], rules: &[ValidationRule]) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    for (index, record) in rows.iter().enumerate() {
        let mut passed = true;

        for rule in rules {
            let value = record.get_or_empty(&rule.field).trim();
            if let Some(error) = check_rule(rule, value) {
                passed = false;
                outcome.invalid.push(RowIssue {
                    row: index,
                    field: rule.field.clone(),
                    error,
                });
            }
        }

        if passed {
            outcome.valid.push(record.clone());
        }
    }

    debug!(
        rows = rows.len(),
        rules = rules.len(),
        valid = outcome.valid.len(),
        issues = outcome.invalid.len(),
        "validated rows"
    );

    outcome
}
