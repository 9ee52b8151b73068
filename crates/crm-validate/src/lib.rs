//! Rule-based validation for parsed CRM records.
//!
//! This pass runs after parsing and is stricter than parse-time schema
//! checks: a record failing any rule is left out of
//! [`ValidationOutcome::valid`], while every individual failure is listed in
//! [`ValidationOutcome::invalid`].

mod checks;
mod engine;

pub use checks::{
    DATE_MESSAGE, EMAIL_MESSAGE, PHONE_MESSAGE, REQUIRED_MESSAGE, check_rule, enum_message,
    is_email, is_iso_date, is_phone,
};
pub use engine::validate_rows;

pub use crm_model::{RowIssue, RuleKind, ValidationOutcome, ValidationRule};
