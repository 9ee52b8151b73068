#![deny(unsafe_code)]

//! Reshapes parsed records into target fields using a [`FieldMapping`].

mod transform;
mod utils;

pub use transform::{EMAIL_FIELD, transform_contacts, transform_record};
pub use utils::{missing_columns, unmapped_columns};

pub use crm_model::FieldMapping;
