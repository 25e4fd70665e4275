//! Precondition checks shared by every calculation.
//!
//! Raw requests arrive with each numeric field either present or absent. This crate
//! decides, once, which fields are usable and reports *all* failing fields together
//! so a caller can highlight them at the same time.

pub mod error;
pub mod input_validator;
pub mod rules;

pub use error::{FieldFault, ValidationError};
pub use input_validator::{DEFAULT_MAX_TOTAL_PERIODS, InputValidator};
pub use rules::{FieldRule, ValidationReport, check_field, validate_fields};
