//! Validation stage: partitions raw batch files into schema-conformant and
//! rejected sets, and decides each column's preprocessing role once for
//! the rest of the run.

#![deny(unsafe_code)]

mod checks;
mod error;
mod validator;

pub use checks::{column_count_matches, filename_matches_schema, fully_missing_columns};
pub use error::ValidationError;
pub use validator::{DataValidation, ValidationOutcome};
