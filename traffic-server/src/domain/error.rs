//! Domain error types.
//!
//! These errors describe a route record whose cells cannot be used for
//! scoring. They are distinct from table loading errors, which are fatal at
//! startup.

/// A numeric cell of a route record could not be read.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The cell was empty or `NaN`
    #[error("missing value for {field}")]
    Missing { field: &'static str },

    /// The cell held something other than a number
    #[error("non-numeric value {value:?} for {field}")]
    NotNumeric { field: &'static str, value: String },
}
