//! Error types for schema validation

use thiserror::Error;

/// Result type for validation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Client-side validation failures. These are resolved locally — a record
/// that fails validation never reaches the store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is empty or absent. Reports the first offender in
    /// schema field order.
    #[error("the {label} field is required")]
    MissingRequiredField { field: String, label: String },

    /// A numeric field's input does not parse as a number.
    #[error("invalid numeric value for {field}: {value:?}")]
    InvalidNumericValue { field: String, value: String },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
            label: label.into(),
        }
    }

    pub fn invalid_numeric(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumericValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// The name of the field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredField { field, .. } => field,
            Self::InvalidNumericValue { field, .. } => field,
        }
    }
}
