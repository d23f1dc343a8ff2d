//! Error types for the record store

use rigparts_fields::Category;
use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors reported by a record store. Never retried automatically — callers
/// surface them and keep their triggering state so the user can retry.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this identifier in the category
    #[error("record not found in {category}: {id}")]
    NotFound { category: Category, id: String },

    /// Constraint violation (duplicate identifier, malformed payload)
    #[error("constraint violation: {message}")]
    Constraint { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Create a not-found error
    pub fn not_found(category: Category, id: impl ToString) -> Self {
        Self::NotFound {
            category,
            id: id.to_string(),
        }
    }

    /// Create a constraint violation error
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint {
            message: message.into(),
        }
    }

    /// Check whether this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
