//! Error types for the inventory manager

use rigparts_fields::ValidationError;
use rigparts_store::StoreError;
use thiserror::Error;

/// Result type for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Errors surfaced by the category manager.
///
/// Validation errors are resolved locally and never reach the store; store
/// errors are surfaced without retry and the triggering state (open form,
/// current list) is preserved; an expired session is fatal to the view.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Client-side validation failure, form stays open
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store-reported failure, not retried automatically
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No current session on a protected action
    #[error("session expired")]
    SessionExpired,

    /// Submit with no form open
    #[error("no form open")]
    NoOpenForm,
}

impl InventoryError {
    /// Whether this error ends the current view (vs. leaving it open for
    /// the user to correct and retry).
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}
