//! The record store gateway trait.
//!
//! The store is the sole owner of persisted state. Clients hold transient
//! snapshots and reload authoritative state after each mutation; no
//! optimistic merging happens on this side of the seam.

use crate::error::Result;
use async_trait::async_trait;
use rigparts_fields::{Category, CoercedRecord, ComponentRecord, RecordId};

/// Create/read/update/delete access to per-category component records.
///
/// All calls are async and awaited sequentially by the caller; the store
/// arbitrates consistency.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records in a category, newest first (creation time descending).
    async fn list(&self, category: Category) -> Result<Vec<ComponentRecord>>;

    /// Persist a new record. The store assigns the identifier and
    /// timestamps and returns the persisted record.
    async fn insert(&self, category: Category, values: CoercedRecord) -> Result<ComponentRecord>;

    /// Full-record replace keyed by identifier. Preserves `created_at`,
    /// refreshes `updated_at`. Idempotent: applying the same payload twice
    /// leaves the same persisted values.
    async fn update(
        &self,
        category: Category,
        id: &RecordId,
        values: CoercedRecord,
    ) -> Result<ComponentRecord>;

    /// Delete by identifier. Unknown identifiers are `StoreError::NotFound`.
    async fn delete(&self, category: Category, id: &RecordId) -> Result<()>;
}
