//! Record store gateway for the rigparts inventory
//!
//! Defines the async `RecordStore` seam the inventory manager talks
//! through, plus two implementations:
//!
//! - [`FileStore`] — one JSON document per record under per-category
//!   directories, atomic writes via temp file + rename
//! - [`MemoryStore`] — process-local store for tests and embedding
//!
//! The store is the sole arbiter of persisted state: it assigns record
//! identifiers and timestamps on insert, and callers reload authoritative
//! state after each mutation rather than merging optimistically.

mod error;
mod file;
mod gateway;
mod memory;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use gateway::RecordStore;
pub use memory::MemoryStore;
