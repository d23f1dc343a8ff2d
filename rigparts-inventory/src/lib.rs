//! Inventory orchestration for rigparts
//!
//! Ties the schema/validator crate and the record store together behind a
//! single session-gated state machine, [`CategoryManager`]. A presentation
//! layer drives the manager: it selects categories, opens forms, submits
//! raw input, and renders `records()` / `form_fields()` — all persistence
//! and validation decisions live here or below.
//!
//! ## Basic usage
//!
//! ```rust,no_run
//! use rigparts_fields::{Category, RawRecord};
//! use rigparts_inventory::{CategoryManager, Session, StaticAuth};
//! use rigparts_store::FileStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileStore::new("/var/lib/rigparts");
//! let auth = StaticAuth::signed_in(Session::new("user-1"));
//! let mut manager = CategoryManager::new(store, auth);
//!
//! manager.select_category(Category::Ram).await?;
//! manager.begin_create();
//! let form = RawRecord::new()
//!     .with("name", "Vengeance 32GB")
//!     .with("brand", "Corsair")
//!     .with("price", "129.99")
//!     .with("capacity", "32GB")
//!     .with("type", "DDR5")
//!     .with("speed", "6000MHz");
//! manager.submit(&form).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod manager;
mod session;

pub use error::{InventoryError, Result};
pub use manager::{CategoryManager, FetchTicket, FormMode};
pub use session::{AuthProvider, Session, StaticAuth};
