//! CategoryManager — the orchestration state machine.
//!
//! Holds the current category, the record list, and the form mode, and
//! runs every mutation through validate → store → reload. The manager
//! performs no optimistic merging: after each successful mutation it
//! reloads authoritative state from the store.
//!
//! State machine:
//!
//! ```text
//! Viewing --begin_create--> Creating
//! Viewing --begin_edit----> Editing(record)
//! Creating|Editing --cancel---------> Viewing
//! Creating|Editing --submit ok------> Viewing (list reloaded)
//! Creating|Editing --submit err-----> unchanged (error surfaced)
//! select_category --------> Viewing unconditionally
//! ```

use crate::error::{InventoryError, Result};
use crate::session::{AuthProvider, Session};
use rigparts_fields::{
    fields_for, validate, Category, ComponentRecord, FieldSpec, RawRecord, RecordId,
};
use rigparts_store::{RecordStore, StoreError};
use tracing::{debug, warn};

/// What the form area is doing.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    /// List shown, no form
    Viewing,
    /// Empty form for a new record
    Creating,
    /// Form pre-filled from an existing record
    Editing(ComponentRecord),
}

impl FormMode {
    pub fn is_viewing(&self) -> bool {
        matches!(self, Self::Viewing)
    }
}

/// Handle for an in-flight list fetch. A ticket whose generation has been
/// superseded by a later fetch (or a category switch) is stale, and its
/// response is discarded instead of overwriting newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    category: Category,
    generation: u64,
}

/// Orchestrates one user's view of the inventory: category selection,
/// record list, form mode, and session-gated mutations.
pub struct CategoryManager<S, A> {
    store: S,
    auth: A,
    category: Category,
    records: Vec<ComponentRecord>,
    mode: FormMode,
    loading: bool,
    generation: u64,
}

impl<S: RecordStore, A: AuthProvider> CategoryManager<S, A> {
    /// Create a manager starting on the first category tab with an empty
    /// list. Call [`load_category`](Self::load_category) to populate it.
    pub fn new(store: S, auth: A) -> Self {
        Self {
            store,
            auth,
            category: Category::Cpus,
            records: Vec::new(),
            mode: FormMode::Viewing,
            loading: false,
            generation: 0,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The current record list (possibly stale until the next reload).
    pub fn records(&self) -> &[ComponentRecord] {
        &self.records
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The field list driving the current category's form.
    pub fn form_fields(&self) -> Vec<FieldSpec> {
        fields_for(self.category)
    }

    /// Raw form input for the current mode: pre-filled when editing, empty
    /// when creating, `None` when no form is open.
    pub fn form_input(&self) -> Option<RawRecord> {
        match &self.mode {
            FormMode::Viewing => None,
            FormMode::Creating => Some(RawRecord::new()),
            FormMode::Editing(record) => Some(RawRecord::from_values(&record.values)),
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Switch tabs: resets to `Viewing` unconditionally and reloads.
    pub async fn select_category(&mut self, category: Category) -> Result<()> {
        self.category = category;
        self.mode = FormMode::Viewing;
        debug!(category = %category, "category selected");
        self.load_category().await
    }

    /// Open an empty create form.
    pub fn begin_create(&mut self) {
        self.mode = FormMode::Creating;
    }

    /// Open an edit form pre-filled from a listed record.
    pub fn begin_edit(&mut self, id: &RecordId) -> Result<()> {
        let record = self
            .records
            .iter()
            .find(|r| r.id == *id)
            .ok_or_else(|| StoreError::not_found(self.category, id))?;
        self.mode = FormMode::Editing(record.clone());
        Ok(())
    }

    /// Close the form without persisting anything.
    pub fn cancel(&mut self) {
        self.mode = FormMode::Viewing;
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Start a list fetch: raises the loading flag and bumps the fetch
    /// generation so any earlier in-flight fetch becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.generation += 1;
        FetchTicket {
            category: self.category,
            generation: self.generation,
        }
    }

    /// Apply a fetch response. Stale tickets are discarded without touching
    /// any state owned by the newer fetch. On store failure the record list
    /// is left as it was — stale but visible.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: std::result::Result<Vec<ComponentRecord>, StoreError>,
    ) -> Result<()> {
        if ticket.generation != self.generation {
            warn!(
                category = %ticket.category,
                stale = ticket.generation,
                current = self.generation,
                "discarding stale list response"
            );
            return Ok(());
        }

        self.loading = false;
        match result {
            Ok(records) => {
                debug!(category = %ticket.category, count = records.len(), "list loaded");
                self.records = records;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Fetch the current category's records, newest first.
    pub async fn load_category(&mut self) -> Result<()> {
        let ticket = self.begin_fetch();
        let result = self.store.list(self.category).await;
        self.apply_fetch(ticket, result)
    }

    // =========================================================================
    // Mutations (session-gated)
    // =========================================================================

    async fn require_session(&self) -> Result<Session> {
        self.auth
            .current_session()
            .await
            .ok_or(InventoryError::SessionExpired)
    }

    /// Validate and persist the open form. Creates from a create form,
    /// otherwise updates the edited record by identifier; submitting with
    /// no form open is `NoOpenForm`. On any failure the form state is
    /// unchanged so the user can correct and retry; on success the manager
    /// returns to `Viewing` and reloads.
    pub async fn submit(&mut self, raw: &RawRecord) -> Result<()> {
        self.require_session().await?;

        let editing_id = match &self.mode {
            FormMode::Viewing => return Err(InventoryError::NoOpenForm),
            FormMode::Creating => None,
            FormMode::Editing(record) => Some(record.id.clone()),
        };

        let values = validate(self.category, raw)?;

        match editing_id {
            Some(id) => {
                self.store.update(self.category, &id, values).await?;
                debug!(category = %self.category, id = %id, "record updated via form");
            }
            None => {
                let record = self.store.insert(self.category, values).await?;
                debug!(category = %self.category, id = %record.id, "record created via form");
            }
        }

        self.mode = FormMode::Viewing;
        self.load_category().await
    }

    /// Delete a record by identifier and reload. Confirmation is a
    /// presentation concern gating this call, not part of the manager.
    pub async fn delete_record(&mut self, id: &RecordId) -> Result<()> {
        self.require_session().await?;

        self.store.delete(self.category, id).await?;
        debug!(category = %self.category, id = %id, "record deleted");
        self.load_category().await
    }
}
