//! In-memory record store.
//!
//! Same contract as the file store, held behind an async `RwLock`. Used in
//! tests and anywhere a process-local store is enough.

use crate::error::{Result, StoreError};
use crate::gateway::RecordStore;
use async_trait::async_trait;
use chrono::Utc;
use rigparts_fields::{Category, CoercedRecord, ComponentRecord, RecordId};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// A record store keeping all records in process memory.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Category, Vec<ComponentRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total record count across all categories.
    pub async fn len(&self) -> usize {
        self.records.read().await.values().map(Vec::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self, category: Category) -> Result<Vec<ComponentRecord>> {
        let records = self.records.read().await;
        let mut listed = records.get(&category).cloned().unwrap_or_default();
        listed.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(listed)
    }

    async fn insert(&self, category: Category, values: CoercedRecord) -> Result<ComponentRecord> {
        let record = ComponentRecord::create(values);

        let mut records = self.records.write().await;
        let bucket = records.entry(category).or_default();
        if bucket.iter().any(|r| r.id == record.id) {
            return Err(StoreError::constraint(format!(
                "duplicate record id in {category}: {}",
                record.id
            )));
        }

        bucket.push(record.clone());
        debug!(category = %category, id = %record.id, "record inserted");
        Ok(record)
    }

    async fn update(
        &self,
        category: Category,
        id: &RecordId,
        values: CoercedRecord,
    ) -> Result<ComponentRecord> {
        let mut records = self.records.write().await;
        let bucket = records
            .get_mut(&category)
            .ok_or_else(|| StoreError::not_found(category, id))?;
        let record = bucket
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or_else(|| StoreError::not_found(category, id))?;

        record.values = values;
        record.updated_at = Utc::now();
        debug!(category = %category, id = %id, "record updated");
        Ok(record.clone())
    }

    async fn delete(&self, category: Category, id: &RecordId) -> Result<()> {
        let mut records = self.records.write().await;
        let bucket = records
            .get_mut(&category)
            .ok_or_else(|| StoreError::not_found(category, id))?;

        let before = bucket.len();
        bucket.retain(|r| r.id != *id);
        if bucket.len() == before {
            return Err(StoreError::not_found(category, id));
        }

        debug!(category = %category, id = %id, "record deleted");
        Ok(())
    }
}
