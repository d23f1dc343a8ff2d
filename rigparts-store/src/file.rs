//! File-backed record store.
//!
//! One JSON document per record under a per-category directory:
//!
//! ```text
//! <root>/
//! ├── cpus/
//! │   ├── {ulid}.json
//! ├── ram/
//! │   ├── {ulid}.json
//! └── ...
//! ```
//!
//! Writes are atomic (temp file + rename). Directories are created lazily;
//! listing a category that has never been written returns an empty list.

use crate::error::{Result, StoreError};
use crate::gateway::RecordStore;
use async_trait::async_trait;
use chrono::Utc;
use rigparts_fields::{Category, CoercedRecord, ComponentRecord, RecordId};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// A record store persisting each record as a JSON file.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding a category's records.
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.as_str())
    }

    /// Path to a record's JSON file.
    pub fn record_path(&self, category: Category, id: &RecordId) -> PathBuf {
        self.category_dir(category).join(format!("{id}.json"))
    }

    async fn read_record(&self, category: Category, id: &RecordId) -> Result<ComponentRecord> {
        let path = self.record_path(category, id);
        if !path.exists() {
            return Err(StoreError::not_found(category, id));
        }
        let content = fs::read_to_string(&path).await?;
        let record: ComponentRecord = serde_json::from_str(&content)?;
        Ok(record)
    }

    async fn write_record(&self, category: Category, record: &ComponentRecord) -> Result<()> {
        let path = self.record_path(category, &record.id);
        let content = serde_json::to_string_pretty(record)?;
        atomic_write(&path, content.as_bytes()).await
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn list(&self, category: Category) -> Result<Vec<ComponentRecord>> {
        let dir = self.category_dir(category);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let content = fs::read_to_string(&path).await?;
            let record: ComponentRecord = serde_json::from_str(&content)?;
            records.push(record);
        }

        // Newest first; id breaks creation-time ties deterministically.
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(records)
    }

    async fn insert(&self, category: Category, values: CoercedRecord) -> Result<ComponentRecord> {
        let record = ComponentRecord::create(values);
        let path = self.record_path(category, &record.id);
        if path.exists() {
            return Err(StoreError::constraint(format!(
                "duplicate record id in {category}: {}",
                record.id
            )));
        }

        self.write_record(category, &record).await?;
        debug!(category = %category, id = %record.id, "record inserted");
        Ok(record)
    }

    async fn update(
        &self,
        category: Category,
        id: &RecordId,
        values: CoercedRecord,
    ) -> Result<ComponentRecord> {
        let mut record = self.read_record(category, id).await?;
        record.values = values;
        record.updated_at = Utc::now();

        self.write_record(category, &record).await?;
        debug!(category = %category, id = %record.id, "record updated");
        Ok(record)
    }

    async fn delete(&self, category: Category, id: &RecordId) -> Result<()> {
        let path = self.record_path(category, id);
        if !path.exists() {
            return Err(StoreError::not_found(category, id));
        }

        fs::remove_file(&path).await?;
        debug!(category = %category, id = %id, "record deleted");
        Ok(())
    }
}

/// Atomic write via temp file and rename
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).await?;

    // Rename is atomic on the same filesystem
    fs::rename(&temp_path, path).await?;

    Ok(())
}
