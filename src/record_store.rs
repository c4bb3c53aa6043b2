//! File-backed record store.
//!
//! Every collection lives in a single JSON array at `<data_dir>/<collection>.json`
//! and is read and written as a whole. Writes go to `<collection>.json.tmp` first
//! and are renamed over the live file, so a reader never sees a half-written array.
//!
//! Saving an unmodified load reproduces the file as long as it was written in
//! `serde_json`'s compact form and the record types keep every field they read.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tracing::{debug, instrument};

use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
}

impl RecordStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the file backing `collection`.
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection))
    }

    /// Seeds `collection` with an empty array if its file does not exist yet.
    #[instrument(skip(self))]
    pub async fn ensure_collection(&self, collection: &str) -> Result<(), StoreError> {
        let path = self.collection_path(collection);
        let exists = fs::try_exists(&path)
            .await
            .map_err(|e| StoreError::read(collection, e))?;
        if exists {
            return Ok(());
        }

        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| StoreError::write(collection, e))?;
        self.save::<serde_json::Value>(collection, &[]).await?;
        debug!(path = %path.display(), "Seeded empty collection");
        Ok(())
    }

    /// Reads the full persisted sequence of `collection`.
    #[instrument(skip(self))]
    pub async fn load<R: DeserializeOwned>(&self, collection: &str) -> Result<Vec<R>, StoreError> {
        let path = self.collection_path(collection);
        let bytes = fs::read(&path)
            .await
            .map_err(|e| StoreError::read(collection, e))?;
        let records: Vec<R> =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::read(collection, e))?;

        debug!(count = records.len(), "Loaded collection");
        Ok(records)
    }

    /// Replaces the persisted content of `collection` with `records`.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub async fn save<R: Serialize>(&self, collection: &str, records: &[R]) -> Result<(), StoreError> {
        let path = self.collection_path(collection);
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec(records).map_err(|e| StoreError::write(collection, e))?;

        fs::write(&temp_path, bytes)
            .await
            .map_err(|e| StoreError::write(collection, e))?;

        // Atomic rename
        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| StoreError::write(collection, e))?;

        debug!("Saved collection");
        Ok(())
    }
}
