//! The on-disk calculation history.
//!
//! The history file holds a JSON array of [`HistoryRecord`]s in append
//! order. An unreadable or corrupt file is treated as empty when appending,
//! so one bad write never blocks new calculations; [`HistoryStore::list`]
//! reports the same condition as an error instead.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use reclaimer_types::HistoryRecord;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::StoreError;

/// Append-only JSON history file with a single writer.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    writer: Mutex<()>,
}

impl HistoryStore {
    /// Open the history at `path`, creating parent directories and an
    /// empty `[]` file if none exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or file cannot be
    /// created.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        match tokio::fs::try_exists(&path).await {
            Ok(true) => {}
            Ok(false) => {
                tokio::fs::write(&path, b"[]")
                    .await
                    .map_err(|e| StoreError::io(&path, e))?;
                debug!(path = %path.display(), "created empty history file");
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        }

        Ok(Self {
            path,
            writer: Mutex::new(()),
        })
    }

    /// Location of the history file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Json`] if the list cannot be encoded or
    /// [`StoreError::Io`] if the new file cannot be written or renamed into
    /// place.
    pub async fn append(&self, record: &HistoryRecord) -> Result<(), StoreError> {
        let _guard = self.writer.lock().await;

        let mut records = self.read_lenient().await;
        records.push(record.clone());

        let encoded = serde_json::to_vec_pretty(&records)?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, &encoded)
            .await
            .map_err(|e| StoreError::io(&staging, e))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        debug!(
            id = %record.id,
            entries = records.len(),
            "history record appended"
        );
        Ok(())
    }

    /// Every stored record in append order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read or
    /// [`StoreError::Json`] if it is not a valid record list.
    pub async fn list(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn read_lenient(&self) -> Vec<HistoryRecord> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "history unreadable, starting a new list");
                return Vec::new();
            }
        };
        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "history corrupt, starting a new list");
            Vec::new()
        })
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
