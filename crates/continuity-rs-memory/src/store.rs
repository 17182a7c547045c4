//! Thought store interface and the file-backed implementation.

use crate::error::StoreError;
use crate::model::ThoughtRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File extension of record files.
pub const RECORD_EXTENSION: &str = "json";
/// Second-resolution, lexically sortable record file stem.
const FILE_STEM_FORMAT: &str = "%Y%m%d_%H%M%S";

#[async_trait]
/// Append-only thought storage used by the orchestrator.
pub trait ThoughtStore: Send + Sync {
    /// Load every readable record in creation order; unparsable entries are skipped.
    async fn load_all(&self) -> Result<Vec<ThoughtRecord>, StoreError>;

    /// Append a new record stamped with the current time.
    async fn append(&self, content: &str) -> Result<ThoughtRecord, StoreError>;
}

/// File-backed store keeping one pretty-printed JSON file per record.
#[derive(Debug, Clone)]
pub struct FileThoughtStore {
    /// Directory holding record files; created on first append.
    root: PathBuf,
}

impl FileThoughtStore {
    /// Create a store rooted at `root`. The directory is not touched until the first append.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory holding record files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Record file path for a creation instant.
    pub fn record_path(&self, created_at: DateTime<Utc>) -> PathBuf {
        self.root.join(format!(
            "{}.{RECORD_EXTENSION}",
            created_at.format(FILE_STEM_FORMAT)
        ))
    }

    /// Number of record files present, parseable or not.
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.record_files()?.len())
    }

    /// Append a record stamped at `now`.
    ///
    /// The sequence number is the current file count plus one. A file for the
    /// same second is never overwritten; the append fails with
    /// [`StoreError::Collision`] instead.
    pub fn append_at(&self, content: &str, now: DateTime<Utc>) -> Result<ThoughtRecord, StoreError> {
        std::fs::create_dir_all(&self.root)?;
        let sequence_number = self.count()? as u64 + 1;
        let record = ThoughtRecord::new(content, now, sequence_number);
        let path = self.record_path(now);
        let body = serde_json::to_string_pretty(&record)?;

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(StoreError::Collision(path));
            }
            Err(err) => return Err(err.into()),
        };
        file.write_all(body.as_bytes())?;
        file.sync_all()?;

        info!(
            "stored thought (number={}, path={}, content_len={})",
            record.sequence_number,
            path.display(),
            record.content.len()
        );
        Ok(record)
    }

    /// Record file paths sorted by name, which is creation order.
    fn record_files(&self) -> Result<Vec<PathBuf>, StoreError> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let is_record = path
                .extension()
                .is_some_and(|extension| extension == RECORD_EXTENSION);
            if is_record && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Read and decode one record file. All three fields must be present with
    /// the right types; a record lacking `thought_number` is treated as corrupt
    /// rather than shown with an unknown number.
    fn read_record(path: &Path) -> Result<ThoughtRecord, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[async_trait]
impl ThoughtStore for FileThoughtStore {
    async fn load_all(&self) -> Result<Vec<ThoughtRecord>, StoreError> {
        let mut records = Vec::new();
        for path in self.record_files()? {
            match Self::read_record(&path) {
                Ok(record) => records.push(record),
                Err(err) => {
                    debug!("skipping unreadable thought (path={}, error={err})", path.display());
                }
            }
        }
        debug!(
            "loaded thoughts (root={}, count={})",
            self.root.display(),
            records.len()
        );
        Ok(records)
    }

    async fn append(&self, content: &str) -> Result<ThoughtRecord, StoreError> {
        self.append_at(content, Utc::now())
    }
}
