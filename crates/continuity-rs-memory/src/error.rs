//! Error types for record store operations.

use std::path::PathBuf;

/// Errors returned by thought stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A record file for the same second already exists.
    #[error("record file already exists: {}", .0.display())]
    Collision(PathBuf),
}
