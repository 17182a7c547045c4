//! Error types for the core crate.

use continuity_rs_config::ConfigError;
use continuity_rs_llm::GenerationError;
use continuity_rs_memory::StoreError;
use thiserror::Error;

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum ContinuityCoreError {
    /// Configuration or credential error.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Record store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// Text generation failed; nothing was persisted.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// IO error while reading the identity or writing the page.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
