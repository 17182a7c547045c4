//! Append-only thought record storage for Continuity.

pub mod error;
pub mod model;
pub mod store;

/// Store error type.
pub use error::StoreError;
/// Thought record model.
pub use model::ThoughtRecord;
/// Store interface and default file implementation.
pub use store::{FileThoughtStore, RECORD_EXTENSION, ThoughtStore};
