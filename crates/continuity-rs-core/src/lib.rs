//! Core thinking loop for Continuity.
//!
//! This crate owns prompt assembly, page rendering, and the orchestrator that
//! runs one load -> think -> persist -> render cycle.

pub mod error;
pub mod identity;
pub mod orchestrator;
pub mod page;
pub mod prompt;

pub use error::ContinuityCoreError;
pub use identity::DEFAULT_IDENTITY;
/// Orchestrator facade and run results.
pub use orchestrator::{Orchestrator, RunReport, RunStage};
pub use page::{PageRenderer, escape_html};
pub use prompt::PromptBuilder;
