//! Configuration models, layered config loading, and credential resolution.
//!
//! This crate owns the Continuity config schema, the JSON5 layer loader, and
//! the pure provider-selection logic used by the orchestrator and the CLI.

mod credentials;
mod error;
mod loader;
mod model;

/// Credentials and provider selection.
pub use credentials::{
    ANTHROPIC_API_KEY_ENV, Credentials, GEMINI_API_KEY_ENV, ProviderKind, ProviderSelection,
};
/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Layered config types and loader options.
pub use loader::{ConfigLayer, ConfigLayerSource, LayeredConfig, LayeredConfigOptions};
/// Configuration schema models.
pub use model::*;
