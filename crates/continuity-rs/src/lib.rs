//! Public SDK surface for Continuity.
//!
//! This crate re-exports the building blocks used by the `continuity` binary
//! and provides a small logging initializer so embedders get the same output.

/// Re-export for convenience.
pub use continuity_rs_config as config;
pub use continuity_rs_core as core;
/// Re-export for convenience.
pub use continuity_rs_llm as llm;
/// Re-export for convenience.
pub use continuity_rs_memory as memory;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// Defaults to the `info` level; `RUST_LOG` overrides it. This is a no-op
/// without the feature, or when a logger is already installed.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format_timestamp_millis()
            .try_init();
    }
}
