//! Provider credentials and the pure selection rule between them.

use crate::ConfigError;
use std::fmt;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable holding the Anthropic API key.
pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Supported text-generation providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Google Gemini `generateContent`.
    Gemini,
    /// Anthropic Messages API.
    Anthropic,
}

impl ProviderKind {
    /// Human-readable provider name.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "Gemini",
            ProviderKind::Anthropic => "Anthropic",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// API keys resolved from the execution environment.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub gemini_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "***"))
            .field(
                "anthropic_api_key",
                &self.anthropic_api_key.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

impl Credentials {
    /// Read both keys from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read both keys through a lookup function; empty values count as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            gemini_api_key: read(GEMINI_API_KEY_ENV),
            anthropic_api_key: read(ANTHROPIC_API_KEY_ENV),
        }
    }

    /// Pick the provider to use: Gemini when its key is present, else Anthropic.
    pub fn select(&self) -> Result<ProviderSelection, ConfigError> {
        if let Some(api_key) = &self.gemini_api_key {
            return Ok(ProviderSelection {
                kind: ProviderKind::Gemini,
                api_key: api_key.clone(),
            });
        }
        if let Some(api_key) = &self.anthropic_api_key {
            return Ok(ProviderSelection {
                kind: ProviderKind::Anthropic,
                api_key: api_key.clone(),
            });
        }
        Err(ConfigError::MissingCredentials {
            gemini: GEMINI_API_KEY_ENV,
            anthropic: ANTHROPIC_API_KEY_ENV,
        })
    }
}

/// The provider chosen for a run together with its key.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSelection {
    pub kind: ProviderKind,
    pub api_key: String,
}

impl fmt::Debug for ProviderSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSelection")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
