//! Configuration schema for Continuity.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root config for a Continuity run.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ContinuityConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl ContinuityConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> ContinuityConfigBuilder {
        ContinuityConfigBuilder::new()
    }
}

/// Builder for assembling a `ContinuityConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct ContinuityConfigBuilder {
    config: ContinuityConfig,
}

impl ContinuityConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: ContinuityConfig::default(),
        }
    }

    /// Replace the record store configuration.
    pub fn store(mut self, store: StoreConfig) -> Self {
        self.config.store = store;
        self
    }

    /// Replace the prompt configuration.
    pub fn prompt(mut self, prompt: PromptConfig) -> Self {
        self.config.prompt = prompt;
        self
    }

    /// Replace the page configuration.
    pub fn page(mut self, page: PageConfig) -> Self {
        self.config.page = page;
        self
    }

    /// Replace the provider configuration.
    pub fn providers(mut self, providers: ProvidersConfig) -> Self {
        self.config.providers = providers;
        self
    }

    /// Finalize and return the built `ContinuityConfig`.
    pub fn build(self) -> ContinuityConfig {
        self.config
    }
}

/// Location of the thought record directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("thoughts")
}

/// Prompt window and identity preamble overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PromptConfig {
    /// Number of most recent thoughts included in the prompt.
    #[serde(default = "default_prompt_window")]
    pub window: usize,
    /// Inline identity preamble replacing the built-in one.
    #[serde(default)]
    pub identity: Option<String>,
    /// File holding the identity preamble; ignored when `identity` is set.
    #[serde(default)]
    pub identity_path: Option<PathBuf>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            window: default_prompt_window(),
            identity: None,
            identity_path: None,
        }
    }
}

fn default_prompt_window() -> usize {
    10
}

/// Rendered page location and window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    #[serde(default = "default_page_path")]
    pub path: PathBuf,
    /// Number of most recent thoughts shown on the page.
    #[serde(default = "default_page_window")]
    pub window: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            path: default_page_path(),
            window: default_page_window(),
        }
    }
}

fn default_page_path() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_page_window() -> usize {
    50
}

/// Settings for both text-generation providers.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub anthropic: AnthropicConfig,
}

/// Gemini `generateContent` settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_gemini_temperature")]
    pub temperature: f32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            max_output_tokens: default_max_tokens(),
            temperature: default_gemini_temperature(),
        }
    }
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_gemini_temperature() -> f32 {
    0.9
}

fn default_max_tokens() -> u32 {
    1000
}

/// Anthropic Messages API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnthropicConfig {
    #[serde(default = "default_anthropic_base_url")]
    pub base_url: String,
    #[serde(default = "default_anthropic_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_anthropic_version")]
    pub api_version: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            base_url: default_anthropic_base_url(),
            model: default_anthropic_model(),
            max_tokens: default_max_tokens(),
            api_version: default_anthropic_version(),
        }
    }
}

fn default_anthropic_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_anthropic_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_anthropic_version() -> String {
    "2023-06-01".to_string()
}
