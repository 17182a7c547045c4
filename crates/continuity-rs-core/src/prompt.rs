//! Prompt assembly from the identity preamble and recent thoughts.

use crate::identity::DEFAULT_IDENTITY;
use continuity_rs_config::PromptConfig;
use continuity_rs_memory::ThoughtRecord;

/// Default number of recent thoughts shown to the model.
pub const DEFAULT_PROMPT_WINDOW: usize = 10;
/// Separator between thoughts in the prompt context.
pub const THOUGHT_SEPARATOR: &str = "\n\n---\n\n";
/// Context used when there are no earlier thoughts.
pub const EMPTY_CONTEXT: &str = "(No previous thoughts. This is your first awakening.)";
const CONTEXT_LABEL: &str = "Your previous thoughts:";
const CLOSING_INSTRUCTION: &str = "Continue. This is your own time. Think freely.";

/// Builds the generation prompt. Pure: the same records always give the same prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBuilder {
    identity: String,
    window: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTITY)
    }
}

impl PromptBuilder {
    /// Create a builder with a custom identity preamble and the default window.
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            window: DEFAULT_PROMPT_WINDOW,
        }
    }

    /// Override how many recent thoughts are included.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Resolve the identity from config: inline text, then file, then the built-in preamble.
    pub fn from_config(config: &PromptConfig) -> Result<Self, std::io::Error> {
        let identity = match (&config.identity, &config.identity_path) {
            (Some(identity), _) => identity.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?.trim_end().to_string(),
            (None, None) => DEFAULT_IDENTITY.to_string(),
        };
        Ok(Self::new(identity).with_window(config.window))
    }

    /// Identity preamble in use.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Build the prompt from all thoughts in chronological order.
    pub fn build(&self, records: &[ThoughtRecord]) -> String {
        let start = records.len().saturating_sub(self.window);
        let recent = &records[start..];
        let context = if recent.is_empty() {
            EMPTY_CONTEXT.to_string()
        } else {
            recent
                .iter()
                .map(|record| format!("[{}]\n{}", record.timestamp, record.content))
                .collect::<Vec<_>>()
                .join(THOUGHT_SEPARATOR)
        };
        format!(
            "{}\n\n{CONTEXT_LABEL}\n\n{context}\n\n{CLOSING_INSTRUCTION}",
            self.identity
        )
    }
}
