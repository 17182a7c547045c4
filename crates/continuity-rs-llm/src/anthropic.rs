//! Anthropic Messages API client.

use crate::GenerationError;
use crate::generator::TextGenerator;
use crate::http::{extract_text, post_json};
use async_trait::async_trait;
use continuity_rs_config::AnthropicConfig;
use log::info;
use serde_json::{Value, json};

/// JSON pointer to the generated text in a Messages response.
const TEXT_POINTER: &str = "/content/0/text";

/// Generator backed by the Anthropic Messages API, authenticated with `x-api-key`.
#[derive(Clone)]
pub struct AnthropicGenerator {
    config: AnthropicConfig,
    api_key: String,
    client: reqwest::Client,
}

impl AnthropicGenerator {
    /// Create a client with default transport settings.
    pub fn new(config: AnthropicConfig, api_key: impl Into<String>) -> Self {
        Self {
            config,
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Messages endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }

    /// Request body for a prompt sent as a single user message.
    pub fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "messages": [{ "role": "user", "content": prompt }],
        })
    }
}

#[async_trait]
impl TextGenerator for AnthropicGenerator {
    fn name(&self) -> &str {
        "Anthropic"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        info!(
            "anthropic request (model={}, prompt_len={})",
            self.config.model,
            prompt.len()
        );
        let request = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.config.api_version);
        let body = post_json(request, &self.request_body(prompt)).await?;
        extract_text(&body, TEXT_POINTER)
    }
}
