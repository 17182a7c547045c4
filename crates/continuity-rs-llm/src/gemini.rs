//! Gemini `generateContent` client.

use crate::GenerationError;
use crate::generator::TextGenerator;
use crate::http::{extract_text, post_json};
use async_trait::async_trait;
use continuity_rs_config::GeminiConfig;
use log::info;
use serde_json::{Value, json};

/// JSON pointer to the generated text in a `generateContent` response.
const TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// Generator backed by the Gemini API, authenticated with a `key` query parameter.
#[derive(Clone)]
pub struct GeminiGenerator {
    config: GeminiConfig,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiGenerator {
    /// Create a client with default transport settings.
    pub fn new(config: GeminiConfig, api_key: impl Into<String>) -> Self {
        Self {
            config,
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Endpoint URL without the key.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Request body for a prompt.
    pub fn request_body(&self, prompt: &str) -> Value {
        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "maxOutputTokens": self.config.max_output_tokens,
                "temperature": self.config.temperature,
            }
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let endpoint = self.endpoint();
        info!(
            "gemini request (model={}, prompt_len={})",
            self.config.model,
            prompt.len()
        );
        let request = self
            .client
            .post(&endpoint)
            .query(&[("key", self.api_key.as_str())]);
        let body = post_json(request, &self.request_body(prompt)).await?;
        extract_text(&body, TEXT_POINTER)
    }
}
