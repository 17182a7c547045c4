//! Generator interface and provider factory.

use crate::{AnthropicGenerator, GeminiGenerator, GenerationError};
use async_trait::async_trait;
use continuity_rs_config::{ProviderKind, ProviderSelection, ProvidersConfig};
use log::info;
use std::sync::Arc;

/// A remote text generator: prompt in, text out, one attempt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name shown in run reports.
    fn name(&self) -> &str;
    /// Generate text for a prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Build the generator for the selected provider.
pub fn build_generator(
    selection: &ProviderSelection,
    providers: &ProvidersConfig,
) -> Arc<dyn TextGenerator> {
    info!("using {} provider", selection.kind);
    match selection.kind {
        ProviderKind::Gemini => Arc::new(GeminiGenerator::new(
            providers.gemini.clone(),
            selection.api_key.clone(),
        )),
        ProviderKind::Anthropic => Arc::new(AnthropicGenerator::new(
            providers.anthropic.clone(),
            selection.api_key.clone(),
        )),
    }
}
