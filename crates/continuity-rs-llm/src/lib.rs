//! Text-generation clients for the hosted providers Continuity can think with.

mod anthropic;
pub mod error;
mod gemini;
mod generator;
mod http;

/// Anthropic Messages API client.
pub use anthropic::AnthropicGenerator;
/// Generation error type.
pub use error::{GenerationError, MAX_DIAGNOSTIC_CHARS};
/// Gemini `generateContent` client.
pub use gemini::GeminiGenerator;
/// Generator interface and provider factory.
pub use generator::{TextGenerator, build_generator};
