//! Error types for text generation.

/// Longest diagnostic snippet of a response body carried in an error.
pub const MAX_DIAGNOSTIC_CHARS: usize = 500;

/// Errors returned by text generators. Every variant is fatal for a run.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The request could not be sent or the response could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {snippet}")]
    Status { status: u16, snippet: String },
    /// The provider answered but the generated text was not where expected.
    #[error("Unexpected response: {0}")]
    MalformedResponse(String),
}

/// Truncate a raw body to the diagnostic limit.
pub(crate) fn diagnostic_snippet(raw: &str) -> String {
    raw.chars().take(MAX_DIAGNOSTIC_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::{MAX_DIAGNOSTIC_CHARS, diagnostic_snippet};
    use pretty_assertions::assert_eq;

    #[test]
    fn snippet_counts_characters_not_bytes() {
        let raw = "é".repeat(MAX_DIAGNOSTIC_CHARS + 10);
        let snippet = diagnostic_snippet(&raw);
        assert_eq!(snippet.chars().count(), MAX_DIAGNOSTIC_CHARS);
        assert_eq!(diagnostic_snippet("short"), "short");
    }
}
