//! Shared request/response plumbing for provider clients.

use crate::error::{GenerationError, diagnostic_snippet};
use log::debug;
use reqwest::RequestBuilder;
use serde_json::Value;

/// Send a JSON body once and decode the JSON response.
///
/// Non-success statuses and undecodable bodies fail with a truncated snippet
/// of the raw body.
pub(crate) async fn post_json(request: RequestBuilder, body: &Value) -> Result<Value, GenerationError> {
    let response = request.json(body).send().await?;
    let status = response.status();
    let raw = response.text().await?;
    debug!(
        "provider responded (status={}, body_len={})",
        status.as_u16(),
        raw.len()
    );
    if !status.is_success() {
        return Err(GenerationError::Status {
            status: status.as_u16(),
            snippet: diagnostic_snippet(&raw),
        });
    }
    serde_json::from_str(&raw)
        .map_err(|_| GenerationError::MalformedResponse(diagnostic_snippet(&raw)))
}

/// Read the text at a fixed JSON pointer, failing closed when absent.
pub(crate) fn extract_text(body: &Value, pointer: &str) -> Result<String, GenerationError> {
    body.pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| GenerationError::MalformedResponse(diagnostic_snippet(&body.to_string())))
}

#[cfg(test)]
mod tests {
    use super::extract_text;
    use crate::GenerationError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn extract_text_follows_pointer() {
        let body = json!({ "content": [{ "type": "text", "text": "hi" }] });
        assert_eq!(extract_text(&body, "/content/0/text").expect("text"), "hi");
    }

    #[test]
    fn extract_text_rejects_missing_or_non_string_values() {
        let body = json!({ "content": [{ "text": 42 }] });
        let err = extract_text(&body, "/content/0/text").unwrap_err();
        match err {
            GenerationError::MalformedResponse(snippet) => {
                assert_eq!(snippet, r#"{"content":[{"text":42}]}"#)
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(extract_text(&json!({}), "/content/0/text").is_err());
    }
}
