//! Provider clients exercised against a local stub server.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use continuity_rs_config::{AnthropicConfig, GeminiConfig};
use continuity_rs_llm::{
    AnthropicGenerator, GeminiGenerator, GenerationError, MAX_DIAGNOSTIC_CHARS, TextGenerator,
};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;

const GEMINI_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";
const ANTHROPIC_PATH: &str = "/v1/messages";

#[derive(Debug, Clone)]
struct CapturedRequest {
    query: HashMap<String, String>,
    headers: HeaderMap,
    body: Value,
}

/// Canned reply plus a log of every request received.
#[derive(Clone)]
struct StubProvider {
    status: StatusCode,
    reply: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubProvider {
    fn new(status: StatusCode, reply: impl Into<String>) -> Self {
        Self {
            status,
            reply: reply.into(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().clone()
    }
}

async fn capture(
    State(stub): State<StubProvider>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    axum::Json(body): axum::Json<Value>,
) -> (StatusCode, String) {
    stub.requests.lock().push(CapturedRequest {
        query,
        headers,
        body,
    });
    (stub.status, stub.reply.clone())
}

/// Serve `stub` at `path` on an ephemeral port and return the base URL.
async fn serve(path: &str, stub: StubProvider) -> String {
    let router = Router::new().route(path, post(capture)).with_state(stub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn gemini(base_url: String) -> GeminiGenerator {
    GeminiGenerator::new(
        GeminiConfig {
            base_url,
            ..GeminiConfig::default()
        },
        "gemini-secret",
    )
}

fn anthropic(base_url: String) -> AnthropicGenerator {
    AnthropicGenerator::new(
        AnthropicConfig {
            base_url,
            ..AnthropicConfig::default()
        },
        "anthropic-secret",
    )
}

#[tokio::test]
async fn gemini_returns_first_candidate_text() {
    let reply = json!({
        "candidates": [{ "content": { "parts": [{ "text": "a quiet thought" }] } }]
    });
    let stub = StubProvider::new(StatusCode::OK, reply.to_string());
    let base_url = serve(GEMINI_PATH, stub.clone()).await;

    let text = gemini(base_url).generate("prompt body").await.expect("text");
    assert_eq!(text, "a quiet thought");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.query.get("key").map(String::as_str), Some("gemini-secret"));
    assert_eq!(
        request.body["contents"][0]["parts"][0]["text"],
        json!("prompt body")
    );
    assert_eq!(request.body["generationConfig"]["maxOutputTokens"], json!(1000));
}

#[tokio::test]
async fn anthropic_sends_auth_headers_and_reads_first_block() {
    let reply = json!({ "content": [{ "type": "text", "text": "hello" }] });
    let stub = StubProvider::new(StatusCode::OK, reply.to_string());
    let base_url = serve(ANTHROPIC_PATH, stub.clone()).await;

    let text = anthropic(base_url).generate("prompt body").await.expect("text");
    assert_eq!(text, "hello");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let headers = &requests[0].headers;
    assert_eq!(headers["x-api-key"], "anthropic-secret");
    assert_eq!(headers["anthropic-version"], "2023-06-01");
    assert_eq!(
        requests[0].body["messages"],
        json!([{ "role": "user", "content": "prompt body" }])
    );
}

#[tokio::test]
async fn non_success_status_fails_once_without_retry() {
    let stub = StubProvider::new(StatusCode::SERVICE_UNAVAILABLE, "overloaded");
    let base_url = serve(GEMINI_PATH, stub.clone()).await;

    let err = gemini(base_url).generate("prompt").await.unwrap_err();
    match err {
        GenerationError::Status { status, snippet } => {
            assert_eq!(status, 503);
            assert_eq!(snippet, "overloaded");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(stub.requests().len(), 1);
}

#[tokio::test]
async fn missing_text_field_is_malformed_with_truncated_snippet() {
    let filler = "x".repeat(2 * MAX_DIAGNOSTIC_CHARS);
    let reply = json!({ "candidates": [], "padding": filler });
    let stub = StubProvider::new(StatusCode::OK, reply.to_string());
    let base_url = serve(GEMINI_PATH, stub).await;

    let err = gemini(base_url).generate("prompt").await.unwrap_err();
    match err {
        GenerationError::MalformedResponse(snippet) => {
            assert_eq!(snippet.chars().count(), MAX_DIAGNOSTIC_CHARS);
            assert!(snippet.starts_with('{'));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let stub = StubProvider::new(StatusCode::OK, "<html>not json</html>");
    let base_url = serve(ANTHROPIC_PATH, stub).await;

    let err = anthropic(base_url).generate("prompt").await.unwrap_err();
    match err {
        GenerationError::MalformedResponse(snippet) => {
            assert_eq!(snippet, "<html>not json</html>")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = anthropic(format!("http://{addr}"))
        .generate("prompt")
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Transport(_)));
}
