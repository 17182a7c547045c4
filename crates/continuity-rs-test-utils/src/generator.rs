use async_trait::async_trait;
use continuity_rs_llm::{GenerationError, TextGenerator};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FixedGenerator {
    response: String,
}

impl FixedGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for FixedGenerator {
    fn name(&self) -> &str {
        "Fixed"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Ok(self.response.clone())
    }
}

#[derive(Debug, Clone)]
enum Failure {
    Status(u16, String),
    Malformed(String),
}

/// Generator that always fails, counting how often it was called.
#[derive(Debug, Clone)]
pub struct FailingGenerator {
    failure: Failure,
    calls: Arc<Mutex<usize>>,
}

impl FailingGenerator {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            failure: Failure::Status(status, body.into()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn malformed(snippet: impl Into<String>) -> Self {
        Self {
            failure: Failure::Malformed(snippet.into()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    fn name(&self) -> &str {
        "Failing"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        *self.calls.lock() += 1;
        Err(match &self.failure {
            Failure::Status(status, snippet) => GenerationError::Status {
                status: *status,
                snippet: snippet.clone(),
            },
            Failure::Malformed(snippet) => GenerationError::MalformedResponse(snippet.clone()),
        })
    }
}

/// Generator returning a fixed response and keeping every prompt it saw.
#[derive(Debug, Clone)]
pub struct RecordingGenerator {
    response: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl RecordingGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    fn name(&self) -> &str {
        "Recording"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().push(prompt.to_string());
        Ok(self.response.clone())
    }
}
