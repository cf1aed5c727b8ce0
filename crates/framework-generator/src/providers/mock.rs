use async_trait::async_trait;
use scholar_core::{FailureKind, FrameworkGenerator, GenerationError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::prompt::SECTION_TITLES;

#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A canned five-section framework mentioning the idea.
    Echo,
    Text(String),
    /// Fails with this cause.
    Failure(String),
}

/// Mock generator for tests and offline runs.
pub struct MockGenerator {
    response: MockResponse,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockGenerator {
    pub fn new(response: MockResponse) -> Self {
        Self { response, delay: None, calls: AtomicUsize::new(0) }
    }

    pub fn echo() -> Self {
        Self::new(MockResponse::Echo)
    }

    pub fn responding(text: impl Into<String>) -> Self {
        Self::new(MockResponse::Text(text.into()))
    }

    pub fn failing(cause: impl Into<String>) -> Self {
        Self::new(MockResponse::Failure(cause.into()))
    }

    /// Hold every call for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn echo_framework(idea: &str) -> String {
        SECTION_TITLES
            .iter()
            .map(|title| format!("### {title}\n- Simulated notes on: {idea}\n"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl FrameworkGenerator for MockGenerator {
    async fn generate_framework(&self, idea: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.response {
            MockResponse::Echo => Ok(Self::echo_framework(idea)),
            MockResponse::Text(text) => Ok(text.clone()),
            MockResponse::Failure(cause) => {
                tracing::error!(cause = %cause, "Error generating framework");
                Err(GenerationError::new(FailureKind::Other, cause.clone()))
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
