use async_trait::async_trait;
use llm::LlmError;
use scholar_core::{FailureKind, FrameworkGenerator, GenerationError};

use crate::prompt::{self, EMPTY_RESPONSE_FALLBACK, FRAMEWORK_TEMPERATURE, SYSTEM_PROMPT};
use crate::traits::CompletionBackend;

/// Generates frameworks with a hosted model.
pub struct LlmFrameworkGenerator<B: CompletionBackend> {
    backend: B,
    name: String,
}

impl<B: CompletionBackend> LlmFrameworkGenerator<B> {
    pub fn new(backend: B) -> Self {
        let name = backend.describe();
        Self { backend, name }
    }
}

fn failure_kind(err: &LlmError) -> FailureKind {
    match err {
        LlmError::MissingApiKey(_) => FailureKind::Auth,
        LlmError::Http(_) => FailureKind::Transport,
        LlmError::InvalidJson(_) => FailureKind::MalformedResponse,
        LlmError::Status { .. } if err.is_auth() => FailureKind::Auth,
        LlmError::Status { .. } if err.is_rate_limited() => FailureKind::RateLimited,
        LlmError::Status { .. } => FailureKind::Service,
    }
}

#[async_trait]
impl<B: CompletionBackend> FrameworkGenerator for LlmFrameworkGenerator<B> {
    async fn generate_framework(&self, idea: &str) -> Result<String, GenerationError> {
        let user_prompt = prompt::framework_prompt(idea);
        tracing::info!(
            backend = %self.name,
            prompt_version = prompt::PROMPT_VERSION,
            idea_chars = idea.chars().count(),
            "generating framework"
        );

        match self.backend.complete(SYSTEM_PROMPT, &user_prompt, FRAMEWORK_TEMPERATURE).await {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!(backend = %self.name, "service returned an empty framework");
                Ok(EMPTY_RESPONSE_FALLBACK.to_string())
            }
            Ok(text) => {
                tracing::info!(backend = %self.name, chars = text.len(), "framework generated");
                Ok(text)
            }
            Err(err) => {
                let kind = failure_kind(&err);
                tracing::error!(backend = %self.name, ?kind, error = %err, "Error generating framework");
                Err(GenerationError::new(kind, err))
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholar_core::GENERATION_FAILED_MESSAGE;
    use std::sync::Mutex;

    /// Replays one canned reply and records what it was asked.
    struct Scripted {
        reply: Mutex<Option<Result<String, LlmError>>>,
        seen: Mutex<Vec<(String, String, f32)>>,
    }

    impl Scripted {
        fn new(reply: Result<String, LlmError>) -> Self {
            Self { reply: Mutex::new(Some(reply)), seen: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl CompletionBackend for Scripted {
        async fn complete(&self, system: &str, prompt: &str, temperature: f32) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push((system.to_string(), prompt.to_string(), temperature));
            self.reply.lock().unwrap().take().expect("called once")
        }

        fn describe(&self) -> String {
            "scripted/test".into()
        }
    }

    fn status(code: u16) -> LlmError {
        LlmError::Status { provider: "gemini", status: code, body: "nope".into() }
    }

    #[tokio::test]
    async fn sends_system_prompt_template_and_temperature() {
        let generator = LlmFrameworkGenerator::new(Scripted::new(Ok("### A\nb".into())));
        let out = generator.generate_framework("dynamic pricing").await.unwrap();
        assert_eq!(out, "### A\nb");

        let seen = generator.backend.seen.lock().unwrap();
        let (system, prompt, temperature) = &seen[0];
        assert_eq!(system, SYSTEM_PROMPT);
        assert!(prompt.contains("**dynamic pricing**"));
        assert!((temperature - 0.7).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn empty_reply_becomes_fallback_text() {
        let generator = LlmFrameworkGenerator::new(Scripted::new(Ok(String::new())));
        assert_eq!(generator.generate_framework("x").await.unwrap(), EMPTY_RESPONSE_FALLBACK);

        let generator = LlmFrameworkGenerator::new(Scripted::new(Ok(" \n".into())));
        assert_eq!(generator.generate_framework("x").await.unwrap(), EMPTY_RESPONSE_FALLBACK);
    }

    #[tokio::test]
    async fn failures_surface_only_the_generic_message() {
        let generator = LlmFrameworkGenerator::new(Scripted::new(Err(status(401))));
        let err = generator.generate_framework("x").await.unwrap_err();
        assert_eq!(err.to_string(), GENERATION_FAILED_MESSAGE);
        assert_eq!(err.kind(), FailureKind::Auth);
        assert!(err.detail().contains("401"));
    }

    #[test]
    fn status_codes_map_to_failure_kinds() {
        assert_eq!(failure_kind(&status(403)), FailureKind::Auth);
        assert_eq!(failure_kind(&status(429)), FailureKind::RateLimited);
        assert_eq!(failure_kind(&status(503)), FailureKind::Service);
        assert_eq!(failure_kind(&LlmError::MissingApiKey("GEMINI_API_KEY")), FailureKind::Auth);
        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(failure_kind(&LlmError::InvalidJson(bad_json)), FailureKind::MalformedResponse);
    }
}
