use async_trait::async_trait;
use llm::{ChatMessage, ChatOptions, LlmError};

/// One system-plus-user completion against a hosted model.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str, temperature: f32) -> Result<String, LlmError>;

    /// Provider and model, for logs.
    fn describe(&self) -> String;
}

#[async_trait]
impl CompletionBackend for llm::Client {
    async fn complete(&self, system: &str, prompt: &str, temperature: f32) -> Result<String, LlmError> {
        let messages = vec![ChatMessage::system(system), ChatMessage::user(prompt)];
        let options = ChatOptions { temperature: Some(temperature) };
        self.chat(&messages, options).await
    }

    fn describe(&self) -> String {
        format!("{}/{}", self.provider().name(), self.model())
    }
}
