use reqwest::Client as Http;
use serde_json::{json, Value};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LlmError>;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{0} not set")]
    MissingApiKey(&'static str),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl LlmError {
    /// The service rejected the credential.
    pub fn is_auth(&self) -> bool {
        matches!(self, LlmError::Status { status: 401 | 403, .. })
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, LlmError::Status { status: 429, .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, LlmError::Http(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    Groq,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::Groq => "groq",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Some(Provider::Gemini),
            "groq" => Some(Provider::Groq),
            _ => None,
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            Provider::Groq => "https://api.groq.com/openai/v1",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini-2.5-flash",
            Provider::Groq => "llama-3.3-70b-versatile",
        }
    }

    /// Environment variables holding the credential, in lookup order.
    pub fn api_key_vars(&self) -> &'static [&'static str] {
        match self {
            Provider::Gemini => &["GEMINI_API_KEY", "API_KEY"],
            Provider::Groq => &["GROQ_API_KEY"],
        }
    }
}

#[derive(Clone, Debug)]
pub struct Client {
    http: Http,
    provider: Provider,
    api_key: String,
    model: String,
    base_url: String, // provider-specific defaulted
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role { System, User }

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ChatOptions {
    pub temperature: Option<f32>,
}

impl Client {
    pub fn new(provider: Provider, api_key: String, model: String) -> Result<Self> {
        Ok(Self {
            http: Http::builder().pool_max_idle_per_host(8).build()?,
            base_url: provider.default_base_url().to_string(),
            provider, api_key, model,
        })
    }

    /// Convenience: pick up the provider's API key from the environment.
    pub fn from_env(provider: Provider, model: &str) -> Result<Self> {
        let vars = provider.api_key_vars();
        let key = vars
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
            .ok_or(LlmError::MissingApiKey(vars[0]))?;
        Self::new(provider, key, model.to_string())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn chat(&self, messages: &[ChatMessage], opts: ChatOptions) -> Result<String> {
        let (url, body) = match self.provider {
            Provider::Gemini => (
                format!("{}/models/{}:generateContent", self.base_url, self.model),
                gemini_body(messages, &opts),
            ),
            Provider::Groq => (
                format!("{}/chat/completions", self.base_url),
                openai_body(&self.model, messages, &opts),
            ),
        };

        tracing::debug!(provider = self.provider.name(), model = %self.model, "sending chat request");

        let request = self.http.post(url).json(&body);
        let request = match self.provider {
            Provider::Gemini => request.header("x-goog-api-key", &self.api_key),
            Provider::Groq => request.bearer_auth(&self.api_key),
        };
        let resp = request.send().await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(LlmError::Status {
                provider: self.provider.name(),
                status: status.as_u16(),
                body: text,
            });
        }

        let v: Value = serde_json::from_str(&text)?;
        Ok(extract_text(self.provider, &v))
    }
}

/// Gemini `generateContent` body: system turns fold into `systemInstruction`.
fn gemini_body(messages: &[ChatMessage], opts: &ChatOptions) -> Value {
    let system: Vec<Value> = messages
        .iter()
        .filter(|m| m.role == Role::System)
        .map(|m| json!({ "text": m.content }))
        .collect();

    let contents: Vec<Value> = messages
        .iter()
        .filter(|m| m.role != Role::System)
        .map(|m| json!({ "role": "user", "parts": [{ "text": m.content }] }))
        .collect();

    let mut generation_config = json!({});
    if let Some(t) = opts.temperature {
        generation_config["temperature"] = json!(t);
    }

    let mut body = json!({
        "contents": contents,
        "generationConfig": generation_config,
    });
    if !system.is_empty() {
        body["systemInstruction"] = json!({ "parts": system });
    }
    body
}

/// OpenAI-compatible Chat Completions body.
fn openai_body(model: &str, messages: &[ChatMessage], opts: &ChatOptions) -> Value {
    let msgs: Vec<Value> = messages.iter().map(|m| {
        let role = match m.role { Role::System => "system", Role::User => "user" };
        json!({ "role": role, "content": m.content })
    }).collect();

    let mut body = json!({
        "model": model,
        "messages": msgs,
        "temperature": opts.temperature.unwrap_or(0.0)
    });
    body
}

/// Pulls the generated text out of a response. A response that carries no
/// text (no candidates, empty choices) yields an empty string.
fn extract_text(provider: Provider, v: &Value) -> String {
    match provider {
        Provider::Gemini => v
            .pointer("/candidates/0/content/parts")
            .and_then(|p| p.as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
                    .collect::<String>()
            })
            .unwrap_or_default(),
        Provider::Groq => v
            .pointer("/choices/0/message/content")
            .and_then(|x| x.as_str())
            .unwrap_or_default()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation() -> Vec<ChatMessage> {
        vec![ChatMessage::system("be terse"), ChatMessage::user("hello")]
    }

    #[test]
    fn gemini_body_moves_system_prompt_into_instruction() {
        let opts = ChatOptions { temperature: Some(0.7) };
        let body = gemini_body(&conversation(), &opts);

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "be terse");
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        let temp = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temp - 0.7).abs() < 1e-6);
    }

    #[test]
    fn gemini_body_without_system_turn_has_no_instruction() {
        let body = gemini_body(&[ChatMessage::user("q")], &ChatOptions::default());
        assert_eq!(body["contents"][0]["role"], "user");
        assert!(body.get("systemInstruction").is_none());
        assert!(body["generationConfig"].get("temperature").is_none());
    }

    #[test]
    fn openai_body_keeps_roles() {
        let opts = ChatOptions { temperature: None };
        let body = openai_body("llama", &conversation(), &opts);
        assert_eq!(body["model"], "llama");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hello");
        assert_eq!(body["temperature"], 0.0);
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn extract_text_joins_gemini_parts() {
        let v = json!({
            "candidates": [{ "content": { "parts": [{ "text": "### 1. A\n" }, { "text": "body" }] } }]
        });
        assert_eq!(extract_text(Provider::Gemini, &v), "### 1. A\nbody");
    }

    #[test]
    fn extract_text_is_empty_without_candidates() {
        assert_eq!(extract_text(Provider::Gemini, &json!({ "candidates": [] })), "");
        assert_eq!(extract_text(Provider::Gemini, &json!({})), "");
        assert_eq!(extract_text(Provider::Groq, &json!({ "choices": [] })), "");
    }

    #[test]
    fn extract_text_reads_openai_choice() {
        let v = json!({ "choices": [{ "message": { "content": "ok" } }] });
        assert_eq!(extract_text(Provider::Groq, &v), "ok");
    }

    #[test]
    fn status_errors_are_classified() {
        let status = |code| LlmError::Status { provider: "gemini", status: code, body: String::new() };
        assert!(status(401).is_auth());
        assert!(status(403).is_auth());
        assert!(status(429).is_rate_limited());
        assert!(!status(500).is_auth());
        assert!(!status(500).is_transport());
    }

    #[test]
    fn provider_parse_accepts_aliases() {
        assert_eq!(Provider::parse("Gemini"), Some(Provider::Gemini));
        assert_eq!(Provider::parse(" google "), Some(Provider::Gemini));
        assert_eq!(Provider::parse("groq"), Some(Provider::Groq));
        assert_eq!(Provider::parse("openai"), None);
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let client = Client::new(Provider::Groq, "k".into(), "m".into())
            .unwrap()
            .with_base_url("http://localhost:8080/v1/");
        assert_eq!(client.base_url, "http://localhost:8080/v1");
    }
}
