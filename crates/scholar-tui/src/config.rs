use anyhow::{anyhow, Result};
use llm::Provider;
use std::path::PathBuf;

use crate::settings::AppSettings;

pub const ENV_PROVIDER: &str = "SCHOLARFRAME_PROVIDER";
pub const ENV_MODEL: &str = "SCHOLARFRAME_MODEL";
pub const ENV_BASE_URL: &str = "SCHOLARFRAME_BASE_URL";

/// Load environment variables from .env in the working directory (best-effort).
/// Variables already set in the environment win. Returns the file loaded.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderChoice {
    Hosted(Provider),
    /// Canned frameworks, no network.
    Mock,
}

impl ProviderChoice {
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().eq_ignore_ascii_case("mock") {
            return Ok(ProviderChoice::Mock);
        }
        Provider::parse(value)
            .map(ProviderChoice::Hosted)
            .ok_or_else(|| anyhow!("Unknown provider '{}'. Use gemini, groq or mock", value.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub provider: ProviderChoice,
    pub model: String,
    pub base_url: Option<String>,
}

impl GenerationConfig {
    pub fn resolve(settings: &AppSettings) -> Result<Self> {
        Self::resolve_with(settings, |key| std::env::var(key).ok())
    }

    /// Settings file values, overridden by non-empty environment variables.
    pub fn resolve_with(settings: &AppSettings, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let provider = ProviderChoice::parse(&env(ENV_PROVIDER).unwrap_or_else(|| settings.provider.clone()))?;
        let model = env(ENV_MODEL)
            .or_else(|| settings.model.clone())
            .unwrap_or_else(|| match &provider {
                ProviderChoice::Hosted(p) => p.default_model().to_string(),
                ProviderChoice::Mock => "mock".to_string(),
            });
        let base_url = env(ENV_BASE_URL).or_else(|| settings.base_url.clone());

        Ok(Self { provider, model, base_url })
    }
}
