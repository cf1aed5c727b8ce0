use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// `gemini`, `groq` or `mock`
    pub provider: String,

    /// Model identifier; the provider's default when unset.
    pub model: Option<String>,

    /// Alternate API root, e.g. a proxy.
    pub base_url: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: None,
            base_url: None,
        }
    }
}

impl AppSettings {
    /// `~/.scholarframe/settings.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".scholarframe").join("settings.json"))
    }

    /// Load settings from the config file; defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => Ok(Self::default()),
        }
    }

    /// Defaults when `path` does not exist, an error when it exists but
    /// cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings file at {}", path.display());
            return Ok(Self::default());
        }
        let settings = Self::load_from(path)?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Invalid settings in {}", path.display()))
    }
}
