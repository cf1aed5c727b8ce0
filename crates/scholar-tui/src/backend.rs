use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

use framework_generator::{LlmFrameworkGenerator, MockGenerator};
use scholar_core::{FrameworkGenerator, GenerationError};

use crate::config::{GenerationConfig, ProviderChoice};
use crate::constants::GENERATION_CHANNEL_CAPACITY;

pub type GenerationOutcome = Result<String, GenerationError>;

/// Build the generator named by the configuration.
pub fn build_generator(config: &GenerationConfig) -> Result<Arc<dyn FrameworkGenerator>> {
    match &config.provider {
        ProviderChoice::Mock => Ok(Arc::new(MockGenerator::echo())),
        ProviderChoice::Hosted(provider) => {
            let mut client = llm::Client::from_env(*provider, &config.model)
                .with_context(|| format!("Cannot use {}", provider.name()))?;
            if let Some(base_url) = &config.base_url {
                client = client.with_base_url(base_url.as_str());
            }
            Ok(Arc::new(LlmFrameworkGenerator::new(client)))
        }
    }
}

/// Runs generation calls off the UI task and hands their outcomes back.
pub struct GenerationBridge {
    generator: Arc<dyn FrameworkGenerator>,
    tx: mpsc::Sender<GenerationOutcome>,
    rx: mpsc::Receiver<GenerationOutcome>,
}

impl GenerationBridge {
    pub fn new(generator: Arc<dyn FrameworkGenerator>) -> Self {
        let (tx, rx) = mpsc::channel(GENERATION_CHANNEL_CAPACITY);
        Self { generator, tx, rx }
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Start a call for `idea`. Must be called inside a tokio runtime.
    pub fn spawn(&self, idea: String) {
        let generator = self.generator.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = generator.generate_framework(&idea).await;
            if tx.send(outcome).await.is_err() {
                tracing::debug!("UI gone before generation settled");
            }
        });
    }

    /// A settled outcome, if one is waiting.
    pub fn try_recv(&mut self) -> Option<GenerationOutcome> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next settled outcome.
    pub async fn recv(&mut self) -> Option<GenerationOutcome> {
        self.rx.recv().await
    }
}
