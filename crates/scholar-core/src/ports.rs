use async_trait::async_trait;
use thiserror::Error;

/// The only failure text ever shown to the user.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate research framework. Please check your API key and try again.";

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Coarse cause of a failed generation, for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Auth,
    RateLimited,
    Transport,
    Service,
    MalformedResponse,
    Other,
}

/// A generation attempt failed.
///
/// Displays as [`GENERATION_FAILED_MESSAGE`] whatever went wrong; the cause
/// stays reachable through [`std::error::Error::source`] and [`Self::kind`].
#[derive(Debug, Error)]
#[error("{}", GENERATION_FAILED_MESSAGE)]
pub struct GenerationError {
    kind: FailureKind,
    #[source]
    source: BoxError,
}

impl GenerationError {
    pub fn new(kind: FailureKind, source: impl Into<BoxError>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Text of the underlying cause.
    pub fn detail(&self) -> String {
        self.source.to_string()
    }
}

/// Turns a research idea into a framework document.
#[async_trait]
pub trait FrameworkGenerator: Send + Sync {
    async fn generate_framework(&self, idea: &str) -> Result<String, GenerationError>;

    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_hides_the_cause() {
        let err = GenerationError::new(FailureKind::Auth, "groq 401: invalid key");
        assert_eq!(err.to_string(), GENERATION_FAILED_MESSAGE);
        assert_eq!(err.kind(), FailureKind::Auth);
        assert_eq!(err.detail(), "groq 401: invalid key");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("groq 401: invalid key"));
    }
}
