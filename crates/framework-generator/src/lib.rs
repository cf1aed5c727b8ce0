pub mod prompt;
pub mod providers;
pub mod traits;

pub use traits::CompletionBackend;

// Re-export providers
pub use providers::hosted::LlmFrameworkGenerator;
pub use providers::mock::{MockGenerator, MockResponse};
