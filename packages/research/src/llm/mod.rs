//! Language-model provider boundary.
//!
//! Two interchangeable backends behind one capability trait; which one is
//! active is a configuration decision made once at startup. Callers are
//! agnostic to the provider.

mod ollama;
mod openai;

pub use ollama::OllamaModel;
pub use openai::OpenAiModel;

use async_trait::async_trait;

use crate::error::LlmError;

/// A single-turn completion capability.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Run one system+user completion and return the raw reply text.
    async fn generate(&self, system: &str, user: &str) -> Result<String, LlmError>;
}
