use std::time::Duration;

use kamus_types::PromptSpec;

mod offline;
mod ollama;

pub use offline::OfflineClient;
pub use ollama::OllamaClient;

/// LLM completion backend
#[async_trait::async_trait]
pub trait InferenceClient: Send + Sync {
    /// Run one completion and return the raw generated text
    async fn complete(
        &self,
        prompt: &PromptSpec,
        params: &InferenceParams,
    ) -> Result<String, InferenceError>;

    /// Short backend name for logs
    fn backend(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InferenceParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for InferenceParams {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_tokens: 300,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Request timed out after {0:?}. LLM inference may require more time.")]
    Timeout(Duration),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Malformed response payload: {0}")]
    MalformedPayload(String),

    #[error("The model '{0}' is still loading. Please try again in a few moments.")]
    ModelLoading(String),
}
