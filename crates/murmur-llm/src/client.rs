//! Narrow client interface for one-shot text generation.

use crate::error::LlmError;
use async_trait::async_trait;

/// Sampling options for a single generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateOptions {
    /// Maximum tokens the model may generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for GenerateOptions {
    /// Default generation settings.
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: 0.7,
        }
    }
}

#[async_trait]
/// One-shot generation client bound to a single model.
///
/// Retries, rate limiting, and timeouts are the implementor's concern;
/// callers treat a failed call as "no result this cycle".
pub trait LlmClient: Send + Sync {
    /// Model identifier, used for diagnostics only.
    fn model_name(&self) -> &str;

    /// Credential the client authenticates with, if any.
    fn api_key(&self) -> Option<&str> {
        None
    }

    /// Generate a completion for a system instruction plus user content.
    async fn generate(
        &self,
        system: &str,
        user: &str,
        options: GenerateOptions,
    ) -> Result<String, LlmError>;
}
