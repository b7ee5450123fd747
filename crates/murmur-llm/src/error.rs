//! Error types for LLM calls.

/// Errors returned by LLM clients.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The backend rejected or failed the request.
    #[error("provider error: {0}")]
    Provider(String),
    /// The backend returned nothing usable.
    #[error("empty response from model {0}")]
    EmptyResponse(String),
}
