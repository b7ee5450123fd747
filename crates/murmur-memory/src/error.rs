//! Error types for memory operations.

/// Errors returned by memory providers, stores, and sinks.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Store document serialization error.
    #[error("store error: {0}")]
    Store(#[from] serde_yaml::Error),
    /// LLM call failed.
    #[error("llm error: {0}")]
    Llm(#[from] murmur_llm::LlmError),
    /// Remote save API call failed.
    #[error("remote sink error: {0}")]
    Remote(String),
}
