//! LLM collaborator interface for murmur.
//!
//! This crate owns the narrow generation interface the memory provider
//! depends on, plus credential diagnostics used for startup warnings.

pub mod client;
pub mod credential;
pub mod error;

/// Generation client trait and per-call options.
pub use client::{GenerateOptions, LlmClient};
/// Credential diagnostics helper.
pub use credential::describe_credential_problem;
/// LLM error type.
pub use error::LlmError;
