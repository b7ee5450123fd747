//! Short-term conversational memory for murmur.
//!
//! One LLM round-trip per save: the provider renders the recent transcript
//! plus the prior memory into a prompt, asks the model for an updated memory
//! representation, and persists the result keyed by role identifier.

pub mod error;
pub mod model;
pub mod prompt;
pub mod provider;
pub mod remote;
pub mod store;

/// Memory error type.
pub use error::MemoryError;
/// Dialogue transcript model.
pub use model::{DialogueTurn, TurnRole};
/// Prompt templates and response extraction.
pub use prompt::{CONTENT_MEMORY_PROMPT, STRUCTURED_MEMORY_PROMPT, extract_json_payload};
/// Memory provider interface and the short-term updater.
pub use provider::{MemoryProvider, ShortMemoryUpdater};
/// Remote save collaborator for content-only mode.
pub use remote::{NullRemoteSink, RemoteMemorySink};
/// Key-value store abstraction and default YAML file store.
pub use store::{MemoryStore, YamlMemoryStore};
