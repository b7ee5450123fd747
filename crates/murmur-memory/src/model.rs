//! Dialogue transcript model consumed by memory providers.

use serde::{Deserialize, Serialize};

/// Speaker of a dialogue turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// End-user utterance.
    User,
    /// Assistant reply.
    Assistant,
    /// Framework-injected turn; skipped during prompt rendering.
    System,
}

/// One turn of the rolling dialogue transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueTurn {
    /// Who spoke.
    pub role: TurnRole,
    /// Utterance text.
    pub content: String,
}

impl DialogueTurn {
    /// Build a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    /// Build an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}
