//! Remote save API collaborator used in content-only mode.

use crate::error::MemoryError;
use async_trait::async_trait;

#[async_trait]
/// Out-of-process sink for content-only memory summaries.
///
/// Fire-and-forget from the provider's perspective: only errors surface,
/// the sink's success payload is unused.
pub trait RemoteMemorySink: Send + Sync {
    /// Save summary text for a role.
    async fn save(&self, role_id: &str, content: &str) -> Result<(), MemoryError>;
}

/// Sink that drops everything; the default when running file-backed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRemoteSink;

#[async_trait]
impl RemoteMemorySink for NullRemoteSink {
    async fn save(&self, _role_id: &str, _content: &str) -> Result<(), MemoryError> {
        Ok(())
    }
}
