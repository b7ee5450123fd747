use async_trait::async_trait;
use murmur_memory::{MemoryError, RemoteMemorySink};
use parking_lot::Mutex;

/// Remote sink recording every save it receives.
#[derive(Default)]
pub struct RecordingSink {
    pub saved: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl RemoteMemorySink for RecordingSink {
    async fn save(&self, role_id: &str, content: &str) -> Result<(), MemoryError> {
        self.saved
            .lock()
            .push((role_id.to_string(), content.to_string()));
        Ok(())
    }
}
