//! Short-term memory provider driven by one LLM round-trip per save.

use crate::error::MemoryError;
use crate::model::DialogueTurn;
use crate::prompt::{self, CONTENT_MEMORY_PROMPT, STRUCTURED_MEMORY_PROMPT};
use crate::remote::RemoteMemorySink;
use crate::store::MemoryStore;
use async_trait::async_trait;
use chrono::Local;
use log::{debug, error, info, warn};
use murmur_llm::{GenerateOptions, LlmClient, describe_credential_problem};
use std::sync::Arc;

/// Max tokens requested per summarization call.
const SUMMARY_MAX_TOKENS: u32 = 2000;
/// Sampling temperature for summarization; low for determinism.
const SUMMARY_TEMPERATURE: f32 = 0.2;
/// Minimum transcript length worth summarizing.
const MIN_TURNS: usize = 2;
/// Label used in credential diagnostics.
const CREDENTIAL_LABEL: &str = "memory summarizer LLM";
/// Timestamp format for the prompt's current-time line.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[async_trait]
/// Memory provider abstraction used by the session framework.
pub trait MemoryProvider: Send + Sync {
    /// Summarize a transcript window into the persisted memory.
    ///
    /// Returns `None` when the call was a no-op (no LLM bound, or fewer than
    /// two turns), otherwise the current cached memory after the cycle.
    async fn save_memory(
        &mut self,
        turns: &[DialogueTurn],
    ) -> Result<Option<String>, MemoryError>;

    /// Return the cached memory. The query string is accepted but unused;
    /// this is a flat getter, not a semantic search.
    async fn query_memory(&self, query: &str) -> Result<String, MemoryError>;
}

/// Short-term memory updater bound to a single role.
///
/// Structured mode (`save_to_file`) asks the model for a JSON memory graph,
/// validates it, and persists it to the local store. Content-only mode asks
/// for a plain-text summary and hands it to the remote sink, leaving the
/// local cache untouched; the store of record is remote in that mode.
pub struct ShortMemoryUpdater {
    role_id: String,
    llm: Option<Arc<dyn LlmClient>>,
    store: Arc<dyn MemoryStore>,
    remote: Arc<dyn RemoteMemorySink>,
    save_to_file: bool,
    short_memory: String,
}

impl ShortMemoryUpdater {
    /// Create an updater for a role and load its prior memory.
    ///
    /// A pre-supplied `summary_memory` fills the cache directly; otherwise
    /// the cache is loaded from the store when file-backed, and an absent
    /// entry leaves it empty.
    pub fn new(
        role_id: impl Into<String>,
        llm: Option<Arc<dyn LlmClient>>,
        store: Arc<dyn MemoryStore>,
        remote: Arc<dyn RemoteMemorySink>,
        summary_memory: Option<String>,
        save_to_file: bool,
    ) -> Result<Self, MemoryError> {
        let mut updater = Self {
            role_id: role_id.into(),
            llm,
            store,
            remote,
            save_to_file,
            short_memory: String::new(),
        };
        updater.load_memory(summary_memory)?;
        Ok(updater)
    }

    /// Rebind the updater to a role and LLM and re-run the load procedure.
    ///
    /// Supports swapping the backend without recreating the updater.
    pub fn init_memory(
        &mut self,
        role_id: impl Into<String>,
        llm: Option<Arc<dyn LlmClient>>,
        summary_memory: Option<String>,
        save_to_file: bool,
    ) -> Result<(), MemoryError> {
        self.role_id = role_id.into();
        self.llm = llm;
        self.save_to_file = save_to_file;
        self.load_memory(summary_memory)
    }

    /// Role this updater is bound to.
    pub fn role_id(&self) -> &str {
        &self.role_id
    }

    /// Current cached memory value.
    pub fn short_memory(&self) -> &str {
        &self.short_memory
    }

    /// Fill the cache from the supplied value or the file-backed store.
    fn load_memory(&mut self, summary_memory: Option<String>) -> Result<(), MemoryError> {
        if let Some(summary) = summary_memory {
            self.short_memory = summary;
            return Ok(());
        }
        if !self.save_to_file {
            self.short_memory = String::new();
            return Ok(());
        }
        if let Some(content) = self.store.get(&self.role_id)? {
            self.short_memory = content;
        }
        Ok(())
    }

    /// Summarize a transcript window into the persisted memory.
    pub async fn save_memory(
        &mut self,
        turns: &[DialogueTurn],
    ) -> Result<Option<String>, MemoryError> {
        let Some(llm) = self.llm.clone() else {
            error!(
                "no llm bound to memory provider (role_id={})",
                self.role_id
            );
            return Ok(None);
        };
        debug!("summarizing memory with model {}", llm.model_name());
        // Warning only: a suspicious key is logged but the call proceeds.
        if let Some(problem) = describe_credential_problem(CREDENTIAL_LABEL, llm.api_key()) {
            error!("{problem}");
        }
        if turns.len() < MIN_TURNS {
            return Ok(None);
        }

        let timestamp = Local::now().format(TIME_FORMAT).to_string();
        let user_prompt = prompt::build_user_prompt(turns, &self.short_memory, &timestamp);
        let options = GenerateOptions {
            max_tokens: SUMMARY_MAX_TOKENS,
            temperature: SUMMARY_TEMPERATURE,
        };

        if self.save_to_file {
            let response = llm
                .generate(STRUCTURED_MEMORY_PROMPT, &user_prompt, options)
                .await?;
            match prompt::extract_json_payload(&response)
                .filter(|payload| serde_json::from_str::<serde_json::Value>(payload).is_ok())
            {
                Some(payload) => {
                    self.short_memory = payload;
                    self.store.put(&self.role_id, &self.short_memory)?;
                }
                None => {
                    warn!(
                        "discarding unparseable memory update (role_id={})",
                        self.role_id
                    );
                }
            }
        } else {
            let response = llm
                .generate(CONTENT_MEMORY_PROMPT, &user_prompt, options)
                .await?;
            self.remote.save(&self.role_id, &response).await?;
        }
        info!("memory save finished (role_id={})", self.role_id);

        Ok(Some(self.short_memory.clone()))
    }

    /// Return the cached memory verbatim, ignoring the query.
    pub fn query_memory(&self, _query: &str) -> String {
        self.short_memory.clone()
    }
}

#[async_trait]
impl MemoryProvider for ShortMemoryUpdater {
    async fn save_memory(
        &mut self,
        turns: &[DialogueTurn],
    ) -> Result<Option<String>, MemoryError> {
        ShortMemoryUpdater::save_memory(self, turns).await
    }

    async fn query_memory(&self, query: &str) -> Result<String, MemoryError> {
        Ok(ShortMemoryUpdater::query_memory(self, query))
    }
}

// Tests for this module live in tests/provider.rs: they use helpers from
// `murmur-test-utils`, which links this crate as a library, so they cannot
// compile as unit tests without duplicating the crate in the build graph.
