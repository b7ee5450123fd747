//! Configuration schema for murmur.

use serde::{Deserialize, Serialize};

/// Root config for the murmur memory service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MurmurConfig {
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

impl MurmurConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> MurmurConfigBuilder {
        MurmurConfigBuilder::new()
    }
}

/// Builder for assembling a `MurmurConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct MurmurConfigBuilder {
    config: MurmurConfig,
}

impl MurmurConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: MurmurConfig::default(),
        }
    }

    /// Replace the memory persistence configuration.
    pub fn memory(mut self, memory: MemoryConfig) -> Self {
        self.config.memory = memory;
        self
    }

    /// Replace the LLM binding configuration.
    pub fn llm(mut self, llm: LlmConfig) -> Self {
        self.config.llm = llm;
        self
    }

    /// Finalize and return the built `MurmurConfig`.
    pub fn build(self) -> MurmurConfig {
        self.config
    }
}

/// Memory persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Keep the structured memory document in the local file store. When
    /// false, summaries are handed to the remote save API instead.
    #[serde(default = "default_save_to_file")]
    pub save_to_file: bool,
    /// Override for the memory store document path.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for MemoryConfig {
    /// Default memory persistence settings.
    fn default() -> Self {
        Self {
            save_to_file: true,
            path: None,
        }
    }
}

/// LLM binding used for memory summarization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LlmConfig {
    /// Model identifier handed to the LLM client.
    #[serde(default)]
    pub model: Option<String>,
    /// Credential for the summarization backend.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_save_to_file() -> bool {
    true
}
