//! Key-value memory store abstraction and the default YAML file store.

use crate::error::MemoryError;
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Role-keyed store for persisted memory content.
///
/// The store, not the provider, owns filesystem and format details; any
/// future locking discipline lives behind this trait as well.
pub trait MemoryStore: Send + Sync {
    /// Fetch the stored content for a role, if any.
    fn get(&self, role_id: &str) -> Result<Option<String>, MemoryError>;

    /// Persist content for a role, replacing any previous value.
    fn put(&self, role_id: &str, content: &str) -> Result<(), MemoryError>;
}

/// File-backed store keeping every role's memory in one YAML document.
///
/// Each put loads the whole document, mutates one entry, and rewrites the
/// whole document. No lock is held across that cycle; callers serialize
/// concurrent saves per role or the last writer wins.
#[derive(Debug, Clone)]
pub struct YamlMemoryStore {
    /// Path of the store document.
    path: PathBuf,
}

impl YamlMemoryStore {
    /// Create a store backed by the given document path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the store document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temp path used for atomic rewrites.
    fn temp_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(".tmp");
        PathBuf::from(path)
    }

    /// Load the whole document, treating a missing or empty file as empty.
    fn load_all(&self) -> Result<BTreeMap<String, String>, MemoryError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let entries = serde_yaml::from_str(&contents)?;
        Ok(entries)
    }

    /// Rewrite the whole document atomically via a temp file.
    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), MemoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = serde_yaml::to_string(entries)?;
        let temp_path = self.temp_path();
        std::fs::write(&temp_path, serialized)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl MemoryStore for YamlMemoryStore {
    fn get(&self, role_id: &str) -> Result<Option<String>, MemoryError> {
        let entries = self.load_all()?;
        let content = entries.get(role_id).cloned();
        debug!(
            "loaded memory (role_id={role_id}, found={})",
            content.is_some()
        );
        Ok(content)
    }

    fn put(&self, role_id: &str, content: &str) -> Result<(), MemoryError> {
        let mut entries = self.load_all()?;
        entries.insert(role_id.to_string(), content.to_string());
        self.write_all(&entries)?;
        debug!(
            "stored memory (role_id={role_id}, content_len={})",
            content.len()
        );
        Ok(())
    }
}
