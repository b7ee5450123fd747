//! Config loading and memory-store path derivation.

use crate::error::ConfigError;
use crate::model::MurmurConfig;
use directories::BaseDirs;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory entries that mark the project root.
const PROJECT_MARKERS: &[&str] = &["Cargo.toml", ".git", "data"];

/// File name of the memory store document under the data directory.
const MEMORY_FILE: &str = ".memory.yaml";

/// Load a config document from disk.
pub fn load_config(path: &Path) -> Result<MurmurConfig, ConfigError> {
    debug!("loading config (path={})", path.display());
    let contents = fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&contents)?;
    Ok(config)
}

/// Load a config document if the path exists, falling back to defaults.
pub fn load_config_or_default(path: &Path) -> Result<MurmurConfig, ConfigError> {
    if !path.exists() {
        debug!("config missing, using defaults (path={})", path.display());
        return Ok(MurmurConfig::default());
    }
    load_config(path)
}

/// Walk ancestors to find a directory containing any marker entries.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    for ancestor in cwd.ancestors() {
        if PROJECT_MARKERS
            .iter()
            .any(|marker| ancestor.join(marker).exists())
        {
            return Some(ancestor.to_path_buf());
        }
    }
    None
}

/// Default on-disk location of the memory store document.
///
/// Resolves to `data/.memory.yaml` under the project root when one can be
/// found from the working directory, otherwise to `.murmur` under the home
/// directory.
pub fn default_memory_path() -> PathBuf {
    let root = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_project_root(&cwd));
    match root {
        Some(root) => root.join("data").join(MEMORY_FILE),
        None => fallback_memory_path(),
    }
}

/// Resolve the memory store path from config, deriving the default if unset.
pub fn resolve_memory_path(config: &MurmurConfig) -> PathBuf {
    match &config.memory.path {
        Some(path) => PathBuf::from(path),
        None => default_memory_path(),
    }
}

/// Memory path used when no project root is available.
fn fallback_memory_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(".murmur").join(MEMORY_FILE)
}
