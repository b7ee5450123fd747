//! Configuration models and memory-store path derivation.
//!
//! This crate owns the murmur config schema and the rules for locating the
//! on-disk memory store document relative to the project root.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading APIs.
pub use error::ConfigError;
/// Config loading and path derivation helpers.
pub use loader::{
    default_memory_path, find_project_root, load_config, load_config_or_default,
    resolve_memory_path,
};
/// Configuration schema models.
pub use model::*;
