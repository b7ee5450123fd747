//! Test helpers shared across murmur crates.

pub mod llm;
pub mod sink;

pub use llm::{FailingLlm, FixedLlm, RecordingLlm};
pub use sink::RecordingSink;
