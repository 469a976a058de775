//! In-memory fakes for deterministic tests.
//!
//! Each fake implements one port trait without touching the network, a
//! subprocess, or the disk, so operation cores can be exercised with
//! scripted external behavior.

pub mod filesystem;
pub mod llm;
pub mod tracker;

pub use filesystem::InMemoryFileSystem;
pub use llm::ScriptedLlmClient;
pub use tracker::InMemoryTracker;
