//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (filesystem, LLM, issue tracker). Implementations live
//! in `src/adapters/`.

pub mod filesystem;
pub mod llm;
pub mod tracker;

pub use filesystem::{DirEntry, FileSystem};
pub use llm::{CompletionFuture, CompletionRequest, CompletionResponse, LlmClient, Message, Role};
pub use tracker::{IssueTracker, TrackedIssue};
