//! Service context bundling all port trait objects.

use crate::adapters::live::{GhIssueTracker, LiveFileSystem, LiveLlmClient};
use crate::config::ModelConfig;
use crate::ports::filesystem::FileSystem;
use crate::ports::llm::LlmClient;
use crate::ports::tracker::IssueTracker;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Tests construct a
/// context directly from the in-memory fakes in `adapters::fake`.
pub struct ServiceContext {
    /// Filesystem for reading documents and scanning the project tree.
    pub fs: Box<dyn FileSystem>,
    /// LLM client for language-model completions.
    pub llm: Box<dyn LlmClient>,
    /// Issue tracker for creating and fetching work items.
    pub tracker: Box<dyn IssueTracker>,
}

impl ServiceContext {
    /// Creates a live context: real disk, the Anthropic API, and the `gh` CLI.
    #[must_use]
    pub fn live(config: &ModelConfig) -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
            llm: Box::new(LiveLlmClient::new(config)),
            tracker: Box::new(GhIssueTracker),
        }
    }
}
