//! Issue implementation: a bounded multi-turn conversation with the model.
//!
//! The loop is a two-state machine: it runs until a reply carries a
//! completion phrase (success) or the turn budget is spent (exhausted).
//! No file writes, tool execution, or test runs happen here; the model's
//! claims about tests and code are taken on faith via phrase matching.

pub mod project;

use std::fmt::Write as _;
use std::path::Path;

use crate::config::ModelConfig;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::ports::llm::{CompletionRequest, Message};
use crate::ports::tracker::TrackedIssue;

/// Default number of model round-trips allowed per implement attempt.
pub const DEFAULT_TURN_BUDGET: u32 = 10;

/// Phrases whose case-insensitive presence in a reply signals completion.
const COMPLETION_PHRASES: [&str; 2] = ["implementation complete", "all tests pass"];

/// Synthetic user turn appended between rounds.
const CONTINUE_PROMPT: &str = "Continue with the implementation.";

/// Terminal state of one implement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A reply carried a completion phrase.
    Completed {
        /// Model round-trips spent, including the final one.
        turns: u32,
    },
    /// The turn budget ran out without a completion signal. This is an
    /// inconclusive result, not a failure of the operation itself.
    Exhausted {
        /// Model round-trips spent.
        turns: u32,
    },
}

/// Whether a model reply signals that implementation work is finished.
#[must_use]
pub fn reply_signals_completion(reply: &str) -> bool {
    let lowered = reply.to_lowercase();
    COMPLETION_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}

/// Builds the first user turn: issue, project context, task instructions.
#[must_use]
pub fn build_initial_prompt(number: u64, issue: &TrackedIssue, context_files: &[String]) -> String {
    let mut prompt = String::new();
    let _ = writeln!(prompt, "You are implementing a tracked issue in this project.");
    let _ = writeln!(prompt, "\nIssue #{number}: {}\n", issue.title);
    let _ = writeln!(prompt, "{}\n", issue.body);

    if context_files.is_empty() {
        let _ = writeln!(prompt, "No project files were found for context.");
    } else {
        let _ = writeln!(prompt, "Project files:");
        for path in context_files {
            let _ = writeln!(prompt, "- {path}");
        }
    }

    let _ = writeln!(
        prompt,
        "\nWork test-first: write the tests, implement the change, run the full \
         test suite, and confirm nothing regresses. When everything is done and \
         the suite is green, say \"implementation complete\"."
    );
    prompt
}

/// Drives a bounded conversation aimed at implementing issue `number`.
///
/// Each round sends the whole accumulated conversation, appends the reply as
/// an assistant turn, and checks it for a completion phrase. When the reply
/// carries none and turns remain, a generic continue prompt is appended.
///
/// # Errors
///
/// Returns [`Error::FetchIssue`] when the issue cannot be fetched and
/// [`Error::Completion`] when a model call fails. Budget exhaustion is a
/// normal [`Outcome`], not an error.
pub async fn implement(
    ctx: &ServiceContext,
    config: &ModelConfig,
    number: u64,
    turn_budget: u32,
) -> Result<Outcome, Error> {
    let issue = ctx
        .tracker
        .fetch_issue(number)
        .map_err(|e| Error::FetchIssue { number, reason: e.to_string() })?;

    let context_files = project::gather_project_context(ctx.fs.as_ref(), Path::new("."));
    let mut conversation =
        vec![Message::user(build_initial_prompt(number, &issue, &context_files))];

    for turn in 0..turn_budget {
        let request = CompletionRequest {
            model: config.model.clone(),
            messages: conversation.clone(),
            max_tokens: config.max_tokens,
        };
        let response =
            ctx.llm.complete(&request).await.map_err(|e| Error::Completion(e.to_string()))?;

        let finished = reply_signals_completion(&response.text);
        conversation.push(Message::assistant(response.text));

        if finished {
            return Ok(Outcome::Completed { turns: turn + 1 });
        }

        eprintln!("Turn {}/{turn_budget}: no completion signal yet", turn + 1);
        if turn + 1 < turn_budget {
            conversation.push(Message::user(CONTINUE_PROMPT));
        }
    }

    Ok(Outcome::Exhausted { turns: turn_budget })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fake::{InMemoryFileSystem, InMemoryTracker, ScriptedLlmClient};
    use crate::ports::llm::Role;
    use std::sync::Arc;

    fn test_context(replies: Vec<&str>) -> (ServiceContext, Arc<ScriptedLlmClient>) {
        let llm = Arc::new(ScriptedLlmClient::new(replies));
        let ctx = ServiceContext {
            fs: Box::new(InMemoryFileSystem::new().with_file("src/main.rs", "fn main() {}")),
            llm: Box::new(llm.clone()),
            tracker: Box::new(
                InMemoryTracker::new(1).with_issue(7, "Add counter", "Count things."),
            ),
        };
        (ctx, llm)
    }

    fn config() -> ModelConfig {
        ModelConfig::from_key(Some("sk-test".into())).unwrap()
    }

    #[test]
    fn completion_phrases_match_case_insensitively() {
        assert!(reply_signals_completion("Implementation Complete."));
        assert!(reply_signals_completion("ran everything; ALL TESTS PASS"));
        assert!(reply_signals_completion("done: implementation complete"));
        assert!(!reply_signals_completion("still working on the tests"));
    }

    #[test]
    fn initial_prompt_carries_issue_and_context() {
        let issue = TrackedIssue { title: "Add counter".into(), body: "Count things.".into() };
        let prompt = build_initial_prompt(7, &issue, &["src/main.rs".into()]);
        assert!(prompt.contains("Issue #7: Add counter"));
        assert!(prompt.contains("Count things."));
        assert!(prompt.contains("- src/main.rs"));
        assert!(prompt.contains("test suite"));
    }

    #[tokio::test]
    async fn succeeds_on_first_completion_phrase() {
        let (ctx, llm) = test_context(vec![
            "Writing tests now.",
            "All tests pass, nothing regressed.",
            "this reply must never be requested",
        ]);

        let outcome = implement(&ctx, &config(), 7, 5).await.unwrap();

        assert_eq!(outcome, Outcome::Completed { turns: 2 });
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn exhausts_budget_without_completion_signal() {
        let (ctx, llm) = test_context(vec!["working", "still working", "almost there"]);

        let outcome = implement(&ctx, &config(), 7, 3).await.unwrap();

        assert_eq!(outcome, Outcome::Exhausted { turns: 3 });
        assert_eq!(llm.calls(), 3);

        // Initial prompt + 3 replies + 2 continue prompts were accumulated;
        // the final request carried everything before the last reply.
        let requests = llm.requests();
        assert_eq!(requests[0].messages.len(), 1);
        assert_eq!(requests[1].messages.len(), 3);
        assert_eq!(requests[2].messages.len(), 5);
        assert_eq!(requests[2].messages[2].content, "Continue with the implementation.");
        assert_eq!(requests[2].messages[2].role, Role::User);
    }

    #[tokio::test]
    async fn fetch_failure_is_fatal() {
        let (ctx, llm) = test_context(vec!["implementation complete"]);

        let result = implement(&ctx, &config(), 99, 3).await;

        assert!(matches!(result, Err(Error::FetchIssue { number: 99, .. })));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn model_failure_propagates() {
        // Script runs out after one reply; the second call errors.
        let (ctx, _llm) = test_context(vec!["working"]);

        let result = implement(&ctx, &config(), 7, 3).await;

        assert!(matches!(result, Err(Error::Completion(_))));
    }

    #[tokio::test]
    async fn first_request_contains_project_context() {
        let (ctx, llm) = test_context(vec!["implementation complete"]);

        implement(&ctx, &config(), 7, 1).await.unwrap();

        let requests = llm.requests();
        assert!(requests[0].messages[0].content.contains("src/main.rs"));
        assert!(requests[0].messages[0].content.contains("Issue #7: Add counter"));
    }
}
