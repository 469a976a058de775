//! `issuesmith implement` command.

use crate::config::ModelConfig;
use crate::context::ServiceContext;
use crate::implement::{self, Outcome, DEFAULT_TURN_BUDGET};

/// Execute the `implement` command for one tracked issue.
///
/// # Errors
///
/// Returns an error string when the issue cannot be fetched, a model call
/// fails, or the turn budget runs out without a completion signal (the
/// inconclusive outcome still maps to a non-zero exit).
pub async fn run(ctx: &ServiceContext, config: &ModelConfig, issue: u64) -> Result<(), String> {
    let outcome = implement::implement(ctx, config, issue, DEFAULT_TURN_BUDGET)
        .await
        .map_err(|e| e.to_string())?;

    match outcome {
        Outcome::Completed { turns } => {
            println!("Issue #{issue}: completion signalled after {turns} turn(s)");
            Ok(())
        }
        Outcome::Exhausted { turns } => {
            Err(format!("issue #{issue}: no completion signal after {turns} turns"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::adapters::fake::{InMemoryFileSystem, InMemoryTracker, ScriptedLlmClient};
    use crate::config::ModelConfig;
    use crate::context::ServiceContext;

    fn context(replies: Vec<&str>) -> ServiceContext {
        ServiceContext {
            fs: Box::new(InMemoryFileSystem::new()),
            llm: Box::new(ScriptedLlmClient::new(replies)),
            tracker: Box::new(InMemoryTracker::new(1).with_issue(7, "Add counter", "Count.")),
        }
    }

    fn config() -> ModelConfig {
        ModelConfig::from_key(Some("sk-test".into())).unwrap()
    }

    #[tokio::test]
    async fn completed_outcome_is_ok() {
        let ctx = context(vec!["implementation complete"]);
        assert!(run(&ctx, &config(), 7).await.is_ok());
    }

    #[tokio::test]
    async fn missing_issue_is_an_error() {
        let ctx = context(vec!["implementation complete"]);
        let result = run(&ctx, &config(), 99).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("#99"));
    }
}
