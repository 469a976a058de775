//! Live issue tracker adapter backed by the `gh` CLI.

use std::process::Command;

use serde::Deserialize;

use crate::ports::tracker::{IssueTracker, TrackedIssue};

/// Issue tracker adapter that shells out to `gh`.
///
/// Creation relies on `gh issue create` printing the new issue's URL on
/// stdout; the assigned number is the final path segment. That output shape
/// is a versioned contract with the `gh` CLI, kept isolated in
/// [`parse_created_id`] so it can be hardened without touching callers.
pub struct GhIssueTracker;

/// Fields requested from `gh issue view --json`.
#[derive(Deserialize)]
struct GhIssueView {
    title: String,
    body: String,
}

impl IssueTracker for GhIssueTracker {
    fn create_issue(
        &self,
        title: &str,
        body: &str,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new("gh")
            .args(["issue", "create", "--title", title, "--body", body])
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "gh issue create exited with {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_created_id(&stdout).map_err(Into::into)
    }

    fn fetch_issue(
        &self,
        number: u64,
    ) -> Result<TrackedIssue, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new("gh")
            .args(["issue", "view", &number.to_string(), "--json", "title,body"])
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "gh issue view exited with {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )
            .into());
        }

        let view: GhIssueView = serde_json::from_slice(&output.stdout)
            .map_err(|e| format!("failed to parse gh issue view output: {e}"))?;
        Ok(TrackedIssue { title: view.title, body: view.body })
    }
}

/// Parses the tracker-assigned issue number from `gh issue create` stdout.
///
/// The CLI prints the created issue's URL; the number is the last
/// `/`-delimited path segment.
///
/// # Errors
///
/// Returns an error when the final segment is not an integer.
pub fn parse_created_id(stdout: &str) -> Result<u64, String> {
    let trimmed = stdout.trim();
    let last = trimmed.rsplit('/').next().unwrap_or_default();
    last.parse::<u64>()
        .map_err(|_| format!("expected an issue URL ending in a number, got: {trimmed:?}"))
}

#[cfg(test)]
mod tests {
    use super::parse_created_id;

    #[test]
    fn parses_number_from_issue_url() {
        let id = parse_created_id("https://example.com/owner/repo/issues/42").unwrap();
        assert_eq!(id, 42);
    }

    #[test]
    fn tolerates_trailing_newline() {
        let id = parse_created_id("https://example.com/owner/repo/issues/7\n").unwrap();
        assert_eq!(id, 7);
    }

    #[test]
    fn rejects_non_numeric_final_segment() {
        let result = parse_created_id("https://example.com/owner/repo/issues/new");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_output() {
        assert!(parse_created_id("").is_err());
        assert!(parse_created_id("   \n").is_err());
    }
}
