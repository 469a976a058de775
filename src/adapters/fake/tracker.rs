//! In-memory fake for the `IssueTracker` port.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::tracker::{IssueTracker, TrackedIssue};

/// A record of one successful issue creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    /// Number this fake assigned.
    pub number: u64,
    /// Title passed to `create_issue`.
    pub title: String,
    /// Body passed to `create_issue`.
    pub body: String,
}

/// Issue tracker that assigns sequential numbers in memory.
///
/// Optionally fails the (k+1)-th create call to exercise the Publisher's
/// fail-fast batch behavior.
pub struct InMemoryTracker {
    next_number: Mutex<u64>,
    created: Mutex<Vec<CreatedIssue>>,
    existing: Mutex<HashMap<u64, TrackedIssue>>,
    fail_after: Option<usize>,
}

impl InMemoryTracker {
    /// Creates an empty tracker whose first assigned number is `first_number`.
    #[must_use]
    pub fn new(first_number: u64) -> Self {
        Self {
            next_number: Mutex::new(first_number),
            created: Mutex::new(Vec::new()),
            existing: Mutex::new(HashMap::new()),
            fail_after: None,
        }
    }

    /// Makes `create_issue` fail once `successes` creations have succeeded.
    #[must_use]
    pub fn failing_after(mut self, successes: usize) -> Self {
        self.fail_after = Some(successes);
        self
    }

    /// Seeds an issue so `fetch_issue` can find it.
    #[must_use]
    pub fn with_issue(self, number: u64, title: &str, body: &str) -> Self {
        self.existing
            .lock()
            .expect("existing lock poisoned")
            .insert(number, TrackedIssue { title: title.into(), body: body.into() });
        self
    }

    /// All successful creations, in call order.
    #[must_use]
    pub fn created(&self) -> Vec<CreatedIssue> {
        self.created.lock().expect("created lock poisoned").clone()
    }
}

impl IssueTracker for InMemoryTracker {
    fn create_issue(
        &self,
        title: &str,
        body: &str,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let mut created = self.created.lock().expect("created lock poisoned");
        if self.fail_after == Some(created.len()) {
            return Err("tracker rejected issue creation".into());
        }

        let mut next = self.next_number.lock().expect("next_number lock poisoned");
        let number = *next;
        *next += 1;
        created.push(CreatedIssue { number, title: title.into(), body: body.into() });
        Ok(number)
    }

    fn fetch_issue(
        &self,
        number: u64,
    ) -> Result<TrackedIssue, Box<dyn std::error::Error + Send + Sync>> {
        self.existing
            .lock()
            .expect("existing lock poisoned")
            .get(&number)
            .cloned()
            .ok_or_else(|| format!("issue #{number} not found").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_sequential_numbers() {
        let tracker = InMemoryTracker::new(10);
        assert_eq!(tracker.create_issue("a", "").unwrap(), 10);
        assert_eq!(tracker.create_issue("b", "").unwrap(), 11);
        let titles: Vec<_> = tracker.created().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, ["a", "b"]);
    }

    #[test]
    fn fails_after_configured_successes() {
        let tracker = InMemoryTracker::new(1).failing_after(1);
        assert!(tracker.create_issue("a", "").is_ok());
        assert!(tracker.create_issue("b", "").is_err());
        assert_eq!(tracker.created().len(), 1);
    }

    #[test]
    fn fetches_seeded_issue() {
        let tracker = InMemoryTracker::new(1).with_issue(7, "Add counter", "Counts things.");
        let issue = tracker.fetch_issue(7).unwrap();
        assert_eq!(issue.title, "Add counter");
        assert!(tracker.fetch_issue(8).is_err());
    }
}
