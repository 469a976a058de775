//! Issue tracker port for creating and fetching work items.

use serde::{Deserialize, Serialize};

/// Title and body of a tracked issue, as returned by a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedIssue {
    /// The issue title.
    pub title: String,
    /// The issue body.
    pub body: String,
}

/// Manages issues in an external tracker.
///
/// The identifier space is the tracker's own: created-issue numbers come
/// back from the tracker and are never reconciled with any numbering a
/// model proposed inside issue bodies.
pub trait IssueTracker: Send + Sync {
    /// Creates a new issue and returns the tracker-assigned number.
    ///
    /// # Errors
    ///
    /// Returns an error if the issue cannot be created or its assigned
    /// number cannot be determined.
    fn create_issue(
        &self,
        title: &str,
        body: &str,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;

    /// Fetches an existing issue's title and body by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the issue cannot be found or fetched.
    fn fetch_issue(
        &self,
        number: u64,
    ) -> Result<TrackedIssue, Box<dyn std::error::Error + Send + Sync>>;
}

impl<T: IssueTracker + ?Sized> IssueTracker for std::sync::Arc<T> {
    fn create_issue(
        &self,
        title: &str,
        body: &str,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        (**self).create_issue(title, body)
    }

    fn fetch_issue(
        &self,
        number: u64,
    ) -> Result<TrackedIssue, Box<dyn std::error::Error + Send + Sync>> {
        (**self).fetch_issue(number)
    }
}
