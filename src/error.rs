//! Error kinds for the three operations.
//!
//! Nothing here is caught and downgraded: every variant propagates to the
//! entry point, which reports it via a non-zero process exit.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by decomposition, publishing, and implementation.
#[derive(Debug, Error)]
pub enum Error {
    /// The model-API credential is missing from the environment.
    #[error("ANTHROPIC_API_KEY environment variable not set")]
    MissingApiKey,

    /// The specification document could not be read.
    #[error("failed to read spec file {path}: {reason}")]
    SpecRead {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying adapter failure.
        reason: String,
    },

    /// The model completion call failed.
    #[error("model request failed: {0}")]
    Completion(String),

    /// The model reply contained no locatable JSON array.
    #[error("no JSON array found in model reply")]
    NoJsonArray,

    /// The located JSON span did not parse.
    #[error("model reply contained malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Decomposition parsed successfully but produced zero issues.
    #[error("decomposition produced no issues")]
    EmptyDecomposition,

    /// The tracker rejected an issue creation; the batch stops here.
    #[error("issue creation failed: {0}")]
    CreateIssue(String),

    /// The tracker could not supply the issue to implement.
    #[error("failed to fetch issue #{number}: {reason}")]
    FetchIssue {
        /// Tracker-assigned issue number.
        number: u64,
        /// Underlying adapter failure.
        reason: String,
    },
}
