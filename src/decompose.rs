//! Spec decomposition: one model exchange that turns a specification
//! document into an ordered list of issue descriptors.

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::ports::llm::{CompletionRequest, Message};

/// One unit of work proposed by the model.
///
/// `number` and `deps` live in the model's own numbering space; the tracker
/// assigns unrelated numbers at creation time and the two are never
/// reconciled, so "depends on #0" inside a body refers to this field, not to
/// anything the tracker knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDescriptor {
    /// Model-proposed issue number, for readability only.
    pub number: u32,
    /// Short imperative title.
    pub title: String,
    /// Markdown body with Dependencies, Acceptance Criteria, and Tests
    /// Required sections.
    pub body: String,
    /// Model-proposed numbers of issues this one depends on.
    #[serde(default)]
    pub deps: Vec<u32>,
}

/// The ordered result of one decomposition call. Always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    /// Issue descriptors in the model's proposed implementation order.
    pub issues: Vec<IssueDescriptor>,
}

/// Builds the single instruction prompt for a decomposition exchange.
#[must_use]
pub fn build_decomposition_prompt(spec_text: &str) -> String {
    let mut prompt = String::from(
        "You are a technical project planner. Break the following specification \
         into a list of implementable issues.\n\n--- SPECIFICATION ---\n",
    );
    let _ = write!(prompt, "{spec_text}");
    prompt.push_str(
        "\n--- END SPECIFICATION ---\n\n\
         Respond with ONLY a JSON array and no other text. Each element must be an \
         object with these fields:\n\
         - \"number\": integer issue number, starting at 0\n\
         - \"title\": short imperative title\n\
         - \"body\": markdown body containing a Dependencies section, an \
         Acceptance Criteria checklist, and a Tests Required list\n\
         - \"deps\": array of issue numbers this issue depends on\n\n\
         Order the issues so foundations come before features. Dependencies may \
         only reference earlier issue numbers.\n",
    );
    prompt
}

/// Locates the candidate JSON array inside a free-text model reply.
///
/// The span runs from the first `[` to the last `]`, inclusive. This is
/// tolerant of prose before or after the array, and wrong whenever the
/// surrounding prose itself contains brackets; the prompt instructs the
/// model to emit nothing but the array.
///
/// # Errors
///
/// Returns [`Error::NoJsonArray`] when either delimiter is missing or the
/// last `]` precedes the first `[`.
pub fn extract_json_array(text: &str) -> Result<&str, Error> {
    let start = text.find('[').ok_or(Error::NoJsonArray)?;
    let end = text.rfind(']').ok_or(Error::NoJsonArray)?;
    if end < start {
        return Err(Error::NoJsonArray);
    }
    Ok(&text[start..=end])
}

/// Decomposes the spec document at `spec_path` into issue descriptors.
///
/// The turn budget is accepted for symmetry with the implement operation but
/// decomposition is a single request/response exchange.
///
/// # Errors
///
/// Returns an error when the document cannot be read, the completion call
/// fails, the reply holds no parseable JSON array, or the array is empty.
pub async fn decompose(
    ctx: &ServiceContext,
    config: &ModelConfig,
    spec_path: &Path,
    _turn_budget: u32,
) -> Result<Decomposition, Error> {
    let spec_text = ctx.fs.read_to_string(spec_path).map_err(|e| Error::SpecRead {
        path: spec_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let request = CompletionRequest {
        model: config.model.clone(),
        messages: vec![Message::user(build_decomposition_prompt(&spec_text))],
        max_tokens: config.max_tokens,
    };
    let response =
        ctx.llm.complete(&request).await.map_err(|e| Error::Completion(e.to_string()))?;

    let payload = extract_json_array(&response.text)?;
    let issues: Vec<IssueDescriptor> = serde_json::from_str(payload)?;
    if issues.is_empty() {
        return Err(Error::EmptyDecomposition);
    }

    eprintln!("Decomposed specification into {} issues", issues.len());
    Ok(Decomposition { issues })
}
