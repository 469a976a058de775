//! `issuesmith decompose` command.

use std::path::Path;

use crate::config::ModelConfig;
use crate::context::ServiceContext;
use crate::decompose::{self, Decomposition};
use crate::implement::DEFAULT_TURN_BUDGET;

/// Execute the `decompose` command: print the decomposition as indented
/// JSON on stdout, an object wrapping the `issues` array.
///
/// # Errors
///
/// Returns an error string when the spec cannot be read or the model reply
/// yields no valid issue list.
pub async fn run(
    ctx: &ServiceContext,
    config: &ModelConfig,
    spec_file: &Path,
) -> Result<(), String> {
    let result = decompose::decompose(ctx, config, spec_file, DEFAULT_TURN_BUDGET)
        .await
        .map_err(|e| e.to_string())?;

    println!("{}", render_decomposition(&result)?);
    Ok(())
}

/// Renders the whole decomposition, keeping its `issues` wrapper key.
fn render_decomposition(result: &Decomposition) -> Result<String, String> {
    serde_json::to_string_pretty(result).map_err(|e| format!("failed to render issue list: {e}"))
}
