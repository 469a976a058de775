//! `issuesmith publish` command.

use std::path::Path;

use crate::config::ModelConfig;
use crate::context::ServiceContext;
use crate::decompose;
use crate::implement::DEFAULT_TURN_BUDGET;
use crate::publish;

/// Execute the `publish` command: decompose the spec, then create one
/// tracked issue per descriptor.
///
/// # Errors
///
/// Returns an error string when decomposition fails or any creation is
/// rejected by the tracker. Issues created before a failure remain in the
/// tracker and are reported only by the per-creation log lines.
pub async fn run(
    ctx: &ServiceContext,
    config: &ModelConfig,
    spec_file: &Path,
) -> Result<(), String> {
    let decomposition = decompose::decompose(ctx, config, spec_file, DEFAULT_TURN_BUDGET)
        .await
        .map_err(|e| e.to_string())?;

    let created = publish::publish(ctx, &decomposition).map_err(|e| e.to_string())?;
    println!("Published {} issues", created.len());
    Ok(())
}
