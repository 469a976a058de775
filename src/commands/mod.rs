//! Command dispatch and handlers.

pub mod decompose;
pub mod implement;
pub mod publish;

use crate::cli::Command;
use crate::config::ModelConfig;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// The model credential is resolved here, before any file read, subprocess,
/// or network call, so a missing `ANTHROPIC_API_KEY` fails every subcommand
/// up front. Handlers run on a current-thread runtime: execution stays
/// single-threaded and strictly sequential.
///
/// # Errors
///
/// Returns an error string if configuration fails or the selected command
/// handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = ModelConfig::from_env().map_err(|e| e.to_string())?;
    let ctx = ServiceContext::live(&config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;

    match command {
        Command::Decompose { spec_file } => {
            runtime.block_on(decompose::run(&ctx, &config, spec_file))
        }
        Command::Publish { spec_file } => runtime.block_on(publish::run(&ctx, &config, spec_file)),
        Command::Implement { issue } => runtime.block_on(implement::run(&ctx, &config, *issue)),
    }
}
