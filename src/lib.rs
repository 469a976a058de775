//! Core library entry for the `issuesmith` CLI.
//!
//! Three operations, each a short sequential pipeline:
//!
//! - `decompose`: ask the model to break a spec document into issue
//!   descriptors and print them as JSON.
//! - `publish`: decompose a spec and file one tracked issue per descriptor
//!   through the `gh` CLI.
//! - `implement`: drive a bounded multi-turn conversation with the model
//!   aimed at implementing one tracked issue.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod decompose;
pub mod error;
pub mod implement;
pub mod ports;
pub mod publish;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// All clap output (help, version, usage errors) goes to standard output;
/// only usage errors map to a non-zero exit.
///
/// # Errors
///
/// Returns an error string when argument parsing fails (after the usage
/// text has been printed) or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => return report_parse_outcome(&err),
    };
    commands::dispatch(&cli.command)
}

/// Prints clap's rendered output on stdout and maps the error kind to an
/// exit status: help and version succeed, everything else is a usage error.
fn report_parse_outcome(err: &clap::Error) -> Result<(), String> {
    print!("{err}");
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(()),
        _ => Err("invalid usage".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["issuesmith", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_without_subcommand() {
        let result = run(["issuesmith"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_succeeds_on_help() {
        let result = run(["issuesmith", "--help"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_succeeds_on_version() {
        let result = run(["issuesmith", "--version"]);
        assert!(result.is_ok());
    }
}
