//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `issuesmith`.
#[derive(Debug, Parser)]
#[command(name = "issuesmith", version, about = "Break specs into tracked issues")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Break a specification document into issue descriptors and print them as JSON.
    Decompose {
        /// Path to the specification document.
        #[arg(default_value = "README.md")]
        spec_file: PathBuf,
    },
    /// Decompose a specification and create one tracked issue per descriptor.
    Publish {
        /// Path to the specification document.
        #[arg(default_value = "README.md")]
        spec_file: PathBuf,
    },
    /// Attempt an autonomous implementation of one tracked issue.
    Implement {
        /// Tracker-assigned issue number.
        issue: u64,
    },
}
