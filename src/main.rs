//! Binary entrypoint for the `issuesmith` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Pick up ANTHROPIC_API_KEY from a local .env when present.
    dotenvy::dotenv().ok();

    match issuesmith::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
