//! quiz-md2json
//!
//! Converts every markdown quiz under a directory into a JSON document.

use std::process::ExitCode;

use clap::Parser;
use quiz_md2json::error::CliError;
use quiz_md2json::{init_tracing, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        // Per-file failures are reported but do not change the exit code.
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(CliError::Usage) => eprintln!("{err}"),
                _ => eprintln!("Error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}
