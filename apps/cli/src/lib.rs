//! Batch driver for converting markdown quiz files into JSON documents.
//!
//! Provides:
//! - Command-line arguments (`Cli`)
//! - Recursive `.md` discovery
//! - Per-file conversion with a progress log and failure isolation

pub mod cli;
pub mod convert;
pub mod discover;
pub mod error;

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use crate::cli::Cli;
use crate::convert::{run_batch, BatchSummary};
use crate::discover::find_markdown_files;
use crate::error::CliError;

/// Install the global tracing subscriber. Logs go to stderr so progress on
/// stdout stays clean. `RUST_LOG` overrides the default level.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Run one conversion batch. Fatal conditions (missing or invalid root)
/// are errors; per-file failures are only counted in the summary.
pub fn run(cli: Cli) -> anyhow::Result<BatchSummary> {
    let root = cli.root.ok_or(CliError::Usage)?;

    if !root.is_dir() {
        return Err(CliError::InvalidRoot(root).into());
    }

    let files = find_markdown_files(&root)?;
    if files.is_empty() {
        println!(
            "No markdown (.md) files found in '{}' or its subdirectories.",
            root.display()
        );
        return Ok(BatchSummary::default());
    }

    info!("Converting {} files (dry run: {})", files.len(), cli.dry_run);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = run_batch(&files, cli.dry_run, &mut stdout.lock(), &mut stderr.lock())
        .context("failed to write progress output")?;

    Ok(summary)
}
