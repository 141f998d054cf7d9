//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Convert markdown quiz files into JSON documents
#[derive(Parser, Debug)]
#[command(name = "quiz-md2json")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to scan recursively for `.md` files
    #[arg(value_name = "ROOT_DIR")]
    pub root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Parse and report every file without writing any output
    #[arg(long)]
    pub dry_run: bool,
}
