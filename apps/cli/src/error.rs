//! Error types for the converter CLI.

use quiz_core::ReadError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage: quiz-md2json <ROOT_DIR>")]
    Usage,

    #[error("the provided path '{}' is not a valid directory", .0.display())]
    InvalidRoot(PathBuf),

    #[error("cannot scan '{}': {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("cannot serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
