//! Error types for quiz-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ReadError.
pub type Result<T> = std::result::Result<T, ReadError>;

/// Errors that can occur while loading a markdown file.
///
/// Parsing itself never fails; only I/O and decoding are reported.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("{} has a modification time outside the supported range", path.display())]
    Timestamp { path: PathBuf },
}

impl ReadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Encoding { path, .. } | Self::Timestamp { path } => {
                path
            }
        }
    }
}
