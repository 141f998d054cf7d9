//! Loading quiz documents from disk.

use crate::error::{ReadError, Result};
use crate::parser::parse_document;
use crate::types::Document;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

const BOM: char = '\u{feff}';

/// Read, decode and parse one markdown file.
///
/// The document is named after the file's base name and every question is
/// stamped with the file's last-modified time.
pub fn load_document(path: &Path) -> Result<Document> {
    let io_err = |source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let bytes = fs::read(path).map_err(io_err)?;
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(io_err)?;

    let content = std::str::from_utf8(&bytes).map_err(|source| ReadError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    let content = content.strip_prefix(BOM).unwrap_or(content);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let updated_at = format_timestamp(modified).ok_or_else(|| ReadError::Timestamp {
        path: path.to_path_buf(),
    })?;

    Ok(parse_document(&name, content, &updated_at))
}

/// Format a filesystem time as RFC 3339 UTC with millisecond precision,
/// e.g. `2024-05-01T08:30:00.000Z`.
///
/// Returns `None` when the time is outside the range chrono can represent.
pub fn format_timestamp(time: SystemTime) -> Option<String> {
    let (secs, nanos) = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => (i64::try_from(after.as_secs()).ok()?, after.subsec_nanos()),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => (-secs, 0),
                nanos => (-secs - 1, 1_000_000_000 - nanos),
            }
        }
    };

    DateTime::<Utc>::from_timestamp(secs, nanos)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}
