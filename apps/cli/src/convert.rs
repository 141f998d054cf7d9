//! Per-file conversion and the batch loop.

use crate::error::{CliError, Result};
use quiz_core::{load_document, to_json};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.converted + self.failed
    }
}

/// Result of converting a single file.
#[derive(Debug)]
pub enum FileOutcome {
    Converted(PathBuf),
    Failed(CliError),
}

/// Output location for an input file: same directory and stem, `.json`.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Convert one markdown file and write its JSON next to it.
///
/// The document is fully parsed and rendered before anything is written.
/// With `dry_run` nothing is written and the would-be output path is returned.
pub fn convert_file(path: &Path, dry_run: bool) -> Result<PathBuf> {
    let document = load_document(path)?;
    debug!(
        "Parsed {} questions from {}",
        document.questions.len(),
        path.display()
    );

    let json = to_json(&document).map_err(|source| CliError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    let out = output_path(path);
    if !dry_run {
        fs::write(&out, json).map_err(|source| CliError::Write {
            path: out.clone(),
            source,
        })?;
    }
    Ok(out)
}

/// Convert every file in order, reporting progress to `out` and failures to
/// `err`. A failing file is skipped and never aborts the batch.
pub fn run_batch<O: Write, E: Write>(
    files: &[PathBuf],
    dry_run: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    writeln!(
        out,
        "Found {} markdown files. Starting conversion...",
        files.len()
    )?;

    for path in files {
        writeln!(out, "Processing '{}'...", path.display())?;

        let outcome = match convert_file(path, dry_run) {
            Ok(written) => FileOutcome::Converted(written),
            Err(e) => FileOutcome::Failed(e),
        };

        match outcome {
            FileOutcome::Converted(written) => {
                summary.converted += 1;
                let verb = if dry_run { "Would write" } else { "Converted" };
                writeln!(
                    out,
                    "{} '{}' -> '{}'",
                    verb,
                    path.display(),
                    written.display()
                )?;
            }
            FileOutcome::Failed(e) => {
                summary.failed += 1;
                debug!("Skipping {}: {}", path.display(), e);
                writeln!(err, "Failed to convert '{}': {}", path.display(), e)?;
            }
        }
    }

    writeln!(
        out,
        "Done: {} converted, {} failed.",
        summary.converted, summary.failed
    )?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const SAMPLE: &str = "#### What is 2+2?\n- [ ] 3\n- [x] 4\n";

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("dir/quiz.md")),
            PathBuf::from("dir/quiz.json")
        );
        assert_eq!(
            output_path(Path::new("dir/v1.2.md")),
            PathBuf::from("dir/v1.2.json")
        );
    }

    #[test]
    fn test_convert_file_writes_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("arith.md");
        fs::write(&input, SAMPLE).unwrap();

        let written = convert_file(&input, false).unwrap();
        assert_eq!(written, dir.path().join("arith.json"));

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();
        assert_eq!(value["name_of_markdown"], "arith.md");
        assert_eq!(value["questions"][0]["correct_answer"], 1);
        assert_eq!(value["questions"][0]["options"][1]["option_text"], "4");
    }

    #[test]
    fn test_convert_file_overwrites_existing_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("arith.md");
        fs::write(&input, SAMPLE).unwrap();
        fs::write(dir.path().join("arith.json"), "stale").unwrap();

        let written = convert_file(&input, false).unwrap();
        assert!(fs::read_to_string(written).unwrap().starts_with('{'));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("arith.md");
        fs::write(&input, SAMPLE).unwrap();

        let written = convert_file(&input, true).unwrap();
        assert!(!written.exists());
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.md");
        let good = dir.path().join("good.md");
        fs::write(&bad, b"#### Caf\xe9\n").unwrap();
        fs::write(&good, SAMPLE).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let files = vec![bad.clone(), good.clone()];
        let summary = run_batch(&files, false, &mut out, &mut err).unwrap();

        assert_eq!(summary, BatchSummary { converted: 1, failed: 1 });
        assert_eq!(summary.total(), 2);
        assert!(dir.path().join("good.json").exists());
        assert!(!dir.path().join("bad.json").exists());

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(out.starts_with("Found 2 markdown files. Starting conversion...\n"));
        assert!(out.contains(&format!("Processing '{}'...", bad.display())));
        assert!(out.contains(&format!("Converted '{}'", good.display())));
        assert!(out.ends_with("Done: 1 converted, 1 failed.\n"));
        assert!(err.contains(&format!("Failed to convert '{}'", bad.display())));
        assert!(err.contains("not valid UTF-8"));
    }

    #[test]
    fn test_batch_continues_after_write_failure() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.md");
        let b = dir.path().join("b.md");
        fs::write(&a, SAMPLE).unwrap();
        fs::write(&b, SAMPLE).unwrap();
        fs::create_dir(dir.path().join("a.json")).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let files = vec![a.clone(), b.clone()];
        let summary = run_batch(&files, false, &mut out, &mut err).unwrap();

        assert_eq!(summary, BatchSummary { converted: 1, failed: 1 });
        assert!(dir.path().join("a.json").is_dir());
        assert!(dir.path().join("b.json").is_file());

        let err = String::from_utf8(err).unwrap();
        assert!(err.contains(&format!(
            "Failed to convert '{}': cannot write {}",
            a.display(),
            dir.path().join("a.json").display()
        )));
        assert_eq!(err.lines().count(), 1);
    }
}
