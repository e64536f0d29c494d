//! Positional line comparison between two files.
//!
//! No common-subsequence alignment: lines are compared index by index,
//! and a file running out of lines counts as a mismatch at that index.

use std::path::Path;

use serde::Serialize;

use crate::{Error, Result};

/// Outcome of comparing two files line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum DiffOutcome {
    /// Every line matched.
    Identical,
    /// First 1-based line index at which the files differ.
    DiffersAt { line: usize },
}

/// Compare two files positionally, line by line.
///
/// Content is interpreted as UTF-8 (lossily for invalid bytes), so equal
/// byte content always compares identical.
///
/// # Errors
///
/// Returns a not-found error if either path is missing, and an I/O error
/// if a file exists but cannot be read.
pub fn diff_files(path_a: &Path, path_b: &Path) -> Result<DiffOutcome> {
    let a = read_lines(path_a)?;
    let b = read_lines(path_b)?;

    let limit = a.len().max(b.len());
    for index in 0..limit {
        if a.get(index) != b.get(index) {
            return Ok(DiffOutcome::DiffersAt { line: index + 1 });
        }
    }
    Ok(DiffOutcome::Identical)
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::not_found(path));
    }
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.lines().map(str::to_owned).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_identical_files() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "one\ntwo\nthree\n").unwrap();
        fs::write(&b, "one\ntwo\nthree\n").unwrap();

        assert_eq!(diff_files(&a, &b).unwrap(), DiffOutcome::Identical);
    }

    #[test]
    fn test_first_mismatch_line_reported() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "l1\nl2\nl3\nl4\nl5\n").unwrap();
        fs::write(&b, "l1\nl2\nCHANGED\nl4\nl5\n").unwrap();

        assert_eq!(
            diff_files(&a, &b).unwrap(),
            DiffOutcome::DiffersAt { line: 3 }
        );
    }

    #[test]
    fn test_shorter_file_mismatches_at_truncation_point() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "l1\nl2\nl3\n").unwrap();
        fs::write(&b, "l1\nl2\n").unwrap();

        assert_eq!(
            diff_files(&a, &b).unwrap(),
            DiffOutcome::DiffersAt { line: 3 }
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        fs::write(&a, "x\n").unwrap();

        let err = diff_files(&a, &tmp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_empty_files_are_identical() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "").unwrap();
        fs::write(&b, "").unwrap();

        assert_eq!(diff_files(&a, &b).unwrap(), DiffOutcome::Identical);
    }
}
