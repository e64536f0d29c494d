//! Live recursive glob search.
//!
//! Unlike the directory cache, this always reflects the filesystem as it
//! is at call time. Patterns use standard glob syntax (`*`, `?`, `[abc]`,
//! `{a,b}`) and are matched against entry file names.

use std::path::{Path, PathBuf};

use globset::Glob;
use walkdir::WalkDir;

use crate::{Error, Result};

/// Find every entry under `root` whose file name matches `pattern`.
///
/// Symlinks are not followed. Unreadable subtrees are skipped. The result
/// order is deterministic within a single call (entries sorted per
/// directory); a missing `root` yields an empty result, not an error.
///
/// # Errors
///
/// Returns an invalid-pattern error, before any traversal, if `pattern`
/// does not compile.
pub fn find(pattern: &str, root: &Path) -> Result<Vec<PathBuf>> {
    let matcher = Glob::new(pattern)
        .map_err(|e| Error::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?
        .compile_matcher();

    if !root.exists() {
        tracing::debug!(root = %root.display(), "Pattern search root does not exist");
        return Ok(Vec::new());
    }

    let mut matches = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.depth() == 0 {
                    continue;
                }
                if matcher.is_match(Path::new(entry.file_name())) {
                    matches.push(entry.into_path());
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "Skipping unreadable entry during pattern search");
            }
        }
    }

    tracing::debug!(pattern, root = %root.display(), hits = matches.len(), "Pattern search done");
    Ok(matches)
}
