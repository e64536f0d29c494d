//! Directory cache and cache-backed filename lookup.
//!
//! The cache is a deduplicated, sorted set of directory paths collected
//! from a fixed set of roots. It is rebuilt wholesale on demand; readers
//! always see either the previous or the new entry set in full.

mod walker;

pub use walker::{collect_directories, WalkStats};

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Error, Result};

/// Bounded, refreshable index of directory paths.
///
/// Exclusively owned by the toolkit instance; lookups borrow an immutable
/// snapshot, so a concurrent `refresh` in a threaded host can never hand a
/// reader a torn view.
pub struct DirectoryCache {
    roots: Vec<PathBuf>,
    capacity: usize,
    entries: RwLock<Arc<Vec<PathBuf>>>,
}

impl DirectoryCache {
    /// Create an empty cache over the given roots. No walk happens until
    /// [`build`](Self::build) is called.
    #[must_use]
    pub fn new(roots: Vec<PathBuf>, capacity: usize) -> Self {
        Self {
            roots,
            capacity,
            entries: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Walk the roots and replace the stored entry set.
    ///
    /// Roots that do not exist are skipped, as are unreadable or cyclic
    /// subtrees. A build that can collect nothing produces an empty cache
    /// rather than failing.
    pub fn build(&self) -> WalkStats {
        let (dirs, stats) = collect_directories(&self.roots, self.capacity);

        tracing::info!(
            dirs = stats.dirs_found,
            skipped = stats.subtrees_skipped,
            errors = stats.errors,
            capped = stats.capped,
            "Directory cache built"
        );

        // Full replacement: the new set is computed before the swap, so
        // readers see the old or the new snapshot, never a mix.
        *self.entries.write() = Arc::new(dirs);
        stats
    }

    /// Rebuild the cache from scratch. Identical to [`build`](Self::build);
    /// the previous entry set is discarded, never merged.
    pub fn refresh(&self) -> WalkStats {
        self.build()
    }

    /// Snapshot of the current entry set, sorted and deduplicated.
    #[must_use]
    pub fn entries(&self) -> Arc<Vec<PathBuf>> {
        Arc::clone(&self.entries.read())
    }

    /// Number of cached directories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no directories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Probe every cached directory for an entry named `name` and return
    /// the full paths of those that exist, in cache order.
    ///
    /// Existence is checked against the live filesystem, so a stale cache
    /// entry simply fails the probe; it is never an error.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `name` is empty or contains a
    /// path separator.
    pub fn find_by_name(&self, name: &str) -> Result<Vec<PathBuf>> {
        validate_lookup_name(name)?;

        let snapshot = self.entries();
        let matches: Vec<PathBuf> = snapshot
            .iter()
            .map(|dir| dir.join(name))
            .filter(|candidate| candidate.symlink_metadata().is_ok())
            .collect();

        tracing::debug!(name, hits = matches.len(), probed = snapshot.len(), "Fast lookup");
        Ok(matches)
    }
}

/// A lookup name must be a single path component.
fn validate_lookup_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_argument("filename cannot be empty"));
    }
    if name.contains(std::path::MAIN_SEPARATOR) || name.contains('/') {
        return Err(Error::invalid_argument(
            "filename cannot contain path separators",
        ));
    }
    Ok(())
}
