//! Bounded directory walk for cache builds.
//!
//! Walks a fixed set of roots with an explicit work-list and a visited set
//! keyed by resolved real path, so symlink cycles and permission failures
//! are skipped rather than fatal.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

/// Statistics from a single cache-build walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkStats {
    /// Directories collected into the cache.
    pub dirs_found: u64,
    /// Subtrees skipped (permission denied, dangling symlink, cycle).
    pub subtrees_skipped: u64,
    /// Individual entry read errors.
    pub errors: u64,
    /// Whether the capacity cutoff stopped the walk early.
    pub capped: bool,
}

/// Walk every existing root and collect the directories beneath them.
///
/// The walk is breadth-first over an explicit queue. Each directory is
/// resolved to its real path before expansion; a directory whose real path
/// was already expanded is a cycle and is skipped. `capacity` is a soft
/// cap: the children of the directory being expanded are appended before
/// the check fires, so the result may overshoot by one directory's batch.
///
/// Returns the collected directories, deduplicated and sorted
/// lexicographically, together with walk statistics. A walk that can read
/// nothing returns an empty set, never an error.
pub fn collect_directories(roots: &[PathBuf], capacity: usize) -> (Vec<PathBuf>, WalkStats) {
    let mut stats = WalkStats::default();
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut queue: VecDeque<PathBuf> = VecDeque::new();
    let mut collected: Vec<PathBuf> = Vec::new();

    for root in roots {
        if root.is_dir() {
            collected.push(root.clone());
            queue.push_back(root.clone());
        } else {
            tracing::debug!(root = %root.display(), "Skipping missing root");
            stats.subtrees_skipped += 1;
        }
    }

    'walk: while let Some(dir) = queue.pop_front() {
        let real = match std::fs::canonicalize(&dir) {
            Ok(real) => real,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "Skipping unresolvable directory");
                stats.subtrees_skipped += 1;
                continue;
            }
        };

        if !visited.insert(real) {
            tracing::debug!(dir = %dir.display(), "Skipping already-visited directory");
            stats.subtrees_skipped += 1;
            continue;
        }

        if !expand_directory(&dir, &mut collected, &mut queue, &mut stats) {
            continue;
        }

        // Soft cap: this directory's children are already appended, so the
        // final count may overshoot by one batch.
        if collected.len() > capacity {
            tracing::debug!(
                collected = collected.len(),
                capacity,
                "Capacity cutoff reached, stopping walk"
            );
            stats.capped = true;
            break 'walk;
        }
    }

    collected.sort();
    collected.dedup();
    stats.dirs_found = collected.len() as u64;

    (collected, stats)
}

/// List one directory, appending child directories to both the collected
/// set and the work queue. Returns false if the directory itself could not
/// be listed.
fn expand_directory(
    dir: &Path,
    collected: &mut Vec<PathBuf>,
    queue: &mut VecDeque<PathBuf>,
    stats: &mut WalkStats,
) -> bool {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "Skipping unreadable directory");
            stats.subtrees_skipped += 1;
            return false;
        }
    };

    for entry in entries {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                // is_dir follows symlinks; the visited set stops cycles.
                if path.is_dir() {
                    collected.push(path.clone());
                    queue.push_back(path);
                }
            }
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Error reading directory entry");
                stats.errors += 1;
            }
        }
    }

    true
}
