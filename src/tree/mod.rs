//! Depth-limited directory tree rendering.
//!
//! Produces the classic box-drawing layout: the last entry of a listing
//! gets a terminal connector, earlier entries a branch connector, and the
//! child prefix extends with a vertical guide only while a sibling still
//! follows at that level. Entry order is lexicographic by name, never
//! filesystem order, so output is deterministic.

use std::ffi::OsString;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

const BRANCH: &str = "├── ";
const TERMINAL: &str = "└── ";
const GUIDE: &str = "│   ";
const PADDING: &str = "    ";

/// Options controlling a tree render.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Maximum listing depth. Depth 0 lists only the root's immediate
    /// entries; a directory's contents are listed only while its listing
    /// depth is strictly less than this.
    pub max_depth: usize,
    /// Include entries whose name begins with a dot.
    pub show_hidden: bool,
    /// List directories only; files never appear at any depth.
    pub dirs_only: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: usize::MAX,
            show_hidden: false,
            dirs_only: false,
        }
    }
}

/// Render `root` as a text tree.
///
/// An unlistable directory is still shown as a line item; its contents are
/// skipped silently. Symlinks are shown but never followed.
///
/// # Errors
///
/// Returns a not-found error if `root` does not exist.
pub fn render(root: &Path, options: &RenderOptions) -> Result<String> {
    if !root.exists() {
        return Err(Error::not_found(root));
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", root.display());
    render_children(root, "", 0, options, &mut out);
    Ok(out)
}

/// One listed entry, pre-classified so filtering and sorting are uniform.
struct Listed {
    name: OsString,
    path: PathBuf,
    is_dir: bool,
}

fn render_children(dir: &Path, prefix: &str, depth: usize, options: &RenderOptions, out: &mut String) {
    let Some(mut entries) = list_directory(dir, options) else {
        return;
    };
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let count = entries.len();
    for (index, entry) in entries.into_iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { TERMINAL } else { BRANCH };
        let _ = writeln!(out, "{prefix}{connector}{}", entry.name.to_string_lossy());

        if entry.is_dir && depth < options.max_depth {
            let child_prefix = format!("{prefix}{}", if is_last { PADDING } else { GUIDE });
            render_children(&entry.path, &child_prefix, depth + 1, options, out);
        }
    }
}

/// List one directory with the hidden and dirs-only filters applied.
/// Returns None if the directory cannot be read.
fn list_directory(dir: &Path, options: &RenderOptions) -> Option<Vec<Listed>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "Skipping unlistable directory");
            return None;
        }
    };

    let mut listed = Vec::new();
    for entry in entries {
        let Ok(entry) = entry else { continue };
        let name = entry.file_name();

        if !options.show_hidden && name.to_string_lossy().starts_with('.') {
            continue;
        }

        // file_type does not follow symlinks, so a symlinked directory is
        // shown as a leaf and cycles cannot occur.
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
        if options.dirs_only && !is_dir {
            continue;
        }

        listed.push(Listed {
            name,
            path: entry.path(),
            is_dir,
        });
    }
    Some(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn opts(max_depth: usize, show_hidden: bool, dirs_only: bool) -> RenderOptions {
        RenderOptions {
            max_depth,
            show_hidden,
            dirs_only,
        }
    }

    #[test]
    fn test_depth_zero_lists_only_immediate_children() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::create_dir(sub.join("deeper")).unwrap();
        fs::create_dir(tmp.path().join("other")).unwrap();

        let text = render(tmp.path(), &opts(0, false, true)).unwrap();
        let expected = format!(
            "{}\n├── other\n└── sub\n",
            tmp.path().display()
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_connector_and_guide_layout() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(tmp.path().join("x.txt"), "").unwrap();
        fs::write(sub.join("y.txt"), "").unwrap();

        let text = render(tmp.path(), &opts(1, false, false)).unwrap();
        let expected = format!(
            "{}\n├── sub\n│   └── y.txt\n└── x.txt\n",
            tmp.path().display()
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_last_ancestor_gets_blank_padding() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("zz");
        fs::create_dir(&sub).unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();
        fs::write(sub.join("inner.txt"), "").unwrap();

        // zz sorts last, so its children are indented with blank padding.
        let text = render(tmp.path(), &opts(2, false, false)).unwrap();
        let expected = format!(
            "{}\n├── a.txt\n└── zz\n    └── inner.txt\n",
            tmp.path().display()
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_dirs_only_excludes_files_at_every_depth() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(tmp.path().join("top.txt"), "").unwrap();
        fs::write(sub.join("nested.txt"), "").unwrap();
        fs::create_dir(sub.join("inner")).unwrap();

        let text = render(tmp.path(), &opts(5, false, true)).unwrap();
        assert!(!text.contains("top.txt"));
        assert!(!text.contains("nested.txt"));
        assert!(text.contains("inner"));
    }

    #[test]
    fn test_hidden_entries_filtered_by_default() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join("visible.txt"), "").unwrap();

        let hidden_off = render(tmp.path(), &opts(1, false, false)).unwrap();
        assert!(!hidden_off.contains(".git"));

        let hidden_on = render(tmp.path(), &opts(1, true, false)).unwrap();
        assert!(hidden_on.contains(".git"));
    }

    #[test]
    fn test_missing_root_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = render(&tmp.path().join("missing"), &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let tmp = TempDir::new().unwrap();
        for name in ["beta", "alpha", "gamma"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }

        let text = render(tmp.path(), &opts(0, false, false)).unwrap();
        let lines: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(lines, vec!["├── alpha", "├── beta", "└── gamma"]);
    }
}
