//! Source directory walking.
//!
//! Collects every regular file under the source directory whose
//! root-relative path matches the gallery pattern:
//!
//! ```text
//! exports/                 relative path tested
//! ├── logo.svg             logo.svg
//! ├── notes.txt            notes.txt
//! └── icons/               (descended only with --recursive)
//!     └── arrow.svg        icons/arrow.svg
//! ```
//!
//! Relative paths always use `/` as the separator, whatever the platform,
//! and never start with a `./` segment.
//!
//! ## Rules
//!
//! - Directories are skipped unless the walk is recursive.
//! - Symbolic links are not followed and never count as regular files.
//! - Sockets, fifos and other special files are skipped.
//! - Any error while listing a directory aborts the whole walk.
//!
//! Results are returned in filesystem enumeration order. Sorting belongs to
//! the renderer so the gallery order is stable across runs.

use crate::pattern::GlobMatcher;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read source directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Collect the files under `base_dir` matching `matcher`.
///
/// `base_dir` is expected to be absolute; returned paths are `base_dir`
/// joined with the entry's relative path.
pub fn collect(
    base_dir: &Path,
    matcher: &GlobMatcher,
    recursive: bool,
) -> Result<Vec<PathBuf>, ScanError> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(base_dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false);

    let mut matched = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            log::debug!("skipping non-file entry {:?}", entry.path());
            continue;
        }

        let relative = relative_slash_path(base_dir, entry.path());
        if matcher.is_match(&relative) {
            log::debug!("matched {relative}");
            matched.push(entry.into_path());
        } else {
            log::debug!("pattern {:?} rejects {relative}", matcher.as_str());
        }
    }

    log::info!(
        "collected {} file(s) from {}",
        matched.len(),
        base_dir.display()
    );
    Ok(matched)
}

/// Path of `path` relative to `root`, joined with `/`.
fn relative_slash_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn names(files: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn selects_matching_files_case_insensitively() {
        let tmp = make_tree(&["a.svg", "b.SVG", "c.txt"]);
        let matcher = GlobMatcher::new("*.svg").unwrap();

        let files = collect(tmp.path(), &matcher, false).unwrap();
        assert_eq!(names(&files), vec!["a.svg", "b.SVG"]);
    }

    #[test]
    fn non_recursive_skips_subdirectories() {
        let tmp = make_tree(&["x.svg", "sub/y.svg"]);
        let matcher = GlobMatcher::new("*.svg").unwrap();

        let files = collect(tmp.path(), &matcher, false).unwrap();
        assert_eq!(names(&files), vec!["x.svg"]);
    }

    #[test]
    fn recursive_descends_into_subdirectories() {
        let tmp = make_tree(&["x.svg", "sub/y.svg", "sub/deeper/z.svg"]);
        let matcher = GlobMatcher::new("*.svg").unwrap();

        let files = collect(tmp.path(), &matcher, true).unwrap();
        assert_eq!(names(&files), vec!["x.svg", "y.svg", "z.svg"]);
    }

    #[test]
    fn returns_absolute_paths_under_base() {
        let tmp = make_tree(&["sub/y.svg"]);
        let matcher = GlobMatcher::new("*.svg").unwrap();

        let files = collect(tmp.path(), &matcher, true).unwrap();
        assert_eq!(files, vec![tmp.path().join("sub").join("y.svg")]);
        assert!(files[0].is_absolute());
    }

    #[test]
    fn pattern_sees_root_relative_path() {
        let tmp = make_tree(&["icons/arrow.svg", "icons/nested/dot.svg", "logo.svg"]);
        let matcher = GlobMatcher::new("icons/*.svg").unwrap();

        let files = collect(tmp.path(), &matcher, true).unwrap();
        assert_eq!(names(&files), vec!["arrow.svg", "dot.svg"]);
    }

    #[test]
    fn directory_names_are_never_matched() {
        let tmp = make_tree(&["folder.svg/inner.txt"]);
        let matcher = GlobMatcher::new("*.svg").unwrap();

        assert!(collect(tmp.path(), &matcher, false).unwrap().is_empty());
        assert!(collect(tmp.path(), &matcher, true).unwrap().is_empty());
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let tmp = make_tree(&[]);
        let matcher = GlobMatcher::new("*.svg").unwrap();

        assert!(collect(tmp.path(), &matcher, true).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_error() {
        let tmp = make_tree(&[]);
        let matcher = GlobMatcher::new("*.svg").unwrap();

        let result = collect(&tmp.path().join("nope"), &matcher, false);
        assert!(matches!(result, Err(ScanError::Walk(_))));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        let tmp = make_tree(&["real/a.svg"]);
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real/a.svg"), tmp.path().join("b.svg"))
            .unwrap();
        let matcher = GlobMatcher::new("*.svg").unwrap();

        let files = collect(tmp.path(), &matcher, true).unwrap();
        assert_eq!(files, vec![tmp.path().join("real").join("a.svg")]);
    }

    #[test]
    fn relative_slash_path_joins_with_slash() {
        let root = Path::new("/data/exports");
        let path = root.join("icons").join("arrow.svg");
        assert_eq!(relative_slash_path(root, &path), "icons/arrow.svg");
        assert_eq!(relative_slash_path(root, &root.join("a.svg")), "a.svg");
    }
}
