//! Shared test utilities for the svg-gallery test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = make_tree(&["a.svg", "sub/b.svg"]);
//! let options = options_for(tmp.path());
//! let report = build(&options).unwrap();
//! assert_tile_labels(&report.tiles, &["a"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::{GalleryOptions, ThemeConfig};
use crate::generate::Tile;

/// Minimal SVG body written into every fixture file.
pub const SVG_BODY: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8"><rect width="8" height="8"/></svg>"#;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory holding the given relative files.
///
/// Parent directories are created as needed. Entries ending in `/` become
/// empty directories.
pub fn make_tree(entries: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for entry in entries {
        let path = tmp.path().join(entry);
        if entry.ends_with('/') {
            std::fs::create_dir_all(&path).unwrap();
            continue;
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, SVG_BODY).unwrap();
    }
    tmp
}

/// Stock options for a source directory, writing `<source>/gallery.html`.
pub fn options_for(source: &Path) -> GalleryOptions {
    GalleryOptions {
        source: source.to_path_buf(),
        output: source.join("gallery.html"),
        pattern: "*.svg".to_string(),
        recursive: false,
        title: "SVG Gallery".to_string(),
        theme: ThemeConfig::default(),
        config_file: None,
    }
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert tile labels in order, with a readable diff on mismatch.
pub fn assert_tile_labels(tiles: &[Tile], expected: &[&str]) {
    let labels: Vec<&str> = tiles.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, expected, "tile labels differ");
}
