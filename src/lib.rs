//! # SVG Gallery
//!
//! Builds a static HTML page that shows every matching file in a directory
//! as a tile in a responsive grid. Handy for vector exports whose filters
//! and blend modes the desktop thumbnailer does not render: open the page
//! in a browser and see the real output.
//!
//! # Pipeline
//!
//! ```text
//! 1. Resolve   CLI flags + gallery.toml  →  GalleryOptions
//! 2. Scan      source/                   →  matched file paths
//! 3. Render    sorted paths              →  HTML document
//! 4. Write     HTML                      →  output file (parents created)
//! ```
//!
//! Every run is a single pass. Any error ends the run with nothing written.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Option defaults, `gallery.toml` loading, path resolution |
//! | [`pattern`] | `*`/`?` glob compiled to an anchored, case-insensitive matcher |
//! | [`scan`] | Directory walk collecting matching regular files |
//! | [`generate`] | Tile building, HTML rendering with Maud, the output writer |
//! | [`output`] | CLI output formatting |

pub mod config;
pub mod generate;
pub mod output;
pub mod pattern;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;

use config::GalleryOptions;
use generate::Tile;
use pattern::GlobMatcher;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Pattern(#[from] pattern::PatternError),
    #[error(transparent)]
    Scan(#[from] scan::ScanError),
    #[error(transparent)]
    Generate(#[from] generate::GenerateError),
}

/// What a successful run produced.
#[derive(Debug)]
pub struct BuildReport {
    pub output: PathBuf,
    pub tiles: Vec<Tile>,
}

/// Scan, render and write the gallery described by `options`.
pub fn build(options: &GalleryOptions) -> Result<BuildReport, BuildError> {
    let matcher = GlobMatcher::new(&options.pattern)?;
    let files = scan::collect(&options.source, &matcher, options.recursive)?;
    let tiles = generate::tiles_for(files, &options.output);

    let html = generate::render(&options.title, &tiles, &options.theme);
    generate::write_gallery(&options.output, &html)?;

    Ok(BuildReport {
        output: options.output.clone(),
        tiles,
    })
}
