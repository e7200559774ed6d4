//! CLI output formatting.
//!
//! Output lists what ended up in the gallery, one entry per tile, with the
//! image source as an indented context line:
//!
//! ```text
//! ==> Scanning /work/exports (*.svg)
//!     Config: /work/exports/gallery.toml
//! 001 arrow
//!     Source: icons/arrow.svg
//! 002 logo
//!     Source: logo.svg
//! Gallery written to /work/exports/gallery.html
//! ```
//!
//! Each `format_*` function returns lines for testability; `print_*`
//! wrappers write them to stdout.

use crate::BuildReport;
use crate::config::GalleryOptions;
use crate::generate::Tile;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

pub fn format_scan_header(options: &GalleryOptions) -> String {
    let mode = if options.recursive { ", recursive" } else { "" };
    format!(
        "==> Scanning {} ({}{})",
        options.source.display(),
        options.pattern,
        mode
    )
}

pub fn format_tiles(tiles: &[Tile]) -> Vec<String> {
    if tiles.is_empty() {
        return vec!["No files matched".to_string()];
    }
    let mut lines = Vec::with_capacity(tiles.len() * 2);
    for (i, tile) in tiles.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), tile.label));
        lines.push(format!("{}Source: {}", indent(1), tile.src));
    }
    lines
}

pub fn format_build_output(options: &GalleryOptions, report: &BuildReport) -> Vec<String> {
    let mut lines = vec![format_scan_header(options)];
    if let Some(config_file) = &options.config_file {
        lines.push(format!("{}Config: {}", indent(1), config_file.display()));
    }
    lines.extend(format_tiles(&report.tiles));
    lines.push(format!("Gallery written to {}", report.output.display()));
    lines
}

pub fn print_build_output(options: &GalleryOptions, report: &BuildReport) {
    for line in format_build_output(options, report) {
        println!("{}", line);
    }
}
