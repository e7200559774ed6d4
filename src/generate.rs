//! Gallery HTML generation.
//!
//! Turns the collected file list into one self-contained HTML document and
//! writes it to disk.
//!
//! ## Document Shape
//!
//! ```text
//! <header> h1 title
//! <main>
//!   div.grid
//!     figure.tile            one per matched file, sorted by absolute path
//!       div.thumb > img      src relative to the output file's directory
//!       figcaption           file name without extension
//! ```
//!
//! With no matched files the grid holds a single `p.empty` message instead
//! of tiles.
//!
//! ## Self-Contained Output
//!
//! The stylesheet is embedded at compile time from `static/style.css` and
//! inlined into a `<style>` element, preceded by the theme's CSS custom
//! properties. The only external references in the page are the image
//! sources themselves, so the file can be opened straight from disk.
//!
//! ## Escaping
//!
//! maud escapes `&`, `<`, `>` and `"`. File names can also carry `'`, so
//! labels, sources and the title go through [`escape_html`], which covers
//! all five characters, and are inserted as pre-escaped markup.

use crate::config::{self, ThemeConfig};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One gallery entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// File name without its extension.
    pub label: String,
    /// Path from the output file's directory to the image, `/`-separated.
    pub src: String,
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Message shown in place of the grid when nothing matched.
pub const EMPTY_MESSAGE: &str = "No files matched the provided pattern.";

/// Sort matched files by absolute path and build their tiles.
///
/// Sources are computed relative to the directory containing `output`.
pub fn tiles_for(mut files: Vec<PathBuf>, output: &Path) -> Vec<Tile> {
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    let output_dir = output.parent().unwrap_or(Path::new(""));
    files
        .iter()
        .map(|file| Tile {
            label: file
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
            src: to_slash(&relative_path(output_dir, file)),
        })
        .collect()
}

/// Render the full gallery document.
pub fn render(title: &str, tiles: &[Tile], theme: &ThemeConfig) -> String {
    let css = format!("{}\n{}", config::generate_theme_css(theme), CSS_STATIC);
    render_document(title, tiles, &css).into_string()
}

/// Write the document, creating missing parent directories first.
///
/// An existing file is overwritten.
pub fn write_gallery(output: &Path, html: &str) -> Result<(), GenerateError> {
    let wrap = |source| GenerateError::Write {
        path: output.to_path_buf(),
        source,
    };
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(output, html).map_err(wrap)?;
    log::info!("wrote {} bytes to {}", html.len(), output.display());
    Ok(())
}

/// Escape the five HTML-significant characters.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// HTML Components
// ============================================================================

fn render_document(title: &str, tiles: &[Tile], css: &str) -> Markup {
    let title = PreEscaped(escape_html(title));
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                header {
                    h1 { (title) }
                }
                main {
                    div.grid {
                        @if tiles.is_empty() {
                            p.empty { (EMPTY_MESSAGE) }
                        } @else {
                            @for tile in tiles {
                                (render_tile(tile))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_tile(tile: &Tile) -> Markup {
    let label = PreEscaped(escape_html(&tile.label));
    let src = PreEscaped(escape_html(&tile.src));
    html! {
        figure.tile {
            div.thumb {
                img src=(src) loading="lazy" alt=(label);
            }
            figcaption { (label) }
        }
    }
}

// ============================================================================
// Path helpers
// ============================================================================

/// Path leading from directory `from` to `to`, both absolute.
///
/// Falls back to `to` itself when the two share no root (different
/// Windows drives).
fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from.components().collect();
    let to_components: Vec<Component> = to.components().collect();

    let common = from
        .iter()
        .zip(&to_components)
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return to.to_path_buf();
    }

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &to_components[common..] {
        relative.push(component.as_os_str());
    }
    relative
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// ============================================================================
// Tests
// ============================================================================
