//! Option resolution and the optional `gallery.toml`.
//!
//! Options come from three layers, later layers winning:
//!
//! ```text
//! stock defaults  →  <source>/gallery.toml  →  command-line flags
//! ```
//!
//! ## Config File
//!
//! `gallery.toml` lives in the source directory and is optional. All keys
//! are optional; defaults shown below:
//!
//! ```toml
//! title = "SVG Gallery"
//! pattern = "*.svg"
//! recursive = false
//!
//! [tiles]
//! size = 160        # Tile edge in px
//! medium = 140      # Tile edge below 900px viewport width
//! small = 120       # Tile edge below 600px viewport width
//!
//! [colors]
//! background = "#050505"
//! text = "#ececec"
//! border = "#1b1b1b"   # Header rule
//! thumb = "#000"       # Backdrop behind each image
//! caption = "#f0f0f0"  # Tile caption text
//! ```
//!
//! Config files are sparse and merged key-by-key over the stock defaults.
//! Unknown keys are rejected to catch typos early.
//!
//! ## Path Resolution
//!
//! Relative `<source>` and `--output` values resolve against the project
//! root (the working directory the tool was started from). Both are then
//! lexically normalized so `a/../b` and `./b` name the same file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file inside the source directory.
pub const CONFIG_FILE: &str = "gallery.toml";

/// Output file name used when `--output` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "gallery.html";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{} is not a directory.", .0.display())]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Contents of `gallery.toml`, with stock defaults for missing keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Page title and heading.
    pub title: String,
    /// Glob applied to root-relative paths.
    pub pattern: String,
    /// Descend into subdirectories.
    pub recursive: bool,
    pub tiles: TileConfig,
    pub colors: ColorConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "SVG Gallery".to_string(),
            pattern: "*.svg".to_string(),
            recursive: false,
            tiles: TileConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are usable in the generated stylesheet.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tiles = &self.tiles;
        if tiles.size == 0 || tiles.medium == 0 || tiles.small == 0 {
            return Err(ConfigError::Validation(
                "tiles sizes must be non-zero".into(),
            ));
        }
        for (key, value) in self.colors.entries() {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "colors.{key} must not be empty"
                )));
            }
            if value.contains(['{', '}', ';', '<', '>']) {
                return Err(ConfigError::Validation(format!(
                    "colors.{key} is not a CSS color: {value:?}"
                )));
            }
        }
        Ok(())
    }

    pub fn theme(&self) -> ThemeConfig {
        ThemeConfig {
            tiles: self.tiles.clone(),
            colors: self.colors.clone(),
        }
    }
}

/// Tile edge lengths in pixels, per viewport breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TileConfig {
    pub size: u32,
    /// Used when the viewport is at most 900px wide.
    pub medium: u32,
    /// Used when the viewport is at most 600px wide.
    pub small: u32,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            size: 160,
            medium: 140,
            small: 120,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub background: String,
    pub text: String,
    pub border: String,
    pub thumb: String,
    pub caption: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#050505".to_string(),
            text: "#ececec".to_string(),
            border: "#1b1b1b".to_string(),
            thumb: "#000".to_string(),
            caption: "#f0f0f0".to_string(),
        }
    }
}

impl ColorConfig {
    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("background", self.background.as_str()),
            ("text", self.text.as_str()),
            ("border", self.border.as_str()),
            ("thumb", self.thumb.as_str()),
            ("caption", self.caption.as_str()),
        ]
    }
}

/// Presentation settings handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeConfig {
    pub tiles: TileConfig,
    pub colors: ColorConfig,
}

/// Fully resolved options for one run.
#[derive(Debug, Clone)]
pub struct GalleryOptions {
    /// Absolute, existing directory to scan.
    pub source: PathBuf,
    /// Absolute path of the HTML file to write.
    pub output: PathBuf,
    pub pattern: String,
    pub recursive: bool,
    pub title: String,
    pub theme: ThemeConfig,
    /// `gallery.toml` that supplied defaults, if the source has one.
    pub config_file: Option<PathBuf>,
}

/// Values taken from the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: PathBuf,
    pub output: Option<PathBuf>,
    pub pattern: Option<String>,
    pub recursive: bool,
    pub title: Option<String>,
}

/// Resolve command-line values against `root` and the source's config file.
///
/// Fails before anything is written if the source is not a directory.
pub fn resolve_options(root: &Path, overrides: Overrides) -> Result<GalleryOptions, ConfigError> {
    let source = resolve_path(root, &overrides.source);
    if !source.is_dir() {
        return Err(ConfigError::NotADirectory(source));
    }

    let config = load_config(&source)?;
    let config_file = Some(source.join(CONFIG_FILE)).filter(|p| p.is_file());
    if let Some(path) = &config_file {
        log::info!("applied defaults from {}", path.display());
    }

    let output = match &overrides.output {
        Some(output) => resolve_path(root, output),
        None => source.join(DEFAULT_OUTPUT_FILE),
    };

    Ok(GalleryOptions {
        output,
        pattern: overrides.pattern.unwrap_or_else(|| config.pattern.clone()),
        recursive: overrides.recursive || config.recursive,
        title: overrides.title.unwrap_or_else(|| config.title.clone()),
        theme: config.theme(),
        config_file,
        source,
    })
}

/// Join `value` onto `root` unless it is already absolute, then normalize.
pub fn resolve_path(root: &Path, value: &Path) -> PathBuf {
    normalize_path(&root.join(value))
}

/// Lexically remove `.` segments and fold `..` into its parent.
///
/// `..` never climbs above the filesystem root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    normalized.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                );
                if !at_root {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(GalleryConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `gallery.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no config file.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    log::debug!("reading {}", config_path.display());
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load the config for a source directory, merged over stock defaults.
pub fn load_config(dir: &Path) -> Result<GalleryConfig, ConfigError> {
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(stock_defaults_value()?, overlay),
        None => stock_defaults_value()?,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// CSS custom properties for the theme, as a `:root` block.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    let c = &theme.colors;
    let t = &theme.tiles;
    format!(
        r#":root {{
  --tile-size: {size}px;
  --color-bg: {bg};
  --color-text: {text};
  --color-border: {border};
  --color-thumb: {thumb};
  --color-caption: {caption};
}}
@media (max-width: 900px) {{
  :root {{ --tile-size: {medium}px; }}
}}
@media (max-width: 600px) {{
  :root {{ --tile-size: {small}px; }}
}}"#,
        size = t.size,
        medium = t.medium,
        small = t.small,
        bg = c.background,
        text = c.text,
        border = c.border,
        thumb = c.thumb,
        caption = c.caption,
    )
}
