//! Glob pattern compilation.
//!
//! Patterns use two wildcards:
//!
//! - `*` matches any run of characters, including none and including `/`
//! - `?` matches exactly one character
//!
//! Every other character is literal. The glob is translated once into an
//! anchored, case-insensitive [`Regex`] and then tested against
//! forward-slash relative paths such as `icons/arrow.svg`.
//!
//! ```text
//! *.svg        matches  a.svg, B.SVG, sub/c.svg
//! icon-?.svg   matches  icon-1.svg, icon-A.svg
//! ```
//!
//! An empty pattern compiles to `^$` and therefore only matches the empty
//! path. Nothing filters on that today; it is kept as-is.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// A compiled glob, matched against root-relative paths.
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    glob: String,
    regex: Regex,
}

impl GlobMatcher {
    pub fn new(glob: &str) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(&glob_to_regex(glob))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            glob: glob.to_string(),
            regex,
        })
    }

    /// Test a relative path. Separators must already be `/`.
    pub fn is_match(&self, relative_path: &str) -> bool {
        self.regex.is_match(relative_path)
    }

    pub fn as_str(&self) -> &str {
        &self.glob
    }
}

/// Translate a glob into anchored regex source.
fn glob_to_regex(glob: &str) -> String {
    let mut source = String::with_capacity(glob.len() + 8);
    source.push('^');
    for c in glob.chars() {
        match c {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            _ => source.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    source.push('$');
    source
}
