//! Begin/end marker patterns built from configurable prefixes.
//!
//! Markers have the form:
//! ```text
//! <begin-prefix> NAME[ file=PATH]
//! ...
//! <end-prefix> NAME
//! ```
//!
//! The prefix may appear anywhere on its line, so with the default prefixes a
//! marker can sit inside an HTML comment such as `<!-- BEGIN SECTION x -->`.

use crate::error::{Error, Result};
use regex::Regex;

/// Default prefix opening a section.
pub const DEFAULT_BEGIN: &str = "BEGIN SECTION";

/// Default prefix closing a section.
pub const DEFAULT_END: &str = "END SECTION";

/// Section names: ASCII letters, digits, hyphens and underscores.
const NAME_PATTERN: &str = "([A-Za-z0-9_-]+)";

/// `file=` reference; stops at a space, a line break or `>` so a trailing `-->`
/// is not absorbed.
const FILE_PATTERN: &str = r"(?: file=([^ \r\n>]+))?";

/// Compiled begin and end matchers for one pair of prefixes.
#[derive(Debug, Clone)]
pub struct MarkerPatterns {
    begin: Regex,
    end: Regex,
}

impl MarkerPatterns {
    /// Compile matchers for the given prefixes.
    ///
    /// Prefixes are matched literally; regex metacharacters in them are escaped.
    ///
    /// # Errors
    /// Returns `Error::EmptyPrefix` if either prefix is blank.
    ///
    /// # Example
    /// ```
    /// use sect_blocks::MarkerPatterns;
    ///
    /// let patterns = MarkerPatterns::new("# START", "# STOP").unwrap();
    /// assert!(patterns.begin().is_match("# START intro file=intro.md"));
    /// assert!(patterns.end().is_match("# STOP intro"));
    /// ```
    pub fn new(begin: &str, end: &str) -> Result<Self> {
        if begin.trim().is_empty() {
            return Err(Error::EmptyPrefix { which: "begin" });
        }
        if end.trim().is_empty() {
            return Err(Error::EmptyPrefix { which: "end" });
        }

        let begin = Regex::new(&format!(
            "(?m){} {NAME_PATTERN}{FILE_PATTERN}",
            regex::escape(begin)
        ))?;
        let end = Regex::new(&format!("(?m){} {NAME_PATTERN}", regex::escape(end)))?;

        Ok(Self { begin, end })
    }

    /// Matcher for begin markers. Group 1 is the name, group 2 the optional file.
    pub fn begin(&self) -> &Regex {
        &self.begin
    }

    /// Matcher for end markers. Group 1 is the name.
    pub fn end(&self) -> &Regex {
        &self.end
    }
}

impl Default for MarkerPatterns {
    fn default() -> Self {
        Self::new(DEFAULT_BEGIN, DEFAULT_END).expect("default marker prefixes are valid")
    }
}
