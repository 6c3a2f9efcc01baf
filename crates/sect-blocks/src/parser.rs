//! Section discovery.
//!
//! Finds every begin marker in a document and pairs it with the first later
//! end marker carrying the same name:
//! ```text
//! <!-- BEGIN SECTION usage file=docs/usage.md -->
//! stale content
//! <!-- END SECTION usage -->
//! ```
//!
//! Pairing is a forward search, not a stack. Sections do not nest, and the
//! nearest same-named end marker always wins even when an unrelated section
//! sits in between.

use crate::error::{Error, Result};
use crate::marker::MarkerPatterns;
use serde::Serialize;
use std::collections::BTreeMap;

/// A section found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// The section name from the begin marker.
    pub name: String,
    /// Byte offset where the begin marker match starts, in the original text.
    pub start: usize,
    /// Byte offset where the paired end marker match starts, in the original text.
    pub end: usize,
    /// The `file=` reference, if the begin marker has one.
    pub source: Option<String>,
}

struct EndMarker<'a> {
    name: &'a str,
    start: usize,
}

/// Finds all sections in `content`, in the order their begin markers appear.
///
/// # Errors
/// Returns `Error::UnmatchedSection` if a begin marker has no end marker of the
/// same name starting after it.
///
/// # Example
/// ```
/// use sect_blocks::{MarkerPatterns, find_sections};
///
/// let content = "<!-- BEGIN SECTION intro file=intro.md -->\nold\n<!-- END SECTION intro -->";
/// let sections = find_sections(content, &MarkerPatterns::default()).unwrap();
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].name, "intro");
/// assert_eq!(sections[0].source.as_deref(), Some("intro.md"));
/// ```
pub fn find_sections(content: &str, patterns: &MarkerPatterns) -> Result<Vec<Section>> {
    let ends: Vec<EndMarker<'_>> = patterns
        .end()
        .captures_iter(content)
        .filter_map(|caps| {
            Some(EndMarker {
                name: caps.get(1)?.as_str(),
                start: caps.get(0)?.start(),
            })
        })
        .collect();

    let mut sections = Vec::new();

    for caps in patterns.begin().captures_iter(content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str();

        let end = ends
            .iter()
            .find(|e| e.name == name && e.start > whole.end())
            .ok_or_else(|| Error::UnmatchedSection {
                name: name.to_string(),
            })?;

        let source = caps.get(2).map(|m| m.as_str().to_string());
        tracing::debug!(
            section = name,
            start = whole.start(),
            end = end.start,
            ?source,
            "found section"
        );

        sections.push(Section {
            name: name.to_string(),
            start: whole.start(),
            end: end.start,
            source,
        });
    }

    Ok(sections)
}

/// Checks that no section name is opened more than once.
///
/// Forward pairing binds every begin marker to the nearest later end marker of
/// the same name, so repeated names can pair with the wrong partner.
///
/// # Errors
/// Returns `Error::DuplicateSection` for the first repeated name, in name order.
pub fn check_unique(sections: &[Section]) -> Result<()> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for section in sections {
        *counts.entry(section.name.as_str()).or_default() += 1;
    }

    match counts.into_iter().find(|(_, count)| *count > 1) {
        Some((name, count)) => Err(Error::DuplicateSection {
            name: name.to_string(),
            count,
        }),
        None => Ok(()),
    }
}

/// Runs [`check_unique`], downgrading a repeated name to a warning unless
/// `strict` is set.
///
/// # Errors
/// Returns `Error::DuplicateSection` only when `strict` is set.
pub fn enforce_unique(sections: &[Section], strict: bool) -> Result<()> {
    match check_unique(sections) {
        Err(Error::DuplicateSection { name, count }) if !strict => {
            tracing::warn!(
                section = %name,
                count,
                "section name is not unique; pairing may be wrong"
            );
            Ok(())
        }
        other => other,
    }
}
