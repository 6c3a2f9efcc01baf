//! One-call pipeline: discover every section, then splice them in order.

use crate::error::Result;
use crate::marker::MarkerPatterns;
use crate::parser::{Section, enforce_unique, find_sections};
use crate::splicer::{SourceLoader, replace_sections};

/// Options for [`sync_document`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Treat a section name opened more than once as an error instead of a warning.
    pub strict: bool,
}

/// Result of syncing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// The rewritten document.
    pub text: String,
    /// Sections found in the original document, in document order.
    pub sections: Vec<Section>,
    /// Whether `text` differs from the input.
    pub changed: bool,
}

/// Finds all sections in `content` and replaces their bodies from `loader`.
///
/// Discovery runs once over the original text before any splice, so a
/// replacement never affects which sections are found.
///
/// # Errors
/// Any error from [`find_sections`] or [`replace_sections`], and
/// `Error::DuplicateSection` when `options.strict` is set and a name repeats.
pub fn sync_document(
    content: &str,
    patterns: &MarkerPatterns,
    loader: &dyn SourceLoader,
    options: SyncOptions,
    observer: Option<&mut dyn FnMut(&Section)>,
) -> Result<SyncOutcome> {
    let sections = find_sections(content, patterns)?;

    enforce_unique(&sections, options.strict)?;

    let text = replace_sections(content, &sections, loader, observer)?;
    let changed = text != content;

    Ok(SyncOutcome {
        text,
        sections,
        changed,
    })
}
