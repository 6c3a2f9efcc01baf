//! Section splicing.
//!
//! Replaces the body of each section (the lines strictly between its begin and
//! end marker lines) with the trimmed contents of its source file:
//! ```text
//! <!-- BEGIN SECTION usage file=docs/usage.md -->
//!
//! trimmed contents of docs/usage.md
//!
//! <!-- END SECTION usage -->
//! ```
//!
//! Section offsets refer to the original text. Each splice changes the length
//! of the document, so the running difference is carried forward and added to
//! the offsets of every later section.

use crate::error::{Error, Result};
use crate::parser::Section;
use std::io;

/// Loads the contents of a section's source file.
pub trait SourceLoader {
    /// Read the full text of `path`.
    fn load(&self, path: &str) -> io::Result<String>;
}

impl<F> SourceLoader for F
where
    F: Fn(&str) -> io::Result<String>,
{
    fn load(&self, path: &str) -> io::Result<String> {
        self(path)
    }
}

/// Replaces every section body in `content`, processing sections in order.
///
/// `observer` is called once per section, after its source has been loaded
/// and before it is spliced.
///
/// # Errors
/// - `Error::MissingSource` if a section has no `file=` reference
/// - `Error::SourceRead` if the loader fails
/// - `Error::MalformedMarker` if a begin marker's line has no line break, or
///   the end marker shares the begin marker's line
/// - `Error::OverlappingSections` if a section starts before the previous one ends
///
/// No partial result is returned on error.
///
/// # Example
/// ```
/// use sect_blocks::{MarkerPatterns, find_sections, replace_sections};
///
/// let content = "BEGIN SECTION a file=a.txt\nold\nEND SECTION a";
/// let sections = find_sections(content, &MarkerPatterns::default()).unwrap();
/// let loader = |_: &str| Ok::<_, std::io::Error>(" new ".to_string());
/// let result = replace_sections(content, &sections, &loader, None).unwrap();
/// assert_eq!(result, "BEGIN SECTION a file=a.txt\n\nnew\n\nEND SECTION a");
/// ```
pub fn replace_sections(
    content: &str,
    sections: &[Section],
    loader: &dyn SourceLoader,
    mut observer: Option<&mut dyn FnMut(&Section)>,
) -> Result<String> {
    let mut previous: Option<&Section> = None;

    let (text, _) = sections.iter().try_fold(
        (content.to_string(), 0isize),
        |(text, offset), section| {
            if let Some(prev) = previous {
                if section.start < prev.end {
                    return Err(Error::OverlappingSections {
                        first: prev.name.clone(),
                        second: section.name.clone(),
                    });
                }
            }
            previous = Some(section);

            let path = section
                .source
                .as_deref()
                .filter(|path| !path.is_empty())
                .ok_or_else(|| Error::MissingSource {
                    name: section.name.clone(),
                })?;

            let raw = loader
                .load(path)
                .map_err(|e| Error::source_read(&section.name, path, e))?;

            if let Some(observe) = observer.as_deref_mut() {
                observe(section);
            }
            tracing::trace!(section = %section.name, source = path, "splicing section");

            splice(text, offset, section, raw.trim())
        },
    )?;

    Ok(text)
}

/// Splices one section body, returning the new text and the updated offset.
fn splice(
    text: String,
    offset: isize,
    section: &Section,
    block: &str,
) -> Result<(String, isize)> {
    let malformed = |reason| Error::MalformedMarker {
        name: section.name.clone(),
        reason,
    };

    let begin = section
        .start
        .checked_add_signed(offset)
        .ok_or_else(|| malformed("marker offset out of range"))?;
    let end = section
        .end
        .checked_add_signed(offset)
        .ok_or_else(|| malformed("marker offset out of range"))?;

    // Body starts right after the begin line's newline.
    let body_start = text
        .get(begin..)
        .and_then(|rest| rest.find('\n'))
        .map(|i| begin + i + 1)
        .ok_or_else(|| malformed("no line break after begin marker"))?;

    // Body ends where the end marker's line starts.
    let body_end = text
        .get(..end)
        .ok_or_else(|| malformed("marker offset out of range"))?
        .rfind('\n')
        .map_or(0, |i| i + 1);

    if body_end < body_start {
        return Err(malformed("end marker is on the begin marker line"));
    }

    let mut out = String::with_capacity(text.len() - (body_end - body_start) + block.len() + 3);
    out.push_str(&text[..body_start]);
    out.push('\n');
    out.push_str(block);
    out.push_str("\n\n");
    out.push_str(&text[body_end..]);

    let delta = out.len() as isize - text.len() as isize;
    Ok((out, offset + delta))
}
