//! List command: print discovered sections as JSON

use std::io::Write;
use std::path::Path;

use sect_blocks::{enforce_unique, find_sections};
use sect_fs::io::read_text;

use crate::error::Result;
use crate::settings::Settings;

/// Print every section in the document at `path` without splicing.
pub fn run_list(path: &Path, settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let content = read_text(path)?;
    let sections = find_sections(&content, &settings.patterns)?;

    enforce_unique(&sections, settings.options.strict)?;

    writeln!(out, "{}", serde_json::to_string_pretty(&sections)?)?;
    Ok(())
}
