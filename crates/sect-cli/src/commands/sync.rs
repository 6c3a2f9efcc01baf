//! Sync command: rewrite, print, or check a document
//!
//! All three modes run the same splice; they differ only in what happens to
//! the result.

use std::io::Write;
use std::path::Path;

use colored::Colorize;

use sect_blocks::{Section, sync_document};
use sect_fs::io::{read_text, write_text};

use crate::cli::Mode;
use crate::error::{CliError, Result};
use crate::settings::Settings;

/// Sync the document at `path`.
///
/// - `Mode::Write` rewrites the file when its text changed.
/// - `Mode::Stdout` prints the result and leaves the file alone.
/// - `Mode::Check` fails when the file is out of date.
///
/// With `verbose`, every spliced section is reported on stderr.
pub fn run_sync(
    path: &Path,
    settings: &Settings,
    mode: Mode,
    verbose: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let content = read_text(path)?;

    let mut report = |section: &Section| {
        eprintln!(
            "[sect] section={} source={}",
            section.name,
            section.source.as_deref().unwrap_or_default()
        );
    };
    let observer: Option<&mut dyn FnMut(&Section)> = if verbose {
        Some(&mut report)
    } else {
        None
    };

    let outcome = sync_document(
        &content,
        &settings.patterns,
        &settings.loader,
        settings.options,
        observer,
    )?;
    let count = outcome.sections.len();

    match mode {
        Mode::Stdout => {
            out.write_all(outcome.text.as_bytes())?;
        }
        Mode::Check if outcome.changed => {
            return Err(CliError::user(format!(
                "{} is out of date ({} sections)",
                path.display(),
                count
            )));
        }
        _ if !outcome.changed => {
            writeln!(
                out,
                "{} {} is up to date ({} sections)",
                "OK".green().bold(),
                path.display(),
                count
            )?;
        }
        _ => {
            write_text(path, &outcome.text)?;
            tracing::info!(path = %path.display(), sections = count, "rewrote document");
            writeln!(
                out,
                "{} Updated {} ({} sections)",
                "=>".blue().bold(),
                path.display(),
                count
            )?;
        }
    }

    Ok(())
}
