//! Command implementations for sect-cli

pub mod list;
pub mod sync;

use std::io::Write;
use std::path::Path;

use crate::cli::{Cli, Mode};
use crate::error::Result;
use crate::settings::{self, Settings};

pub use list::run_list;
pub use sync::run_sync;

/// Run whatever `cli` asks for, resolving relative paths against `cwd`.
pub fn execute(cli: &Cli, cwd: &Path, out: &mut dyn Write) -> Result<()> {
    let config = settings::load_config(cli, cwd)?;
    let settings = Settings::resolve(cli, config, cwd)?;
    let path = cwd.join(&cli.file);

    match cli.mode() {
        Mode::List => run_list(&path, &settings, out),
        mode => run_sync(&path, &settings, mode, cli.verbose, out),
    }
}
