//! Effective settings: command-line flags over config file over defaults

use std::path::Path;

use sect_blocks::{DEFAULT_BEGIN, DEFAULT_END, MarkerPatterns, SyncOptions};
use sect_fs::{FsSourceLoader, SectConfig};

use crate::cli::Cli;
use crate::error::Result;

/// Everything a command needs besides the document itself.
#[derive(Debug)]
pub struct Settings {
    pub patterns: MarkerPatterns,
    pub options: SyncOptions,
    pub loader: FsSourceLoader,
}

/// Load the config named by `--config`, or discover one in `cwd`.
pub fn load_config(cli: &Cli, cwd: &Path) -> Result<SectConfig> {
    match &cli.config {
        Some(path) => Ok(SectConfig::load(&cwd.join(path))?),
        None => Ok(SectConfig::discover(cwd)?.unwrap_or_default()),
    }
}

impl Settings {
    /// Merge flags and config. Relative paths resolve against `cwd`.
    pub fn resolve(cli: &Cli, config: SectConfig, cwd: &Path) -> Result<Self> {
        let begin = cli
            .begin
            .as_deref()
            .or(config.begin.as_deref())
            .unwrap_or(DEFAULT_BEGIN);
        let end = cli
            .end
            .as_deref()
            .or(config.end.as_deref())
            .unwrap_or(DEFAULT_END);
        let patterns = MarkerPatterns::new(begin, end)?;

        let options = SyncOptions {
            strict: cli.strict || config.strict.unwrap_or(false),
        };

        let base_dir = cli
            .base_dir
            .as_ref()
            .or(config.base_dir.as_ref())
            .map_or_else(|| cwd.to_path_buf(), |dir| cwd.join(dir));

        tracing::debug!(
            begin,
            end,
            strict = options.strict,
            base_dir = %base_dir.display(),
            "resolved settings"
        );

        Ok(Self {
            patterns,
            options,
            loader: FsSourceLoader::with_base_dir(base_dir),
        })
    }
}
