//! Optional `sect.toml` configuration
//!
//! ```toml
//! begin = "<!-- BEGIN SECTION"
//! end = "<!-- END SECTION"
//! strict = true
//! base_dir = "snippets"
//! ```
//!
//! Every key is optional. A relative `base_dir` is taken relative to the
//! directory holding the config file.

use crate::{Error, Result, io};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File names searched by [`SectConfig::discover`], in order.
pub const CONFIG_FILES: &[&str] = &["sect.toml", ".sect.toml"];

/// Settings read from a config file. Unset keys fall back to command-line
/// flags or built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectConfig {
    /// Begin marker prefix.
    pub begin: Option<String>,
    /// End marker prefix.
    pub end: Option<String>,
    /// Reject repeated section names.
    pub strict: Option<bool>,
    /// Directory that relative `file=` references resolve against.
    pub base_dir: Option<PathBuf>,
}

impl SectConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = io::read_text(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if let (Some(base), Some(parent)) = (&config.base_dir, path.parent()) {
            if base.is_relative() {
                config.base_dir = Some(parent.join(base));
            }
        }

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load the first of [`CONFIG_FILES`] present in `dir`, if any.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        for name in CONFIG_FILES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Self::load(&candidate).map(Some);
            }
        }
        Ok(None)
    }
}
