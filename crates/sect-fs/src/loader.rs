//! Source file loading from disk

use sect_blocks::SourceLoader;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads section sources from the filesystem.
///
/// Relative `file=` paths resolve against `base_dir` when set, otherwise
/// against the process working directory. Absolute paths are used as-is.
#[derive(Debug, Clone, Default)]
pub struct FsSourceLoader {
    base_dir: Option<PathBuf>,
}

impl FsSourceLoader {
    /// Loader resolving relative paths against the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader resolving relative paths against `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// The path a `file=` reference resolves to.
    pub fn resolve(&self, path: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(path),
            None => Path::new(path).to_path_buf(),
        }
    }
}

impl SourceLoader for FsSourceLoader {
    fn load(&self, path: &str) -> io::Result<String> {
        let resolved = self.resolve(path);
        tracing::trace!(path, resolved = %resolved.display(), "loading section source");
        fs::read_to_string(resolved)
    }
}
