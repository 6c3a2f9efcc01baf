//! [`TestDoc`] builder for section-sync test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a document and the files its sections
/// pull from.
///
/// # Example
///
/// ```rust,no_run
/// use sect_test_utils::TestDoc;
///
/// let doc = TestDoc::new();
/// doc.write("snippets/usage.md", "Run it.\n");
/// doc.write(
///     "README.md",
///     "BEGIN SECTION usage file=snippets/usage.md\nEND SECTION usage\n",
/// );
/// doc.assert_file_contains("README.md", "BEGIN SECTION usage");
/// ```
pub struct TestDoc {
    temp_dir: TempDir,
}

impl Default for TestDoc {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDoc {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `path` (relative to root).
    pub fn path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }

    /// Write `content` to `path` (relative to root), creating parent
    /// directories as needed. Returns the absolute path.
    pub fn write(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Copy every file under `dir` into the root, keeping relative paths.
    pub fn copy_tree(&self, dir: &Path) {
        copy_dir(dir, self.root());
    }

    /// Read `path` (relative to root).
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.path(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            self.path(path).display(),
            content,
            file_content
        );
    }

    /// Assert that the file at `path` (relative to root) is exactly `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or differs from `content`.
    pub fn assert_file_eq(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content == content,
            "File {} differs.\nExpected: {:?}\nActual: {:?}",
            self.path(path).display(),
            content,
            file_content
        );
    }
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}
