//! Cross-crate tests: discovery and splicing over real files on disk.
//!
//! Fixtures live in `test-fixtures/` at the workspace root and are copied
//! into a temporary directory before each test so the originals stay intact.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use sect_blocks::{Error, MarkerPatterns, SyncOptions, sync_document};
use sect_fs::io::{read_text, write_text};
use sect_fs::{FsSourceLoader, SectConfig};
use sect_test_utils::TestDoc;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

fn docs_project() -> TestDoc {
    let doc = TestDoc::new();
    doc.copy_tree(&fixtures().join("docs"));
    doc
}

fn sync_file(doc: &TestDoc, path: &str, loader: &FsSourceLoader) -> sect_blocks::Result<bool> {
    let full_path = doc.path(path);
    let content = read_text(&full_path).unwrap();
    let outcome = sync_document(
        &content,
        &MarkerPatterns::default(),
        loader,
        SyncOptions::default(),
        None,
    )?;
    if outcome.changed {
        write_text(&full_path, &outcome.text).unwrap();
    }
    Ok(outcome.changed)
}

#[test]
fn test_readme_fixture_matches_expected() {
    let doc = docs_project();
    let loader = FsSourceLoader::with_base_dir(doc.root());

    assert!(sync_file(&doc, "README.md", &loader).unwrap());

    let expected = read_text(&fixtures().join("expected/README.md")).unwrap();
    assert_eq!(doc.read("README.md"), expected);
}

#[test]
fn test_resync_is_a_no_op() {
    let doc = docs_project();
    let loader = FsSourceLoader::with_base_dir(doc.root());

    sync_file(&doc, "README.md", &loader).unwrap();
    let first = doc.read("README.md");

    assert!(!sync_file(&doc, "README.md", &loader).unwrap());
    assert_eq!(doc.read("README.md"), first);
}

#[test]
fn test_source_edit_propagates() {
    let doc = docs_project();
    let loader = FsSourceLoader::with_base_dir(doc.root());
    sync_file(&doc, "README.md", &loader).unwrap();

    doc.write("snippets/install.sh", "brew install widget\n");
    assert!(sync_file(&doc, "README.md", &loader).unwrap());

    doc.assert_file_contains(
        "README.md",
        "install.sh -->\n\nbrew install widget\n\n<!-- END SECTION install -->",
    );
    doc.assert_file_contains("README.md", "Call `widget run` in a project directory.");
}

#[test]
fn test_missing_source_file_leaves_document_untouched() {
    let doc = docs_project();
    std::fs::remove_file(doc.path("snippets/usage.md")).unwrap();
    let before = doc.read("README.md");

    let loader = FsSourceLoader::with_base_dir(doc.root());
    let err = sync_file(&doc, "README.md", &loader).unwrap_err();

    match err {
        Error::SourceRead { name, path, .. } => {
            assert_eq!(name, "usage");
            assert_eq!(path, "snippets/usage.md");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(doc.read("README.md"), before);
}

#[test]
fn test_config_base_dir_drives_loader() {
    let doc = TestDoc::new();
    doc.write("site/sect.toml", "base_dir = \"../shared\"\nstrict = true\n");
    doc.write("shared/footer.html", "<footer>hi</footer>\n");
    doc.write(
        "site/index.html",
        "<body>\n<!-- BEGIN SECTION footer file=footer.html -->\n<!-- END SECTION footer -->\n</body>\n",
    );

    let config = SectConfig::discover(&doc.path("site")).unwrap().unwrap();
    let base_dir = config.base_dir.clone().unwrap();
    let loader = FsSourceLoader::with_base_dir(base_dir);

    let content = doc.read("site/index.html");
    let outcome = sync_document(
        &content,
        &MarkerPatterns::default(),
        &loader,
        SyncOptions {
            strict: config.strict.unwrap_or_default(),
        },
        None,
    )
    .unwrap();

    assert_eq!(
        outcome.text,
        "<body>\n<!-- BEGIN SECTION footer file=footer.html -->\n\n<footer>hi</footer>\n\n<!-- END SECTION footer -->\n</body>\n"
    );
}
