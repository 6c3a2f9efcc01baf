//! CLI end-to-end tests that invoke the compiled `sect` binary.
//!
//! These tests use `env!("CARGO_BIN_EXE_sect")` to locate the binary and
//! `std::process::Command` to run it against temporary directories.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use sect_test_utils::TestDoc;

const README: &str = "\
# Project

<!-- BEGIN SECTION usage file=snippets/usage.txt -->
stale
<!-- END SECTION usage -->

Footer
";

const SYNCED: &str = "\
# Project

<!-- BEGIN SECTION usage file=snippets/usage.txt -->

sect -f README.md

<!-- END SECTION usage -->

Footer
";

/// Returns the path to the compiled `sect` binary.
fn sect_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sect"))
}

/// Run `sect` with the given args in the given directory.
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(sect_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("SECT_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to execute sect binary")
}

fn project() -> TestDoc {
    let doc = TestDoc::new();
    doc.write("snippets/usage.txt", "\n  sect -f README.md  \n\n");
    doc.write("README.md", README);
    doc
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn test_help_exits_zero() {
    let out = Command::new(sect_bin())
        .arg("--help")
        .output()
        .expect("failed to run sect --help");

    assert!(out.status.success(), "sect --help should exit 0");
    let text = stdout(&out);
    assert!(text.contains("--file"), "help should mention --file:\n{text}");
    assert!(text.contains("BEGIN SECTION"), "help should show markers:\n{text}");
}

#[test]
fn test_version_exits_zero() {
    let out = Command::new(sect_bin())
        .arg("--version")
        .output()
        .expect("failed to run sect --version");

    assert!(out.status.success());
    assert!(stdout(&out).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_file_flag_fails() {
    let doc = TestDoc::new();
    let out = run(doc.root(), &[]);
    assert!(!out.status.success());
}

#[test]
fn test_rewrites_file_in_place() {
    let doc = project();

    let out = run(doc.root(), &["-f", "README.md"]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(doc.read("README.md"), SYNCED);
    assert!(stdout(&out).contains("Updated"));
}

#[test]
fn test_second_run_reports_up_to_date() {
    let doc = project();
    run(doc.root(), &["-f", "README.md"]);

    let out = run(doc.root(), &["-f", "README.md"]);

    assert!(out.status.success());
    assert!(stdout(&out).contains("up to date"));
    assert_eq!(doc.read("README.md"), SYNCED);
}

#[test]
fn test_stdout_prints_without_writing() {
    let doc = project();

    let out = run(doc.root(), &["-f", "README.md", "--stdout"]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), SYNCED);
    assert_eq!(doc.read("README.md"), README);
}

#[test]
fn test_check_exits_nonzero_on_drift() {
    let doc = project();

    let out = run(doc.root(), &["-f", "README.md", "--check"]);

    assert!(!out.status.success());
    assert!(stderr(&out).contains("out of date"), "stderr: {}", stderr(&out));
    assert_eq!(doc.read("README.md"), README);

    run(doc.root(), &["-f", "README.md"]);
    let out = run(doc.root(), &["-f", "README.md", "--check"]);
    assert!(out.status.success());
}

#[test]
fn test_list_prints_json() {
    let doc = project();

    let out = run(doc.root(), &["-f", "README.md", "--list"]);

    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json[0]["name"], "usage");
    assert_eq!(json[0]["source"], "snippets/usage.txt");
}

#[test]
fn test_verbose_reports_each_section_once() {
    let doc = project();

    let out = run(doc.root(), &["-f", "README.md", "--stdout", "-v"]);

    assert!(out.status.success());
    let err = stderr(&out);
    assert!(
        err.contains("[sect] section=usage source=snippets/usage.txt"),
        "stderr: {err}"
    );
    assert_eq!(
        err.matches("source=snippets/usage.txt").count(),
        1,
        "stderr: {err}"
    );
    assert_eq!(stdout(&out), SYNCED);
}

#[test]
fn test_custom_prefixes() {
    let doc = TestDoc::new();
    doc.write("v.txt", "1.2.3");
    doc.write("Makefile", "# START version file=v.txt\nVERSION=old\n# STOP version\n");

    let out = run(
        doc.root(),
        &["-f", "Makefile", "--begin", "# START", "--end", "# STOP"],
    );

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(
        doc.read("Makefile"),
        "# START version file=v.txt\n\n1.2.3\n\n# STOP version\n"
    );
}

#[test]
fn test_missing_source_fails_and_keeps_file() {
    let doc = TestDoc::new();
    let original = "BEGIN SECTION a file=nope.txt\nbody\nEND SECTION a\n";
    doc.write("doc.md", original);

    let out = run(doc.root(), &["-f", "doc.md"]);

    assert!(!out.status.success());
    let err = stderr(&out);
    assert!(err.contains("error"), "stderr: {err}");
    assert!(err.contains("nope.txt"), "stderr: {err}");
    assert_eq!(doc.read("doc.md"), original);
}

#[test]
fn test_unmatched_section_fails() {
    let doc = TestDoc::new();
    doc.write("doc.md", "BEGIN SECTION lonely file=x.txt\nbody\n");

    let out = run(doc.root(), &["-f", "doc.md"]);

    assert!(!out.status.success());
    assert!(stderr(&out).contains("lonely"));
}

#[test]
fn test_config_file_supplies_prefixes_and_base_dir() {
    let doc = TestDoc::new();
    doc.write(
        "sect.toml",
        "begin = \"@@ open\"\nend = \"@@ close\"\nbase_dir = \"parts\"\n",
    );
    doc.write("parts/intro.txt", "Hello");
    doc.write("doc.txt", "@@ open intro file=intro.txt\n@@ close intro\n");

    let out = run(doc.root(), &["-f", "doc.txt"]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(
        doc.read("doc.txt"),
        "@@ open intro file=intro.txt\n\nHello\n\n@@ close intro\n"
    );
}

#[test]
fn test_strict_flag_rejects_duplicate_names() {
    let doc = TestDoc::new();
    doc.write("a.txt", "A");
    doc.write(
        "doc.md",
        "BEGIN SECTION a file=a.txt\nEND SECTION a\nBEGIN SECTION a file=a.txt\nEND SECTION a\n",
    );

    let out = run(doc.root(), &["-f", "doc.md", "--strict", "--check"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("opened 2 times"), "stderr: {}", stderr(&out));

    let out = run(doc.root(), &["-f", "doc.md"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
}
