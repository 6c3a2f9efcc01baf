//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Keep marked sections of a document in sync with their source files
///
/// A section is delimited by marker lines:
///
///   <!-- BEGIN SECTION usage file=docs/usage.md -->
///   ...replaced with the trimmed contents of docs/usage.md...
///   <!-- END SECTION usage -->
#[derive(Parser, Debug)]
#[command(name = "sect")]
#[command(author, version, verbatim_doc_comment)]
pub struct Cli {
    /// Document to process
    #[arg(short, long, value_name = "PATH")]
    pub file: PathBuf,

    /// Begin marker prefix [default: "BEGIN SECTION"]
    #[arg(long, value_name = "PREFIX")]
    pub begin: Option<String>,

    /// End marker prefix [default: "END SECTION"]
    #[arg(long, value_name = "PREFIX")]
    pub end: Option<String>,

    /// Print the result instead of rewriting the file
    #[arg(long, conflicts_with_all = ["check", "list"])]
    pub stdout: bool,

    /// Fail if the file is out of date; write nothing
    #[arg(long, conflicts_with = "list")]
    pub check: bool,

    /// Print discovered sections as JSON; splice nothing
    #[arg(long)]
    pub list: bool,

    /// Treat repeated section names as an error
    #[arg(long)]
    pub strict: bool,

    /// Resolve relative file= paths against this directory
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Config file [default: sect.toml or .sect.toml in the working directory]
    #[arg(long, value_name = "PATH", env = "SECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// What to do with the rewritten document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rewrite the file in place when it changed.
    Write,
    /// Print the result to stdout.
    Stdout,
    /// Report drift without writing.
    Check,
    /// Print the section listing.
    List,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.list {
            Mode::List
        } else if self.check {
            Mode::Check
        } else if self.stdout {
            Mode::Stdout
        } else {
            Mode::Write
        }
    }
}
