//! sect command-line interface
//!
//! Keeps marked sections of a document in sync with their source files.

mod cli;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logging is best-effort
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: logging unavailable: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!(?cli, "parsed arguments");

    let cwd = std::env::current_dir()?;
    let stdout = std::io::stdout();
    commands::execute(&cli, &cwd, &mut stdout.lock())
}
