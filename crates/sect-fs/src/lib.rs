//! Filesystem access for sect
//!
//! Reads documents and section sources, writes results atomically, and loads
//! the optional `sect.toml` configuration.

pub mod config;
pub mod error;
pub mod io;
pub mod loader;

pub use config::{CONFIG_FILES, SectConfig};
pub use error::{Error, Result};
pub use loader::FsSourceLoader;
