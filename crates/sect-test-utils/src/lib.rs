//! Shared test utilities for the sect workspace.
//!
//! A dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`doc`] - [`TestDoc`] builder for a document plus its section sources

pub mod doc;

pub use doc::TestDoc;
