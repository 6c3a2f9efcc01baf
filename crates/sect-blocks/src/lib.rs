//! Section discovery and splicing for sect.
//!
//! A document marks sections with begin/end lines carrying a name and an
//! optional source file:
//!
//! ```text
//! <!-- BEGIN SECTION install file=snippets/install.sh -->
//! anything here is replaced
//! <!-- END SECTION install -->
//! ```
//!
//! [`find_sections`] pairs the markers, [`replace_sections`] swaps each body
//! for the trimmed source file contents, and [`sync_document`] runs both.
//! Marker prefixes are configurable through [`MarkerPatterns`].

pub mod error;
pub mod marker;
pub mod parser;
pub mod splicer;
pub mod sync;

pub use error::{Error, Result};
pub use marker::{DEFAULT_BEGIN, DEFAULT_END, MarkerPatterns};
pub use parser::{Section, check_unique, enforce_unique, find_sections};
pub use splicer::{SourceLoader, replace_sections};
pub use sync::{SyncOptions, SyncOutcome, sync_document};
