//! Error types for sect-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no end marker for section {name}")]
    UnmatchedSection { name: String },

    #[error("section {name} has no file= source")]
    MissingSource { name: String },

    #[error("failed to read {path} for section {name}: {source}")]
    SourceRead {
        name: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed begin marker for section {name}: {reason}")]
    MalformedMarker { name: String, reason: &'static str },

    #[error("section {name} is opened {count} times")]
    DuplicateSection { name: String, count: usize },

    #[error("section {second} starts inside section {first}")]
    OverlappingSections { first: String, second: String },

    #[error("{which} marker prefix must not be empty")]
    EmptyPrefix { which: &'static str },

    #[error("invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    pub fn source_read(
        name: impl Into<String>,
        path: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::SourceRead {
            name: name.into(),
            path: path.into(),
            source,
        }
    }
}
