//! Crate-wide error type.
//!
//! Any I/O or archive failure is fatal to the whole run: the aggregator
//! never skips a file and no partial report is written.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all aplint operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O operation on a concrete path failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The package archive could not be opened or extracted.
    #[error("invalid archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// Directory traversal failed under the extracted root.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// The embedded scanner rule table is not valid TOML.
    #[error("invalid rule definitions: {0}")]
    Rules(#[from] toml::de::Error),

    /// A scanner rule carries a pattern that does not compile.
    #[error("invalid pattern in rule '{id}': {source}")]
    Pattern {
        id: String,
        #[source]
        source: regex::Error,
    },

    /// Report serialization failed.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Attach a path to a raw `std::io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
