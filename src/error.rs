//! Error types for writedocx library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for writedocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while formatting and writing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Content is empty or blank after cleaning (strict mode only).
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The output location could not be created or written.
    #[error("Storage error at {}: {source}", path.display())]
    Storage {
        /// Path that was being created or written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The output filename is not a single, valid path component.
    #[error("Invalid output filename: {0:?}")]
    InvalidFilename(String),

    /// A batch names the same output file more than once.
    #[error("Duplicate output filename in batch: {0:?}")]
    DuplicateFilename(String),

    /// No document writer is registered for the requested format.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// No stored content exists for the given identifier (or it expired).
    #[error("Content not found: {0}")]
    ContentNotFound(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error while serializing a rendered document.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build a storage error for `path`.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Storage {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from the storage layer.
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage { .. })
    }
}
