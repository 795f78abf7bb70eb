//! Error types for wordcheck.
//!
//! All fallible operations return [`WordcheckError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use wordcheck::error::{Result, WordcheckError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordcheckError::invalid_config("table size must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for wordcheck operations.
#[derive(Error, Debug)]
pub enum WordcheckError {
    /// I/O errors that are not tied to opening a source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A dictionary or text source is missing or unreadable.
    #[error("Cannot read source {}: {source}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Removal of a word that the index does not hold.
    #[error("Word not present: {0}")]
    WordNotPresent(String),

    /// Invalid configuration values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A structural invariant of the word index does not hold.
    #[error("Invariant violated: {0}")]
    Invariant(String),

    /// Delimiter pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordcheckError.
pub type Result<T> = std::result::Result<T, WordcheckError>;

impl WordcheckError {
    /// Wrap an I/O failure on the source at `path`.
    pub fn source_not_found<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        WordcheckError::SourceNotFound {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new word-not-present error.
    pub fn not_present<S: Into<String>>(word: S) -> Self {
        WordcheckError::WordNotPresent(word.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordcheckError::InvalidConfig(msg.into())
    }

    /// Create a new invariant error.
    pub fn invariant<S: Into<String>>(msg: S) -> Self {
        WordcheckError::Invariant(msg.into())
    }
}
