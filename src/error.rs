//! Error types for the simplifier library.
//!
//! The thesaurus core never fails: it works on in-memory strings and always
//! produces a (possibly empty) dictionary and mapping. Errors only arise at
//! the edges, when source files are read, configuration is loaded, or the
//! command line is driven.
//!
//! # Examples
//!
//! ```
//! use simplifier::error::{SimplifierError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SimplifierError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::source::SourceKind;

/// The main error type for simplifier operations.
#[derive(Error, Debug)]
pub enum SimplifierError {
    /// I/O errors outside of source loading (console, output streams)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A dictionary or word list file does not exist
    #[error("{kind} file not found. File not found at {}", .path.display())]
    SourceNotFound { kind: SourceKind, path: PathBuf },

    /// A dictionary or word list file exists but could not be read
    #[error("Unable to read {kind} file at {}: {source}", .path.display())]
    SourceRead {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Text was submitted before any thesaurus was built
    #[error("Text simplifier is not configured")]
    NotConfigured,

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SimplifierError.
pub type Result<T> = std::result::Result<T, SimplifierError>;

impl SimplifierError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SimplifierError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SimplifierError::InvalidArgument(msg.into())
    }

    /// Whether this error means a source file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SimplifierError::SourceNotFound { .. })
    }
}
