//! Loading dictionary and word list text from disk.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::{Result, SimplifierError};

/// Which of the two thesaurus sources a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Dictionary,
    WordList,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Dictionary => write!(f, "Dictionary"),
            SourceKind::WordList => write!(f, "Word List"),
        }
    }
}

/// Read a source file as UTF-8 text.
///
/// A missing file is reported as [`SimplifierError::SourceNotFound`]; every
/// other failure, including invalid UTF-8, as [`SimplifierError::SourceRead`].
pub fn read_source<P: AsRef<Path>>(path: P, kind: SourceKind) -> Result<String> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SimplifierError::SourceNotFound {
            kind,
            path: path.to_path_buf(),
        },
        _ => SimplifierError::SourceRead {
            kind,
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    debug!(
        "Read {} file {} ({} bytes)",
        kind,
        path.display(),
        text.len()
    );
    Ok(text)
}

/// Whether `path` points at a regular file.
pub fn source_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}
