//! Simplifier configuration.
//!
//! Configuration names the two source files a thesaurus is built from. It can
//! be loaded from a JSON file and then overridden field by field:
//!
//! ```json
//! {
//!   "dictionary_file": "data/dictionary.txt",
//!   "word_list_file": "data/word_list.txt"
//! }
//! ```
//!
//! Missing fields fall back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimplifierError};

/// Default dictionary file, relative to the working directory.
pub const DEFAULT_DICTIONARY_FILE: &str = "../dictionaryFile.txt";

/// Default word list file, relative to the working directory.
pub const DEFAULT_WORD_LIST_FILE: &str = "../wordListFile.txt";

/// Paths of the two thesaurus sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifierConfig {
    /// One canonical word per line
    pub dictionary_file: PathBuf,
    /// One comma-separated synonym group per line
    pub word_list_file: PathBuf,
}

impl Default for SimplifierConfig {
    fn default() -> Self {
        SimplifierConfig {
            dictionary_file: PathBuf::from(DEFAULT_DICTIONARY_FILE),
            word_list_file: PathBuf::from(DEFAULT_WORD_LIST_FILE),
        }
    }
}

impl SimplifierConfig {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SimplifierError::config(format!(
                "Failed to read configuration file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: SimplifierConfig = serde_json::from_str(&content).map_err(|e| {
            SimplifierError::config(format!(
                "Failed to parse configuration file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, otherwise start from the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Replace individual paths, keeping the current value where `None` is given.
    pub fn with_overrides(
        mut self,
        dictionary_file: Option<PathBuf>,
        word_list_file: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = dictionary_file {
            self.dictionary_file = path;
        }
        if let Some(path) = word_list_file {
            self.word_list_file = path;
        }
        self
    }

    /// Reject empty source paths.
    pub fn validate(&self) -> Result<()> {
        if self.dictionary_file.as_os_str().is_empty() {
            return Err(SimplifierError::invalid_argument("dictionary file path is empty"));
        }
        if self.word_list_file.as_os_str().is_empty() {
            return Err(SimplifierError::invalid_argument("word list file path is empty"));
        }
        Ok(())
    }
}
