//! # Simplifier
//!
//! A thesaurus-driven text simplifier: build a dictionary of canonical words
//! and a mapping from synonyms to those words, then swap the synonyms found in
//! arbitrary text.
//!
//! ## Features
//!
//! - Case-insensitive dictionary and synonym group parsing
//! - First-match anchor selection for groups with several dictionary words
//! - Per-word match reporting for highlighting
//! - Copy-on-replace reconfiguration from source files

pub mod cli;
pub mod config;
pub mod error;
pub mod simplifier;
pub mod source;
pub mod thesaurus;

pub mod prelude {
    pub use crate::config::SimplifierConfig;
    pub use crate::error::{Result, SimplifierError};
    pub use crate::simplifier::TextSimplifier;
    pub use crate::thesaurus::Thesaurus;
    pub use crate::thesaurus::dictionary::Dictionary;
    pub use crate::thesaurus::swap::{SwappedToken, swap, swap_text};
    pub use crate::thesaurus::word_map::WordMap;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
