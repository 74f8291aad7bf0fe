//! Dictionary of canonical words.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::thesaurus::split_lines;

/// A case-folded, duplicate-free, sorted set of canonical words.
///
/// The dictionary is the authority for what counts as a canonical word when
/// a [`WordMap`](super::word_map::WordMap) is built.
///
/// # Examples
///
/// ```
/// use simplifier::thesaurus::dictionary::Dictionary;
///
/// let dictionary = Dictionary::build("Animal\nhouse\nANIMAL");
///
/// assert_eq!(dictionary.len(), 2);
/// assert!(dictionary.contains("animal"));
/// assert!(!dictionary.contains("Animal"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    /// Build a dictionary from text holding one word per line.
    ///
    /// Each line is lower-cased and inserted as-is. Surrounding whitespace is
    /// not trimmed, and an interior blank line inserts the empty string.
    pub fn build(text: &str) -> Self {
        let words = split_lines(text)
            .into_iter()
            .map(str::to_lowercase)
            .collect();

        Dictionary { words }
    }

    /// Whether `word` is a canonical word. The lookup is exact; callers lower-case first.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
