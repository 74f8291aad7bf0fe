//! Mapping from any known word to its canonical dictionary word.
//!
//! The mapping is seeded with every dictionary word mapped to itself, then
//! filled from synonym group lines. For each line:
//!
//! 1. split on `,` into a group of tokens
//! 2. lower-case every token
//! 3. pick the first token that is a dictionary word as the anchor
//! 4. if there is an anchor, map every token of the group to it, replacing
//!    earlier entries; otherwise leave the mapping untouched
//!
//! When a group holds several dictionary words, the first one from the left
//! wins for the whole group, including for the other dictionary words.

use std::collections::BTreeMap;

use log::trace;
use serde::Serialize;

use crate::thesaurus::dictionary::Dictionary;
use crate::thesaurus::{split_fields, split_lines};

/// Word to canonical word lookup table with sorted iteration.
///
/// Invariants after [`WordMap::build`]:
/// - every dictionary word `d` has `get(d) == Some(d)`
/// - every value is a dictionary word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordMap {
    entries: BTreeMap<String, String>,
}

impl WordMap {
    /// Build a mapping from a dictionary and word list text.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplifier::thesaurus::dictionary::Dictionary;
    /// use simplifier::thesaurus::word_map::WordMap;
    ///
    /// let dictionary = Dictionary::build("animal");
    /// let map = WordMap::build(&dictionary, "Beast,ANIMAL\nfoo,bar");
    ///
    /// assert_eq!(map.get("beast"), Some("animal"));
    /// assert_eq!(map.get("animal"), Some("animal"));
    /// assert_eq!(map.get("foo"), None);
    /// ```
    pub fn build(dictionary: &Dictionary, word_list_text: &str) -> Self {
        let mut entries: BTreeMap<String, String> = dictionary
            .iter()
            .map(|word| (word.to_string(), word.to_string()))
            .collect();

        for line in split_lines(word_list_text) {
            let group: Vec<String> = split_fields(line, ',')
                .into_iter()
                .map(str::to_lowercase)
                .collect();

            let Some(anchor) = group.iter().find(|word| dictionary.contains(word)) else {
                trace!("Skipping synonym group without a dictionary word: {line:?}");
                continue;
            };

            for word in &group {
                entries.insert(word.clone(), anchor.clone());
            }
        }

        WordMap { entries }
    }

    /// The canonical word for `word`, if known. The lookup is exact; callers lower-case first.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains_key(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(word, canonical)` pairs in sorted word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(word, canonical)| (word.as_str(), canonical.as_str()))
    }
}
