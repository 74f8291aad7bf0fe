//! Thesaurus construction and lookup.
//!
//! A thesaurus is built from two plain-text sources:
//!
//! - a **dictionary**: one canonical word per line
//! - a **word list**: one synonym group per line, words separated by commas
//!
//! Every dictionary word maps to itself. Every word on a synonym group line
//! maps to the first dictionary word found on that line (the *anchor*).
//! Lines without any dictionary word are ignored entirely.
//!
//! # Components
//!
//! - [`dictionary`] - Case-folded set of canonical words
//! - [`word_map`] - Word to canonical word mapping built from synonym groups
//! - [`swap`] - Word and text lookup against a finished mapping
//!
//! # Anchor Selection
//!
//! ```text
//! Dictionary: animal, house
//! Group:      beast,animal,creature
//!
//!   beast    ──┐
//!   animal   ──┼──> animal   (first dictionary word on the line)
//!   creature ──┘
//! ```
//!
//! # Examples
//!
//! ```
//! use simplifier::thesaurus::Thesaurus;
//!
//! let thesaurus = Thesaurus::from_sources("animal\nhouse", "beast,animal,creature\ncabin,house");
//!
//! assert_eq!(thesaurus.word_map().get("beast"), Some("animal"));
//! assert_eq!(thesaurus.word_map().get("cabin"), Some("house"));
//! assert_eq!(thesaurus.swap("Cabin").into_pair(), ("house".to_string(), true));
//! ```

pub mod dictionary;
pub mod swap;
pub mod word_map;

use self::dictionary::Dictionary;
use self::swap::SwappedToken;
use self::word_map::WordMap;

/// An immutable dictionary and word mapping built together from one pair of sources.
///
/// There is no way to update a thesaurus in place. Reconfiguration always
/// builds a new value from scratch and replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thesaurus {
    dictionary: Dictionary,
    word_map: WordMap,
}

impl Thesaurus {
    /// Build a thesaurus from raw dictionary text and raw word list text.
    pub fn from_sources(dictionary_text: &str, word_list_text: &str) -> Self {
        let dictionary = Dictionary::build(dictionary_text);
        let word_map = WordMap::build(&dictionary, word_list_text);

        Thesaurus {
            dictionary,
            word_map,
        }
    }

    /// The set of canonical words.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The word to canonical word mapping.
    pub fn word_map(&self) -> &WordMap {
        &self.word_map
    }

    /// Look up a single word. See [`swap::swap`].
    pub fn swap(&self, word: &str) -> SwappedToken {
        swap::swap(word, &self.word_map)
    }

    /// Look up every space-separated word of `text`. See [`swap::swap_text`].
    pub fn swap_text(&self, text: &str) -> Vec<SwappedToken> {
        swap::swap_text(text, &self.word_map)
    }
}

/// Split source text into lines.
///
/// Lines end at `\n`, with a trailing `\r` removed so CRLF files read the same
/// as LF files. Interior blank lines are kept as empty strings; trailing blank
/// lines are dropped, and empty text has no lines at all.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    drop_trailing_empty(&mut lines);
    lines
}

/// Split `text` on `separator`, dropping trailing empty fields.
///
/// Empty input yields a single empty field.
pub(crate) fn split_fields(text: &str, separator: char) -> Vec<&str> {
    if text.is_empty() {
        return vec![text];
    }

    let mut fields: Vec<&str> = text.split(separator).collect();
    drop_trailing_empty(&mut fields);
    fields
}

fn drop_trailing_empty(fields: &mut Vec<&str>) {
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
}
