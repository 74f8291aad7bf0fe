//! Word and text lookup against a finished [`WordMap`].

use serde::{Deserialize, Serialize};

use crate::thesaurus::split_fields;
use crate::thesaurus::word_map::WordMap;

/// One looked-up word.
///
/// `text` is the canonical word when `matched` is true, and the lower-cased
/// input word otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwappedToken {
    pub text: String,
    pub matched: bool,
}

impl SwappedToken {
    pub fn into_pair(self) -> (String, bool) {
        (self.text, self.matched)
    }
}

/// Swap a single word for its canonical word.
///
/// ```
/// use simplifier::thesaurus::Thesaurus;
/// use simplifier::thesaurus::swap::swap;
///
/// let thesaurus = Thesaurus::from_sources("animal", "beast,animal");
///
/// assert_eq!(swap("Beast", thesaurus.word_map()).into_pair(), ("animal".to_string(), true));
/// assert_eq!(swap("unknown", thesaurus.word_map()).into_pair(), ("unknown".to_string(), false));
/// ```
pub fn swap(word: &str, map: &WordMap) -> SwappedToken {
    let word = word.to_lowercase();

    match map.get(&word) {
        Some(canonical) => SwappedToken {
            text: canonical.to_string(),
            matched: true,
        },
        None => SwappedToken {
            text: word,
            matched: false,
        },
    }
}

/// Split `text` on single spaces and swap each word.
///
/// Consecutive spaces yield empty words. Trailing spaces are ignored.
pub fn swap_text(text: &str, map: &WordMap) -> Vec<SwappedToken> {
    split_fields(text, ' ')
        .into_iter()
        .map(|word| swap(word, map))
        .collect()
}

/// Join swapped tokens back together with single spaces.
pub fn render_plain(tokens: &[SwappedToken]) -> String {
    tokens
        .iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of tokens that were replaced by a canonical word.
pub fn matched_count(tokens: &[SwappedToken]) -> usize {
    tokens.iter().filter(|token| token.matched).count()
}
