//! Dictionaries and language handling
//!
//! A dictionary is the resolved, read-only word list for one language:
//! loaded once, insertion-ordered, and shared by every filtering pass of a
//! session. Loading and caching live here so the filter itself never touches
//! I/O.

pub mod cache;
mod embedded;
pub mod loader;

pub use cache::{DEFAULT_LANGUAGE, DictionaryCache};
pub use embedded::{ENGLISH, ENGLISH_COUNT};

use crate::core::Word;

/// The word list for one language
///
/// Read-only after load. Iteration order is the source order, which is what
/// makes filtered output stable across passes.
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: String,
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    #[must_use]
    pub fn new(language: impl Into<String>, words: Vec<Word>) -> Self {
        Self {
            language: language.into(),
            words,
        }
    }

    /// The language identifier this dictionary was loaded for
    #[inline]
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The words, in source order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use super::loader::words_from_slice;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(ENGLISH.len(), ENGLISH_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in &ENGLISH[..20.min(ENGLISH.len())] {
            assert_eq!(word.chars().count(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_preserves_source_order() {
        let words = words_from_slice(&["grape", "apple", "crane"], &Alphabet::ascii());
        let dictionary = Dictionary::new("english", words);

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.words()[0].text(), "grape");
        assert_eq!(dictionary.words()[2].text(), "crane");
        assert_eq!(dictionary.language(), "english");
    }
}
