//! Dictionary loading utilities
//!
//! Loads word lists from files the way the language files ship: one word per
//! line, any case, possibly padded with whitespace or entries of the wrong
//! length. Lines that don't yield a valid 5-letter word of the alphabet are
//! skipped silently.

use super::Dictionary;
use crate::core::{Alphabet, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// The language identifier is recorded on the returned dictionary; invalid
/// lines are dropped, not errors.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_helper::core::Alphabet;
/// use wordle_helper::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("languages/english.txt", "english", &Alphabet::ascii()).unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    language: &str,
    alphabet: &Alphabet,
) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::with_alphabet(trimmed, alphabet).ok()
            }
        })
        .collect();

    Ok(Dictionary::new(language, words))
}

/// Convert a string slice list to validated words
///
/// Entries that are not valid words of the alphabet are skipped.
///
/// # Examples
/// ```
/// use wordle_helper::core::Alphabet;
/// use wordle_helper::dictionary::{ENGLISH, loader::words_from_slice};
///
/// let words = words_from_slice(ENGLISH, &Alphabet::ascii());
/// assert_eq!(words.len(), ENGLISH.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], alphabet: &Alphabet) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_alphabet(s, alphabet).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], &Alphabet::ascii());

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te"], &Alphabet::ascii());

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "crane");
    }

    #[test]
    fn words_from_slice_lowercases() {
        let words = words_from_slice(&["CRANE", "Slate"], &Alphabet::ascii());

        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_respects_alphabet() {
        let ascii = words_from_slice(&["żółty", "crane"], &Alphabet::ascii());
        assert_eq!(ascii.len(), 1);

        let extended = words_from_slice(&["żółty", "crane"], &Alphabet::default());
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn words_from_slice_empty() {
        let words = words_from_slice(&[], &Alphabet::ascii());
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_english() {
        use crate::dictionary::ENGLISH;

        let words = words_from_slice(ENGLISH, &Alphabet::ascii());
        assert_eq!(words.len(), ENGLISH.len());
    }
}
