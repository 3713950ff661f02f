//! Dictionary word representation
//!
//! A Word stores a validated 5-letter word together with its letters, so the
//! filter can index positions and count occurrences without re-decoding UTF-8.

use super::WORD_LENGTH;
use super::alphabet::Alphabet;
use std::fmt;

/// A lowercase word of exactly [`WORD_LENGTH`] letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidLetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidLetter(c) => write!(f, "Letter {c:?} is not in the alphabet"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word validated against the default alphabet
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly 5 letters or any
    /// letter is outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        Self::with_alphabet(text, &Alphabet::default())
    }

    /// Create a new Word validated against a specific alphabet
    ///
    /// Letters are normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly 5 letters or any
    /// letter is outside the alphabet.
    pub fn with_alphabet(text: &str, alphabet: &Alphabet) -> Result<Self, WordError> {
        let mut letters = ['\0'; WORD_LENGTH];
        let mut count = 0;

        for c in text.chars() {
            if count == WORD_LENGTH {
                return Err(WordError::InvalidLength(text.chars().count()));
            }
            letters[count] = alphabet.normalize(c).ok_or(WordError::InvalidLetter(c))?;
            count += 1;
        }

        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        Ok(Self {
            text: letters.iter().collect(),
            letters,
        })
    }

    /// Get the word as a lowercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Count occurrences of a letter in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&c| c == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
