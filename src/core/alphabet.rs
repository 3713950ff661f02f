//! Configurable letter alphabet
//!
//! Dictionaries vary by language, so the set of acceptable letters is a
//! parameter rather than a hard-coded ASCII assumption. An alphabet always
//! accepts the ASCII Latin letters and may accept a set of extended Latin
//! extras on top.

use rustc_hash::FxHashSet;

/// Extended Latin letters accepted by the default alphabet
pub const EXTENDED_LATIN: &[char] = &['ą', 'ć', 'ę', 'ł', 'ń', 'ó', 'ś', 'ź', 'ż'];

/// A case-insensitive letter set
///
/// Membership is checked after normalizing to lowercase, so `'A'` and `'a'`
/// are the same letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    extras: FxHashSet<char>,
}

impl Alphabet {
    /// ASCII Latin letters only, no extensions
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            extras: FxHashSet::default(),
        }
    }

    /// ASCII Latin letters plus the given extra letters
    ///
    /// Extras are normalized to lowercase. Non-alphabetic extras are ignored.
    #[must_use]
    pub fn with_extras(extras: &[char]) -> Self {
        let extras = extras
            .iter()
            .filter(|c| c.is_alphabetic())
            .flat_map(|c| c.to_lowercase())
            .collect();
        Self { extras }
    }

    /// Check whether a character is a letter of this alphabet
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.normalize(c).is_some()
    }

    /// Normalize a character to its lowercase form, if it belongs to the alphabet
    ///
    /// Returns `None` for anything outside the alphabet (digits, punctuation,
    /// whitespace, letters of other scripts).
    #[must_use]
    pub fn normalize(&self, c: char) -> Option<char> {
        // Multi-char lowercase expansions (e.g. 'İ') are never single letters
        // of a Wordle alphabet; take the single-char case only.
        let mut lower = c.to_lowercase();
        let first = lower.next()?;
        if lower.next().is_some() {
            return None;
        }

        if first.is_ascii_lowercase() || self.extras.contains(&first) {
            Some(first)
        } else {
            None
        }
    }
}

impl Default for Alphabet {
    /// ASCII Latin plus [`EXTENDED_LATIN`]
    fn default() -> Self {
        Self::with_extras(EXTENDED_LATIN)
    }
}
