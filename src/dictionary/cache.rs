//! Per-language dictionary cache
//!
//! Resolves a language identifier to `<dir>/<language>.txt`, loads it once,
//! and memoizes the result for the rest of the session. The language
//! `"english"` falls back to the bundled list when no file exists.

use super::loader::{load_from_file, words_from_slice};
use super::{Dictionary, embedded::ENGLISH};
use crate::core::Alphabet;
use rustc_hash::FxHashMap;
use std::io;
use std::path::PathBuf;

/// The bundled language identifier
pub const DEFAULT_LANGUAGE: &str = "english";

/// Loads and memoizes dictionaries per language
#[derive(Debug)]
pub struct DictionaryCache {
    languages_dir: PathBuf,
    alphabet: Alphabet,
    loaded: FxHashMap<String, Dictionary>,
}

impl DictionaryCache {
    /// Create a cache resolving language files under `languages_dir`
    #[must_use]
    pub fn new(languages_dir: impl Into<PathBuf>, alphabet: Alphabet) -> Self {
        Self {
            languages_dir: languages_dir.into(),
            alphabet,
            loaded: FxHashMap::default(),
        }
    }

    /// The alphabet dictionaries are validated against
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Get the dictionary for a language, loading it on first use
    ///
    /// Subsequent calls for the same language return the memoized
    /// dictionary without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the language file cannot be read and the
    /// language has no bundled fallback.
    pub fn load(&mut self, language: &str) -> io::Result<&Dictionary> {
        if self.loaded.contains_key(language) {
            return Ok(&self.loaded[language]);
        }

        let dictionary = self.load_uncached(language)?;
        Ok(self
            .loaded
            .entry(language.to_string())
            .or_insert(dictionary))
    }

    fn load_uncached(&self, language: &str) -> io::Result<Dictionary> {
        let path = self.languages_dir.join(format!("{language}.txt"));

        match load_from_file(&path, language, &self.alphabet) {
            Ok(dictionary) => Ok(dictionary),
            Err(e) if e.kind() == io::ErrorKind::NotFound && language == DEFAULT_LANGUAGE => {
                Ok(Dictionary::new(
                    DEFAULT_LANGUAGE,
                    words_from_slice(ENGLISH, &self.alphabet),
                ))
            }
            Err(e) => Err(e),
        }
    }
}
