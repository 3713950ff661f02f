//! Editing session
//!
//! Owns the live board and the resolved dictionary, and mediates between
//! edits and the pure filter: every refresh snapshots the board, derives a
//! fresh constraint set, and filters from scratch. Nothing is incrementally
//! updated, so a refresh can never observe a half-applied edit.

mod debounce;

pub use debounce::{DEFAULT_DELAY, Debouncer};

use crate::core::{Board, Row, Word};
use crate::dictionary::Dictionary;
use crate::filter::{ConstraintSet, filter_candidates};
use std::time::Instant;

/// A board-editing session over one dictionary
#[derive(Debug)]
pub struct Session {
    board: Board,
    dictionary: Dictionary,
    debouncer: Debouncer,
}

impl Session {
    /// Start a session with an empty board
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            board: Board::new(),
            dictionary,
            debouncer: Debouncer::default(),
        }
    }

    /// The current board state
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The session's dictionary
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Replace the dictionary (language switch), keeping the board
    pub fn set_dictionary(&mut self, dictionary: Dictionary) {
        self.dictionary = dictionary;
        self.debouncer.note_edit(Instant::now());
    }

    /// Replace a guess row
    ///
    /// # Panics
    /// Panics if `index >= MAX_ROWS`
    pub fn set_row(&mut self, index: usize, row: Row) {
        self.board.set_row(index, row);
        self.debouncer.note_edit(Instant::now());
    }

    /// Clear a guess row
    ///
    /// # Panics
    /// Panics if `index >= MAX_ROWS`
    pub fn clear_row(&mut self, index: usize) {
        self.board.clear_row(index);
        self.debouncer.note_edit(Instant::now());
    }

    /// Clear the whole board
    pub fn clear(&mut self) {
        self.board.clear();
        self.debouncer.note_edit(Instant::now());
    }

    /// Whether an edit is awaiting a debounced refresh
    #[must_use]
    pub const fn refresh_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Refresh if the debounce window has elapsed
    ///
    /// Returns `None` while edits are still arriving within the window.
    pub fn refresh_debounced(&mut self, now: Instant) -> Option<Vec<&Word>> {
        if self.debouncer.should_fire(now) {
            Some(self.refresh())
        } else {
            None
        }
    }

    /// Recompute the candidate list from the current board
    ///
    /// Snapshots the board first; the derivation and filter only ever see
    /// the copy, never the live state.
    #[must_use]
    pub fn refresh(&self) -> Vec<&Word> {
        let snapshot = self.board.clone();
        let constraints = ConstraintSet::derive(&snapshot);
        filter_candidates(&constraints, self.dictionary.words())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::dictionary::loader::words_from_slice;
    use std::time::Duration;

    fn session() -> Session {
        let words = words_from_slice(&["apple", "grape", "crane"], &Alphabet::ascii());
        Session::new(Dictionary::new("test", words))
    }

    fn row(word: &str, pattern: &str) -> Row {
        Row::from_guess(word, pattern, &Alphabet::ascii()).unwrap()
    }

    #[test]
    fn empty_board_returns_whole_dictionary() {
        let session = session();
        let candidates = session.refresh();

        let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["apple", "grape", "crane"]);
    }

    #[test]
    fn edits_narrow_the_candidates() {
        let mut session = session();
        session.set_row(0, row("crane", "ggggg"));

        let candidates = session.refresh();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text(), "crane");
    }

    #[test]
    fn refresh_is_debounced_after_edits() {
        let mut session = session();
        let now = Instant::now();
        session.set_row(0, row("crane", "ggggg"));

        assert!(session.refresh_pending());
        // refresh_debounced only fires once the quiet window has passed
        let later = now + Duration::from_secs(1);
        let candidates = session.refresh_debounced(later);
        assert!(candidates.is_some());
        assert!(!session.refresh_pending());
        assert!(session.refresh_debounced(later + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn debounced_candidates_usable_with_dictionary_size() {
        let mut session = session();
        session.set_row(0, row("crane", "ggggg"));

        // The size read must not overlap the borrow held by the candidates
        let dictionary_size = session.dictionary().len();
        let candidates = session
            .refresh_debounced(Instant::now() + Duration::from_secs(1))
            .unwrap();

        assert_eq!(dictionary_size, 3);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text(), "crane");
    }

    #[test]
    fn language_switch_replaces_dictionary() {
        let mut session = session();
        let words = words_from_slice(&["slate"], &Alphabet::ascii());
        session.set_dictionary(Dictionary::new("other", words));

        assert_eq!(session.dictionary().language(), "other");
        assert_eq!(session.refresh().len(), 1);
    }

    #[test]
    fn clearing_restores_the_full_list() {
        let mut session = session();
        session.set_row(0, row("crane", "ggggg"));
        assert_eq!(session.refresh().len(), 1);

        session.clear();
        assert_eq!(session.refresh().len(), 3);
    }
}
