//! Board value types
//!
//! The board is a plain 6×5 value: six guess rows of five cells, each cell a
//! letter (or nothing) plus its feedback. It carries no behavior beyond
//! construction-time normalization; deriving constraints from it lives in
//! [`crate::filter`].
//!
//! Normalization keeps the algorithm total: a cell built from an
//! out-of-alphabet letter, a letter without feedback, or feedback without a
//! letter all collapse to the empty cell instead of erroring.

use super::alphabet::Alphabet;
use super::feedback::Feedback;
use super::{MAX_ROWS, WORD_LENGTH};
use std::fmt;

/// A single board cell: a letter (or none) and its feedback
///
/// Invariant: `feedback == Empty` iff `letter == None`. Enforced by
/// [`Cell::new`]; there is no other way to build a non-trivial cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    letter: Option<char>,
    feedback: Feedback,
}

impl Cell {
    /// The cell with no letter
    pub const EMPTY: Self = Self {
        letter: None,
        feedback: Feedback::Empty,
    };

    /// Build a cell, normalizing degenerate combinations to [`Cell::EMPTY`]
    ///
    /// The letter is lowercased via the alphabet. A letter outside the
    /// alphabet, a letter with `Empty` feedback, or feedback without a letter
    /// all yield the empty cell.
    #[must_use]
    pub fn new(letter: Option<char>, feedback: Feedback, alphabet: &Alphabet) -> Self {
        match (letter.and_then(|c| alphabet.normalize(c)), feedback) {
            (Some(_), Feedback::Empty) | (None, _) => Self::EMPTY,
            (letter @ Some(_), feedback) => Self { letter, feedback },
        }
    }

    /// The cell's letter, if any
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        self.letter
    }

    /// The cell's feedback state
    #[inline]
    #[must_use]
    pub const fn feedback(self) -> Feedback {
        self.feedback
    }

    /// Whether the cell holds no letter
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.letter.is_none()
    }
}

/// Error type for unparseable guess rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowParseError {
    WrongWordLength(usize),
    WrongPatternLength(usize),
    BadFeedbackChar(char),
}

impl fmt::Display for RowParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongWordLength(len) => {
                write!(f, "Guess must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::WrongPatternLength(len) => {
                write!(f, "Pattern must be exactly {WORD_LENGTH} cells, got {len}")
            }
            Self::BadFeedbackChar(c) => {
                write!(f, "Unknown feedback character {c:?} (use G, Y or -)")
            }
        }
    }
}

impl std::error::Error for RowParseError {}

/// One guess row of [`WORD_LENGTH`] cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    cells: [Cell; WORD_LENGTH],
}

impl Row {
    /// Build a row directly from cells
    #[must_use]
    pub const fn from_cells(cells: [Cell; WORD_LENGTH]) -> Self {
        Self { cells }
    }

    /// Parse a row from a guessed word and a feedback pattern
    ///
    /// The pattern uses the characters of [`Feedback::from_char`], e.g.
    /// `"gy--g"` or `"🟩🟨⬜⬜🟩"`. Out-of-alphabet letters become empty
    /// cells rather than errors.
    ///
    /// # Errors
    /// Returns `RowParseError` if either string is not exactly
    /// [`WORD_LENGTH`] characters or the pattern contains an unknown
    /// feedback character.
    pub fn from_guess(word: &str, pattern: &str, alphabet: &Alphabet) -> Result<Self, RowParseError> {
        let letters: Vec<char> = word.chars().collect();
        if letters.len() != WORD_LENGTH {
            return Err(RowParseError::WrongWordLength(letters.len()));
        }

        let feedbacks: Vec<Feedback> = pattern
            .chars()
            .map(|c| Feedback::from_char(c).ok_or(RowParseError::BadFeedbackChar(c)))
            .collect::<Result<_, _>>()?;
        if feedbacks.len() != WORD_LENGTH {
            return Err(RowParseError::WrongPatternLength(feedbacks.len()));
        }

        let mut cells = [Cell::EMPTY; WORD_LENGTH];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = Cell::new(Some(letters[i]), feedbacks[i], alphabet);
        }

        Ok(Self { cells })
    }

    /// The row's cells in positional order
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// A row is active iff at least one cell has a letter
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cells.iter().any(|c| !c.is_empty())
    }
}

/// The full board: [`MAX_ROWS`] guess rows
///
/// A plain value type; `Clone` gives the atomic snapshot the filter reads,
/// decoupled from whatever edits happen afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    rows: [Row; MAX_ROWS],
}

impl Board {
    /// An empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The board's rows in order
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ROWS] {
        &self.rows
    }

    /// Replace a row
    ///
    /// # Panics
    /// Panics if `index >= MAX_ROWS`
    pub fn set_row(&mut self, index: usize, row: Row) {
        self.rows[index] = row;
    }

    /// Clear a single row
    ///
    /// # Panics
    /// Panics if `index >= MAX_ROWS`
    pub fn clear_row(&mut self, index: usize) {
        self.rows[index] = Row {
            cells: [Cell::EMPTY; WORD_LENGTH],
        };
    }

    /// Clear the whole board
    pub fn clear(&mut self) {
        self.rows = [Row::default(); MAX_ROWS];
    }

    /// Whether no row is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.rows.iter().any(Row::is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::default()
    }

    #[test]
    fn cell_normalizes_letter_case() {
        let cell = Cell::new(Some('A'), Feedback::Correct, &alphabet());
        assert_eq!(cell.letter(), Some('a'));
        assert_eq!(cell.feedback(), Feedback::Correct);
    }

    #[test]
    fn cell_out_of_alphabet_becomes_empty() {
        let cell = Cell::new(Some('3'), Feedback::Correct, &alphabet());
        assert_eq!(cell, Cell::EMPTY);

        let cell = Cell::new(Some('д'), Feedback::Absent, &alphabet());
        assert_eq!(cell, Cell::EMPTY);
    }

    #[test]
    fn cell_letter_without_feedback_becomes_empty() {
        let cell = Cell::new(Some('a'), Feedback::Empty, &alphabet());
        assert_eq!(cell, Cell::EMPTY);
    }

    #[test]
    fn cell_feedback_without_letter_becomes_empty() {
        let cell = Cell::new(None, Feedback::Present, &alphabet());
        assert_eq!(cell, Cell::EMPTY);
    }

    #[test]
    fn row_from_guess_parses() {
        let row = Row::from_guess("CRANE", "gy--g", &alphabet()).unwrap();
        let cells = row.cells();
        assert_eq!(cells[0].letter(), Some('c'));
        assert_eq!(cells[0].feedback(), Feedback::Correct);
        assert_eq!(cells[1].feedback(), Feedback::Present);
        assert_eq!(cells[2].feedback(), Feedback::Absent);
        assert_eq!(cells[4].feedback(), Feedback::Correct);
        assert!(row.is_active());
    }

    #[test]
    fn row_from_guess_accepts_emoji_pattern() {
        let row = Row::from_guess("crane", "🟩🟨⬜⬜🟩", &alphabet()).unwrap();
        assert_eq!(row.cells()[0].feedback(), Feedback::Correct);
        assert_eq!(row.cells()[1].feedback(), Feedback::Present);
        assert_eq!(row.cells()[2].feedback(), Feedback::Absent);
    }

    #[test]
    fn row_from_guess_rejects_bad_lengths() {
        assert!(matches!(
            Row::from_guess("cran", "gggg", &alphabet()),
            Err(RowParseError::WrongWordLength(4))
        ));
        assert!(matches!(
            Row::from_guess("crane", "ggg", &alphabet()),
            Err(RowParseError::WrongPatternLength(3))
        ));
    }

    #[test]
    fn row_from_guess_rejects_bad_feedback() {
        assert!(matches!(
            Row::from_guess("crane", "ggxgg", &alphabet()),
            Err(RowParseError::BadFeedbackChar('x'))
        ));
    }

    #[test]
    fn row_from_guess_out_of_alphabet_letter_is_empty_cell() {
        let row = Row::from_guess("cr4ne", "ggggg", &alphabet()).unwrap();
        assert!(row.cells()[2].is_empty());
        assert_eq!(row.cells()[3].letter(), Some('n'));
    }

    #[test]
    fn inactive_row_and_empty_board() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(!board.rows()[0].is_active());
    }

    #[test]
    fn board_set_and_clear_rows() {
        let mut board = Board::new();
        let row = Row::from_guess("crane", "ggggg", &alphabet()).unwrap();

        board.set_row(2, row);
        assert!(!board.is_empty());
        assert!(board.rows()[2].is_active());

        board.clear_row(2);
        assert!(board.is_empty());

        board.set_row(0, row);
        board.set_row(5, row);
        board.clear();
        assert!(board.is_empty());
    }
}
