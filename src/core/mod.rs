//! Core domain types
//!
//! The board geometry, feedback states, alphabet and word types. All types
//! here are plain values: pure, testable, and free of I/O.

mod alphabet;
mod board;
mod feedback;
mod word;

pub use alphabet::{Alphabet, EXTENDED_LATIN};
pub use board::{Board, Cell, Row, RowParseError};
pub use feedback::Feedback;
pub use word::{Word, WordError};

/// Number of letters in a word
pub const WORD_LENGTH: usize = 5;

/// Number of guess rows on a board
pub const MAX_ROWS: usize = 6;
