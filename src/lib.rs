//! Wordle Helper
//!
//! Narrows a dictionary of 5-letter words to the candidates consistent with
//! a Wordle board: six guess rows whose letters carry gray, yellow or green
//! feedback.
//!
//! The board is reduced to a constraint set (required letters per position,
//! per-position exclusions for letters known present, and exact occurrence
//! counts inferred from duplicate letters with mixed feedback), then the
//! dictionary is filtered against it. Duplicate letters are the part naive
//! filters get wrong; see [`filter::ConstraintSet`].
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::{Alphabet, Board, Row, Word};
//! use wordle_helper::filter::{ConstraintSet, filter_candidates};
//!
//! let alphabet = Alphabet::default();
//! let mut board = Board::new();
//! board.set_row(0, Row::from_guess("crane", "gy--g", &alphabet).unwrap());
//!
//! let words = vec![Word::new("chore").unwrap(), Word::new("crumb").unwrap()];
//! let constraints = ConstraintSet::derive(&board);
//! let candidates = filter_candidates(&constraints, &words);
//! assert_eq!(candidates.len(), 1);
//! ```

// Core domain types
pub mod core;

// Constraint derivation and candidate filtering
pub mod filter;

// Dictionaries and language handling
pub mod dictionary;

// Board-editing session and debounce policy
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
