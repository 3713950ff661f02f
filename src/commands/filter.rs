//! One-shot filter command
//!
//! Takes guess rows from the command line, builds a board, and returns the
//! matching candidates in dictionary order.

use crate::core::{Alphabet, Board, MAX_ROWS, Row};
use crate::dictionary::Dictionary;
use crate::filter::{ConstraintSet, filter_candidates};

/// Configuration for a filter run
pub struct FilterConfig {
    /// Guess rows as (word, pattern) pairs, first row first
    pub rows: Vec<(String, String)>,
}

/// Result of a filter run
#[derive(Debug)]
pub struct FilterResult {
    /// The parsed board, for rendering
    pub board: Board,
    /// The constraint set derived from the board
    pub constraints: ConstraintSet,
    /// Matching words in dictionary order, lowercase
    pub candidates: Vec<String>,
    /// Size of the dictionary that was filtered
    pub dictionary_size: usize,
}

/// Parse a `WORD=PATTERN` row argument
///
/// # Errors
///
/// Returns an error if the argument has no `=` separator.
pub fn parse_row_arg(arg: &str) -> Result<(String, String), String> {
    let (word, pattern) = arg
        .split_once('=')
        .ok_or_else(|| format!("Row '{arg}' must look like WORD=PATTERN, e.g. crane=gy--g"))?;
    Ok((word.to_string(), pattern.to_string()))
}

/// Run the filter against a dictionary
///
/// # Errors
///
/// Returns an error if more than [`MAX_ROWS`] rows are given or a row fails
/// to parse.
pub fn run_filter(
    config: &FilterConfig,
    dictionary: &Dictionary,
    alphabet: &Alphabet,
) -> Result<FilterResult, String> {
    if config.rows.len() > MAX_ROWS {
        return Err(format!(
            "A board has at most {MAX_ROWS} rows, got {}",
            config.rows.len()
        ));
    }

    let mut board = Board::new();
    for (index, (word, pattern)) in config.rows.iter().enumerate() {
        let row = Row::from_guess(word, pattern, alphabet)
            .map_err(|e| format!("Row {}: {e}", index + 1))?;
        board.set_row(index, row);
    }

    let constraints = ConstraintSet::derive(&board);
    let candidates = filter_candidates(&constraints, dictionary.words())
        .into_iter()
        .map(|w| w.text().to_string())
        .collect();

    Ok(FilterResult {
        board,
        constraints,
        candidates,
        dictionary_size: dictionary.len(),
    })
}
