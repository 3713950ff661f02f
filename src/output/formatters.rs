//! Formatting utilities for terminal output

use crate::core::{Cell, Feedback, Row, WORD_LENGTH};
use crate::filter::ConstraintSet;
use colored::{ColoredString, Colorize};

/// Render a cell as a colored tile
///
/// Letters are shown uppercase on the feedback color; empty cells render as
/// a dimmed placeholder.
#[must_use]
pub fn cell_tile(cell: Cell) -> ColoredString {
    let Some(letter) = cell.letter() else {
        return " · ".bright_black();
    };

    let label = format!(" {} ", letter.to_uppercase());
    match cell.feedback() {
        Feedback::Correct => label.black().on_green(),
        Feedback::Present => label.black().on_yellow(),
        Feedback::Absent | Feedback::Empty => label.white().on_bright_black(),
    }
}

/// Render a row as a line of tiles
#[must_use]
pub fn row_tiles(row: &Row) -> String {
    let tiles: Vec<String> = row
        .cells()
        .iter()
        .map(|&c| cell_tile(c).to_string())
        .collect();
    tiles.join(" ")
}

/// Render a row as a compact emoji strip
#[must_use]
pub fn row_emoji(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|c| match c.feedback() {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬜',
            Feedback::Empty => '▫',
        })
        .collect()
}

/// Summarize a derived constraint set, one line per kind of constraint
///
/// Greens render as a positional strip, yellows per excluded position,
/// exact counts per letter. Letters are shown uppercase.
#[must_use]
pub fn constraint_summary(constraints: &ConstraintSet) -> String {
    if constraints.is_unconstrained() {
        return "No constraints derived".to_string();
    }

    let mut lines = Vec::new();

    let greens: Vec<String> = (0..WORD_LENGTH)
        .map(|i| {
            constraints
                .green_at(i)
                .map_or_else(|| "·".to_string(), |c| c.to_uppercase().to_string())
        })
        .collect();
    lines.push(format!("Green:  {}", greens.join(" ")));

    for position in 0..WORD_LENGTH {
        let excluded = constraints.yellow_exclusions(position);
        if excluded.is_empty() {
            continue;
        }
        let mut letters: Vec<String> =
            excluded.iter().map(|c| c.to_uppercase().to_string()).collect();
        letters.sort();
        lines.push(format!(
            "Yellow: {} in the word, not at position {}",
            letters.join(", "),
            position + 1
        ));
    }

    let mut counts: Vec<(char, usize)> = constraints
        .exact_counts()
        .iter()
        .map(|(&letter, &count)| (letter, count))
        .collect();
    counts.sort_unstable();
    for (letter, count) in counts {
        lines.push(format!("Exact:  {} x{count}", letter.to_uppercase()));
    }

    lines.join("\n")
}

/// Lay out words in uppercase columns
///
/// Keeps the input order, reading left to right.
#[must_use]
pub fn word_columns(words: &[&str], per_line: usize) -> String {
    let mut out = String::new();

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            if i % per_line == 0 {
                out.push('\n');
            } else {
                out.push_str("  ");
            }
        }
        out.push_str(&word.to_uppercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    #[test]
    fn row_emoji_maps_feedback() {
        let row = Row::from_guess("crane", "gy--g", &Alphabet::ascii()).unwrap();
        assert_eq!(row_emoji(&row), "🟩🟨⬜⬜🟩");
    }

    #[test]
    fn row_emoji_empty_row() {
        assert_eq!(row_emoji(&Row::default()), "▫▫▫▫▫");
    }

    #[test]
    fn constraint_summary_empty_board() {
        let constraints = ConstraintSet::derive(&crate::core::Board::default());
        assert_eq!(constraint_summary(&constraints), "No constraints derived");
    }

    #[test]
    fn constraint_summary_lists_each_kind() {
        let mut board = crate::core::Board::default();
        board.set_row(0, Row::from_guess("crane", "gy---", &Alphabet::ascii()).unwrap());
        let summary = constraint_summary(&ConstraintSet::derive(&board));

        assert!(summary.starts_with("Green:  C · · · ·"));
        assert!(summary.contains("Yellow: R in the word, not at position 2"));
        assert!(summary.contains("Exact:  A x0"));
        assert!(summary.contains("Exact:  E x0"));
    }

    #[test]
    fn word_columns_wraps_and_uppercases() {
        let layout = word_columns(&["apple", "grape", "crane"], 2);
        assert_eq!(layout, "APPLE  GRAPE\nCRANE");
    }

    #[test]
    fn word_columns_empty() {
        assert_eq!(word_columns(&[], 8), "");
    }
}
