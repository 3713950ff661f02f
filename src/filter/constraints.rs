//! Constraint derivation
//!
//! Reduces a board snapshot to a compact constraint set: required letters per
//! position (greens), per-position exclusions for letters known present
//! (yellows), and exact occurrence counts inferred from duplicate letters
//! with mixed feedback.
//!
//! The exact-count inference is the part naive filters get wrong. Real
//! feedback marks exactly `min(count in guess, count in solution)` copies of
//! a letter as present or correct and the rest gray, so a gray copy
//! alongside confirmed copies pins the solution's total count for that
//! letter. A row where every copy is confirmed pins nothing: the solution
//! may hold more copies than the guess showed.

use crate::core::{Board, Feedback, WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Constraints derived from one board snapshot
///
/// Immutable once derived; rebuilt from scratch on every filtering pass.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    green_at: [Option<char>; WORD_LENGTH],
    yellow_exclusions: [FxHashSet<char>; WORD_LENGTH],
    exact_counts: FxHashMap<char, usize>,
}

impl ConstraintSet {
    /// Derive the constraint set from a board
    ///
    /// Pure function of the snapshot. Inactive rows contribute nothing; an
    /// empty board yields the unconstrained set. Later rows overwrite
    /// earlier greens and exact counts for the same position/letter
    /// (last-writer-wins), while yellow exclusions accumulate.
    #[must_use]
    pub fn derive(board: &Board) -> Self {
        let mut constraints = Self::default();

        for row in board.rows() {
            if !row.is_active() {
                continue;
            }

            // Letters seen in this row, with total vs confirmed copies
            let mut row_total: FxHashMap<char, usize> = FxHashMap::default();
            let mut row_confirmed: FxHashMap<char, usize> = FxHashMap::default();

            for (position, cell) in row.cells().iter().enumerate() {
                let Some(letter) = cell.letter() else {
                    continue;
                };

                *row_total.entry(letter).or_insert(0) += 1;
                if cell.feedback().is_confirmed() {
                    *row_confirmed.entry(letter).or_insert(0) += 1;
                }

                match cell.feedback() {
                    Feedback::Correct => constraints.green_at[position] = Some(letter),
                    Feedback::Present => {
                        constraints.yellow_exclusions[position].insert(letter);
                    }
                    Feedback::Absent | Feedback::Empty => {}
                }
            }

            // A gray copy next to confirmed copies pins the exact count
            for (&letter, &total) in &row_total {
                let confirmed = row_confirmed.get(&letter).copied().unwrap_or(0);
                if confirmed < total {
                    constraints.exact_counts.insert(letter, confirmed);
                }
            }
        }

        constraints
    }

    /// The required letter at a position, if known
    #[inline]
    #[must_use]
    pub const fn green_at(&self, position: usize) -> Option<char> {
        self.green_at[position]
    }

    /// Letters known present in the solution but forbidden at this position
    #[inline]
    #[must_use]
    pub const fn yellow_exclusions(&self, position: usize) -> &FxHashSet<char> {
        &self.yellow_exclusions[position]
    }

    /// Letters whose total occurrence count in the solution is known exactly
    #[inline]
    #[must_use]
    pub const fn exact_counts(&self) -> &FxHashMap<char, usize> {
        &self.exact_counts
    }

    /// Whether the set constrains nothing (every candidate matches)
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.green_at.iter().all(Option::is_none)
            && self.yellow_exclusions.iter().all(FxHashSet::is_empty)
            && self.exact_counts.is_empty()
    }

    /// Check a candidate word against every constraint
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        // Greens: required letter at each known position
        for (position, &required) in self.green_at.iter().enumerate() {
            if let Some(letter) = required
                && word.letter_at(position) != letter
            {
                return false;
            }
        }

        // Yellows: the letter must not recur at its excluded position, and
        // must occur somewhere in the word
        for (position, excluded) in self.yellow_exclusions.iter().enumerate() {
            if excluded.contains(&word.letter_at(position)) {
                return false;
            }
            for &letter in excluded {
                if !word.contains(letter) {
                    return false;
                }
            }
        }

        // Exact counts: the letter must occur exactly the pinned number of times
        for (&letter, &count) in &self.exact_counts {
            if word.count_of(letter) != count {
                return false;
            }
        }

        true
    }
}
