//! Candidate filtering
//!
//! Applies a derived constraint set to a word list. The output keeps the
//! list's iteration order, so repeated passes over an unchanged dictionary
//! are deterministic and identically ordered.

use super::constraints::ConstraintSet;
use crate::core::Word;
use rayon::prelude::*;

/// Word lists below this size are filtered sequentially
const PARALLEL_THRESHOLD: usize = 4096;

/// Filter a word list down to the candidates matching every constraint
///
/// Pure: neither input is mutated. An empty result is a legitimate outcome
/// of an over-constrained or contradictory board, not an error. Large lists
/// are filtered in parallel; `rayon` keeps collection order stable, so the
/// two paths produce identical output.
#[must_use]
pub fn filter_candidates<'a>(constraints: &ConstraintSet, words: &'a [Word]) -> Vec<&'a Word> {
    if words.len() < PARALLEL_THRESHOLD {
        words.iter().filter(|w| constraints.matches(w)).collect()
    } else {
        words
            .par_iter()
            .filter(|w| constraints.matches(w))
            .collect()
    }
}
