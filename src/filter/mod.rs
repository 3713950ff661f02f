//! Board-to-candidates filtering
//!
//! Two pure steps: reduce a board snapshot to a [`ConstraintSet`], then
//! apply it to a word list with [`filter_candidates`].

mod candidates;
mod constraints;

pub use candidates::filter_candidates;
pub use constraints::ConstraintSet;
