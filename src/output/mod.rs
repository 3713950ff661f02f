//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing. The consumer is
//! where words go uppercase; the core keeps everything lowercase.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_candidates, print_filter_result};
