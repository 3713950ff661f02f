//! Command implementations

pub mod filter;
pub mod interactive;

pub use filter::{FilterConfig, FilterResult, parse_row_arg, run_filter};
pub use interactive::run_interactive;
