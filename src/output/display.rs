//! Display functions for command results

use super::formatters::{constraint_summary, row_emoji, row_tiles, word_columns};
use crate::commands::FilterResult;
use crate::core::Board;
use colored::Colorize;

/// Words per line in candidate listings
const WORDS_PER_LINE: usize = 8;

/// Print the result of a one-shot filter run
pub fn print_filter_result(result: &FilterResult, limit: Option<usize>, verbose: bool) {
    if verbose {
        print_board(&result.board);
        println!("{}", constraint_summary(&result.constraints));
    }

    let texts: Vec<&str> = result.candidates.iter().map(String::as_str).collect();
    print_candidates(&texts, result.dictionary_size, limit.unwrap_or(usize::MAX));
}

/// Print the board as colored tiles, active rows only
pub fn print_board(board: &Board) {
    println!();
    for row in board.rows() {
        if row.is_active() {
            println!("  {}   {}", row_tiles(row), row_emoji(row));
        }
    }
    println!();
}

/// Print a candidate list with its count line
pub fn print_candidates(candidates: &[&str], dictionary_size: usize, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} of {dictionary_size} words match",
        candidates.len().to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if candidates.is_empty() {
        println!("{}", "No candidates - check your feedback.".red());
    } else {
        println!("{}", word_columns(&candidates[..candidates.len().min(limit)], WORDS_PER_LINE));
        if candidates.len() > limit {
            println!(
                "{}",
                format!("… and {} more", candidates.len() - limit).bright_black()
            );
        }
    }
    println!();
}
