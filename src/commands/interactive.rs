//! Interactive board-editing mode
//!
//! Text REPL that edits the board row by row and reprints the candidate
//! list after each change. Recomputation goes through the session's
//! debouncer, so a burst of edits pasted at once still filters only once.

use crate::core::{MAX_ROWS, Row};
use crate::dictionary::DictionaryCache;
use crate::output::{print_board, print_candidates};
use crate::session::{DEFAULT_DELAY, Session};
use std::io::{self, Write};
use std::thread;
use std::time::Instant;

/// How many candidates the REPL prints before truncating
const LIST_LIMIT: usize = 40;

/// Run the interactive mode
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_interactive(session: &mut Session, cache: &mut DictionaryCache) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Wordle Helper - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter your guesses with their feedback and I'll narrow the list.");
    println!("Patterns use G for green, Y for yellow, - for gray.\n");
    println!("Commands:");
    println!("  row N WORD PATTERN   set guess row N (1-{MAX_ROWS}), e.g. 'row 1 crane gy--g'");
    println!("  clear [N]            clear row N, or the whole board");
    println!("  show                 print the board");
    println!("  list                 print the current candidates");
    println!("  lang ID              switch dictionary language");
    println!("  quit                 exit\n");

    print_refresh(session);

    loop {
        let input = get_user_input("wordle-helper")?;
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.as_slice() {
            [] => {}
            ["quit" | "q" | "exit"] => {
                println!("\nBye!\n");
                return Ok(());
            }
            ["row", index, word, pattern] => {
                let Some(index) = parse_row_index(index) else {
                    println!("Row number must be 1-{MAX_ROWS}\n");
                    continue;
                };
                match Row::from_guess(word, pattern, cache.alphabet()) {
                    Ok(row) => {
                        session.set_row(index, row);
                        print_debounced(session);
                    }
                    Err(e) => println!("{e}\n"),
                }
            }
            ["clear"] => {
                session.clear();
                print_debounced(session);
            }
            ["clear", index] => {
                let Some(index) = parse_row_index(index) else {
                    println!("Row number must be 1-{MAX_ROWS}\n");
                    continue;
                };
                session.clear_row(index);
                print_debounced(session);
            }
            ["show"] => print_board(session.board()),
            ["list"] => print_refresh(session),
            ["lang", language] => match cache.load(language) {
                Ok(dictionary) => {
                    let dictionary = dictionary.clone();
                    println!("Loaded '{language}' ({} words)\n", dictionary.len());
                    session.set_dictionary(dictionary);
                    print_debounced(session);
                }
                Err(e) => println!("Could not load language '{language}': {e}\n"),
            },
            _ => println!("Unknown command. Try 'row 1 crane gy--g', 'show', 'list' or 'quit'.\n"),
        }
    }
}

/// Wait out the debounce window, then reprint the candidates
fn print_debounced(session: &mut Session) {
    while session.refresh_pending() {
        thread::sleep(DEFAULT_DELAY);
        // Read before refresh_debounced: its borrow spans the candidate list
        let dictionary_size = session.dictionary().len();
        if let Some(candidates) = session.refresh_debounced(Instant::now()) {
            let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
            print_candidates(&texts, dictionary_size, LIST_LIMIT);
        }
    }
}

/// Reprint the candidates immediately, bypassing the debouncer
fn print_refresh(session: &Session) {
    let candidates = session.refresh();
    let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
    print_candidates(&texts, session.dictionary().len(), LIST_LIMIT);
}

fn parse_row_index(raw: &str) -> Option<usize> {
    let index: usize = raw.parse().ok()?;
    if (1..=MAX_ROWS).contains(&index) {
        Some(index - 1)
    } else {
        None
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
