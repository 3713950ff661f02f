//! Wordle Helper - CLI
//!
//! Filters a dictionary down to the words consistent with a Wordle board,
//! either in one shot from the command line or interactively.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_helper::{
    commands::{FilterConfig, parse_row_arg, run_filter, run_interactive},
    core::Alphabet,
    dictionary::{DEFAULT_LANGUAGE, Dictionary, DictionaryCache, loader::load_from_file},
    output::print_filter_result,
    session::Session,
};

#[derive(Parser)]
#[command(
    name = "wordle-helper",
    about = "Narrows a dictionary to the words consistent with your Wordle guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary language, resolved as <languages-dir>/<LANGUAGE>.txt
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Directory holding per-language word list files
    #[arg(long, global = true, default_value = "languages")]
    languages_dir: PathBuf,

    /// Load the dictionary from a specific file instead of a language
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Restrict the alphabet to ASCII Latin letters
    #[arg(long, global = true)]
    ascii: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive board-editing mode (default)
    Interactive,

    /// Filter once from rows given on the command line
    Filter {
        /// Guess rows as WORD=PATTERN, e.g. crane=gy--g speed=--g--
        rows: Vec<String>,

        /// Show at most this many candidates
        #[arg(long)]
        limit: Option<usize>,

        /// Also print the parsed board as tiles
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let alphabet = if cli.ascii {
        Alphabet::ascii()
    } else {
        Alphabet::default()
    };
    let mut cache = DictionaryCache::new(&cli.languages_dir, alphabet.clone());

    let dictionary = load_dictionary(&cli, &mut cache, &alphabet)?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let mut session = Session::new(dictionary);
            run_interactive(&mut session, &mut cache).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Filter {
            rows,
            limit,
            verbose,
        } => {
            let rows = rows
                .iter()
                .map(|arg| parse_row_arg(arg))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| anyhow::anyhow!(e))?;

            let config = FilterConfig { rows };
            let result = run_filter(&config, &dictionary, &alphabet)
                .map_err(|e| anyhow::anyhow!(e))?;

            print_filter_result(&result, limit, verbose);
            Ok(())
        }
    }
}

/// Resolve the dictionary from the -w flag or the selected language
fn load_dictionary(
    cli: &Cli,
    cache: &mut DictionaryCache,
    alphabet: &Alphabet,
) -> Result<Dictionary> {
    if let Some(path) = &cli.wordlist {
        let name = path
            .file_stem()
            .map_or_else(|| "custom".to_string(), |s| s.to_string_lossy().to_string());
        Ok(load_from_file(path, &name, alphabet)?)
    } else {
        Ok(cache.load(&cli.language)?.clone())
    }
}
