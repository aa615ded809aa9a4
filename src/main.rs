//! Wordkit - CLI
//!
//! Word and letter utilities with an embedded example suite. Running
//! with no arguments replays every documented example and exits nonzero
//! on any mismatch.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordkit::{
    commands::{check_spelling, inspect_word, parse_letters, print_selftest_report, run_selftest},
    core::cleanup_word,
    output::{display_masked_word, pretty_print_words, print_inspect_result, print_spell_result},
};

#[derive(Parser)]
#[command(
    name = "wordkit",
    about = "Word and letter utilities with example-driven self-checks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the embedded example suite (default)
    Selftest,

    /// Clean text down to lowercase letters and single spaces
    Clean {
        /// Text to clean
        text: String,
    },

    /// Inspect a word: cleaned form, palindrome and doubles checks
    Inspect {
        /// Word to inspect
        word: String,
    },

    /// Check whether a word can be spelled from a pool of letters
    Spell {
        /// The word to spell
        word: String,

        /// Pool letters, one character per argument (repeats carry multiplicity)
        letters: Vec<String>,
    },

    /// Show a word with unfound letters masked by underscores
    Mask {
        /// Word to mask
        word: String,

        /// Letters already found, one character per argument
        #[arg(short, long)]
        found: Vec<String>,
    },

    /// Print words in columns grouped by length, alphabetized
    Columns {
        /// Words to arrange
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to the example suite if no command given
    let command = cli.command.unwrap_or(Commands::Selftest);

    match command {
        Commands::Selftest => run_selftest_command(),
        Commands::Clean { text } => {
            println!("{}", cleanup_word(&text));
            Ok(())
        }
        Commands::Inspect { word } => {
            print_inspect_result(&inspect_word(&word));
            Ok(())
        }
        Commands::Spell { word, letters } => run_spell_command(&word, &letters),
        Commands::Mask { word, found } => run_mask_command(&word, &found),
        Commands::Columns { words } => {
            pretty_print_words(&words);
            Ok(())
        }
    }
}

fn run_selftest_command() -> Result<()> {
    println!("Starting example checks...");

    let report = run_selftest();
    print_selftest_report(&report);

    println!("Done example checks!");

    if report.all_passed() {
        Ok(())
    } else {
        anyhow::bail!(
            "{} of {} examples mismatched",
            report.failures.len(),
            report.total
        )
    }
}

fn run_spell_command(word: &str, letters: &[String]) -> Result<()> {
    let result = check_spelling(word, letters).map_err(|e| anyhow::anyhow!(e))?;
    print_spell_result(&result);
    Ok(())
}

fn run_mask_command(word: &str, found: &[String]) -> Result<()> {
    let found = parse_letters(found).map_err(|e| anyhow::anyhow!(e))?;
    display_masked_word(word, &found);
    Ok(())
}
