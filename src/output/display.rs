//! Display functions for command results
//!
//! Thin console wrappers over the pure formatters, plus styled printers
//! for the command result structs.

use super::formatters::{masked_word, word_columns};
use crate::commands::{InspectResult, SpellResult};
use colored::{ColoredString, Colorize};

/// Print a word with unfound letters masked by underscores
///
/// Writes exactly one line, formatted by [`masked_word`]. Pass `&[]`
/// when nothing has been found yet.
pub fn display_masked_word(word: &str, found_letters: &[char]) {
    println!("{}", masked_word(word, found_letters));
}

/// Print words in columns grouped by length, alphabetized
///
/// One line per row of [`word_columns`]; nothing is written for empty
/// input.
pub fn pretty_print_words<S: AsRef<str>>(words: &[S]) {
    for row in word_columns(words) {
        println!("{row}");
    }
}

/// Print the result of inspecting a word
pub fn print_inspect_result(result: &InspectResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Inspecting: {}", result.word.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("\n  Cleaned:     '{}'", result.cleaned);
    println!("  Letters:     {}", result.letter_count);
    println!("  Palindrome:  {}", yes_no(result.palindrome));
    println!("  Has doubles: {}", yes_no(result.doubles));
}

/// Print the verdict of a spelling check
pub fn print_spell_result(result: &SpellResult) {
    let pool: String = result.pool.iter().collect();
    let verdict = if result.can_spell {
        "can".green().bold()
    } else {
        "cannot".red().bold()
    };

    println!(
        "'{}' {} be spelled from [{}]",
        result.word.bright_yellow(),
        verdict,
        pool
    );
}

fn yes_no(value: bool) -> ColoredString {
    if value { "yes".green() } else { "no".red() }
}
