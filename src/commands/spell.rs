//! Spelling-check command
//!
//! Validates letter arguments from the CLI and runs the pool check.

use crate::core::can_spell;

/// Result of a spelling check
#[derive(Debug, Clone)]
pub struct SpellResult {
    pub word: String,
    pub pool: Vec<char>,
    pub can_spell: bool,
}

/// Parse CLI letter arguments into characters
///
/// Each argument must be exactly one character; repeats carry
/// multiplicity.
///
/// # Errors
///
/// Returns an error naming the offending argument if it is empty or
/// longer than one character.
pub fn parse_letters(args: &[String]) -> Result<Vec<char>, String> {
    args.iter()
        .map(|arg| {
            let mut chars = arg.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(ch),
                _ => Err(format!(
                    "Invalid letter '{arg}': expected a single character"
                )),
            }
        })
        .collect()
}

/// Check whether a word can be spelled from CLI letter arguments
///
/// # Errors
///
/// Returns an error if any letter argument is not a single character.
pub fn check_spelling(word: &str, letters: &[String]) -> Result<SpellResult, String> {
    let pool = parse_letters(letters)?;

    Ok(SpellResult {
        word: word.to_string(),
        can_spell: can_spell(word, &pool),
        pool,
    })
}
