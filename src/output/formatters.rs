//! Formatting utilities for terminal output
//!
//! Pure string builders behind the display functions, kept separate so
//! the exact layout stays testable.

use crate::core::sort_by_length;

/// Format a word with unfound letters masked by underscores.
///
/// Produces one token per character position, joined by single spaces:
/// the character itself when it appears in `found_letters`, an
/// underscore otherwise. Matching is exact (case-sensitive), and the
/// word's own spaces are positions like any other, so a found space
/// renders as a blank token between two separators.
///
/// # Examples
/// ```
/// use wordkit::output::masked_word;
///
/// assert_eq!(masked_word("hello", &['e']), "_ e _ _ _");
/// assert_eq!(
///     masked_word("cheezeburger", &['a', 'b', 'c', 'd', 'e']),
///     "c _ e e _ e b _ _ _ e _"
/// );
/// assert_eq!(
///     masked_word("cheezeburger", &[]),
///     "_ _ _ _ _ _ _ _ _ _ _ _"
/// );
///
/// // A found space is its own blank token, leaving a wider gap
/// assert_eq!(masked_word("go on", &['o', ' ']), "_ o   o _");
/// ```
#[must_use]
pub fn masked_word(word: &str, found_letters: &[char]) -> String {
    let tokens: Vec<String> = word
        .chars()
        .map(|ch| {
            if found_letters.contains(&ch) {
                ch.to_string()
            } else {
                "_".to_string()
            }
        })
        .collect();

    tokens.join(" ")
}

/// Format words as length-grouped columns, one row per rank.
///
/// Column *k* holds the *k*-th shortest length group from
/// [`sort_by_length`]; row *i* holds the *i*-th word of every group,
/// alphabetically. Columns are separated by a double space. A group
/// that has run out of words contributes a blank cell padded to that
/// group's word length so later columns stay aligned; trailing padding
/// is trimmed from each row. Empty input yields no rows.
///
/// # Examples
/// ```
/// use wordkit::output::word_columns;
///
/// assert_eq!(word_columns(&["a", "cat", "friend"]), vec!["a  cat  friend"]);
///
/// let rows = word_columns(&[
///     "tater", "tatertots", "a", "meal", "of", "champion", "cats", "om", "nom",
/// ]);
/// assert_eq!(
///     rows,
///     vec![
///         "a  of  nom  cats  tater  champion  tatertots",
///         "   om       meal",
///     ]
/// );
/// ```
#[must_use]
pub fn word_columns<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let groups = sort_by_length(words);
    let num_rows = groups.iter().map(Vec::len).max().unwrap_or(0);

    (0..num_rows)
        .map(|row| {
            let cells: Vec<String> = groups
                .iter()
                .map(|group| {
                    group.get(row).cloned().unwrap_or_else(|| {
                        // Every word in a group shares one length, so the
                        // group's first word sizes the blank cell
                        " ".repeat(group[0].chars().count())
                    })
                })
                .collect();

            cells.join("  ").trim_end().to_string()
        })
        .collect()
}
