//! Word inspection command
//!
//! Cleans a word and reports its palindrome and duplicate-letter
//! properties in one pass.

use crate::core::{cleanup_word, has_doubles, is_palindrome};

/// Result of inspecting a word
#[derive(Debug, Clone)]
pub struct InspectResult {
    pub word: String,
    pub cleaned: String,
    pub palindrome: bool,
    pub doubles: bool,
    pub letter_count: usize,
}

/// Inspect a word: clean it, then test the cleaned form.
///
/// The palindrome check runs on the cleaned form with spaces removed,
/// so phrase palindromes like "Name no one man." report true. The
/// doubles check runs on the cleaned form as-is.
///
/// # Examples
/// ```
/// use wordkit::commands::inspect_word;
///
/// let result = inspect_word("Name no one man.");
/// assert_eq!(result.cleaned, "name no one man");
/// assert!(result.palindrome);
/// assert!(result.doubles);
/// assert_eq!(result.letter_count, 12);
/// ```
#[must_use]
pub fn inspect_word(word: &str) -> InspectResult {
    let cleaned = cleanup_word(word);
    let squeezed: String = cleaned.chars().filter(|&ch| ch != ' ').collect();

    InspectResult {
        word: word.to_string(),
        palindrome: is_palindrome(&squeezed),
        doubles: has_doubles(&cleaned),
        letter_count: squeezed.chars().count(),
        cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_phrase_palindrome() {
        let result = inspect_word("Amore, Roma!");
        assert_eq!(result.cleaned, "amore roma");
        assert!(result.palindrome);
        assert_eq!(result.letter_count, 9);
    }

    #[test]
    fn inspect_non_palindrome() {
        let result = inspect_word("friends");
        assert!(!result.palindrome);
        assert!(!result.doubles);
    }

    #[test]
    fn inspect_doubles_on_cleaned_form() {
        // Raw "OMnom" has no doubles, but cleaning folds case
        let result = inspect_word("OMnom");
        assert_eq!(result.cleaned, "omnom");
        assert!(result.doubles);
    }

    #[test]
    fn inspect_keeps_original_word() {
        let result = inspect_word("  Hello!  ");
        assert_eq!(result.word, "  Hello!  ");
        assert_eq!(result.cleaned, "hello");
    }

    #[test]
    fn inspect_empty_input() {
        let result = inspect_word("42!");
        assert_eq!(result.cleaned, "");
        assert!(result.palindrome);
        assert!(!result.doubles);
        assert_eq!(result.letter_count, 0);
    }
}
