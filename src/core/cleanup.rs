//! Word cleanup
//!
//! Normalizes arbitrary text down to lowercase ASCII letters and single
//! interior spaces.

/// Normalize a string to lowercase letters and single interior spaces.
///
/// Keeps ASCII letters in their original order, lowercased. Digits and
/// punctuation are removed entirely. Spaces survive only between words:
/// leading and trailing spaces are dropped, and interior runs collapse
/// to a single space.
///
/// # Examples
/// ```
/// use wordkit::core::cleanup_word;
///
/// assert_eq!(cleanup_word("2015"), "");
/// assert_eq!(cleanup_word("HELLO FRIENDS!"), "hello friends");
/// assert_eq!(cleanup_word("Party like it's 1979!"), "party like its");
/// assert_eq!(cleanup_word("  hello..."), "hello");
/// ```
#[must_use]
pub fn cleanup_word(word: &str) -> String {
    let mut cleaned = String::with_capacity(word.len());

    for ch in word.chars() {
        if ch.is_ascii_alphabetic() {
            cleaned.push(ch.to_ascii_lowercase());
        } else if ch == ' ' && !cleaned.is_empty() && !cleaned.ends_with(' ') {
            // A space is only a separator once a word has started
            cleaned.push(' ');
        }
    }

    // A separator emitted before trailing junk has nothing to separate
    if cleaned.ends_with(' ') {
        cleaned.pop();
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleanup_drops_digits_entirely() {
        assert_eq!(cleanup_word("2015"), "");
    }

    #[test]
    fn cleanup_lowercases_letters() {
        assert_eq!(cleanup_word("HELLO FRIENDS!"), "hello friends");
    }

    #[test]
    fn cleanup_strips_punctuation_inside_words() {
        assert_eq!(cleanup_word("Party like it's 1979!"), "party like its");
    }

    #[test]
    fn cleanup_trims_leading_and_trailing_spaces() {
        assert_eq!(cleanup_word("  hello...  "), "hello");
    }

    #[test]
    fn cleanup_collapses_interior_space_runs() {
        assert_eq!(cleanup_word("so   many   gaps"), "so many gaps");
    }

    #[test]
    fn cleanup_drops_separator_left_by_trailing_junk() {
        // "1979!" strips to nothing, so the space before it must go too
        assert_eq!(cleanup_word("like 1979!"), "like");
    }

    #[test]
    fn cleanup_empty_input() {
        assert_eq!(cleanup_word(""), "");
    }

    #[test]
    fn cleanup_only_spaces() {
        assert_eq!(cleanup_word("     "), "");
    }

    #[test]
    fn cleanup_non_ascii_letters_removed() {
        assert_eq!(cleanup_word("naïve café"), "nave caf");
    }

    #[test]
    fn cleanup_is_idempotent() {
        for input in ["Party like it's 1979!", "  hello...", "A  B  C", "", "2015"] {
            let once = cleanup_word(input);
            assert_eq!(cleanup_word(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn cleanup_output_shape() {
        let out = cleanup_word("  Mixed CASE, with 42 numbers  and   gaps! ");
        assert_eq!(out, "mixed case with numbers and gaps");
        assert!(out.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
        assert!(!out.starts_with(' ') && !out.ends_with(' '));
        assert!(!out.contains("  "));
    }
}
