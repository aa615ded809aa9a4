//! Palindrome and duplicate-letter checks
//!
//! Both checks are exact: no case folding and no punctuation stripping.
//! Callers wanting phrase-level behavior clean the input first.

use rustc_hash::FxHashSet;

/// Check whether a word reads the same forward and backward.
///
/// Comparison is exact, so `"Amore, Roma"` fails as-is; run it through
/// [`cleanup_word`](crate::core::cleanup_word) and drop the spaces
/// first. The empty string and single characters are palindromes by
/// definition.
///
/// # Examples
/// ```
/// use wordkit::core::is_palindrome;
///
/// assert!(is_palindrome("tot"));
/// assert!(is_palindrome("noon"));
/// assert!(!is_palindrome("mot"));
/// assert!(is_palindrome(""));
/// assert!(is_palindrome("x"));
/// ```
#[must_use]
pub fn is_palindrome(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let midpoint = chars.len() / 2;

    // The mirror of index i is len - 1 - i
    (0..midpoint).all(|i| chars[i] == chars[chars.len() - 1 - i])
}

/// Check whether any character appears more than once.
///
/// Case-sensitive: `"OMnom"` has no doubles because `O` and `o` are
/// distinct. Spaces and punctuation count like any other character.
///
/// # Examples
/// ```
/// use wordkit::core::has_doubles;
///
/// assert!(has_doubles("wow"));
/// assert!(has_doubles("tater"));
/// assert!(!has_doubles("doubles"));
/// assert!(has_doubles("Can haz taters?"));
/// ```
#[must_use]
pub fn has_doubles(word: &str) -> bool {
    let distinct: FxHashSet<char> = word.chars().collect();
    distinct.len() < word.chars().count()
}
