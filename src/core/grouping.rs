//! Length grouping
//!
//! Groups words by character length for column display.

use rustc_hash::FxHashMap;

/// Group words by length, shortest group first, alphabetical within.
///
/// Returns one sublist per distinct length, ordered by ascending
/// length, with the words inside each sublist sorted by the default
/// string ordering (case-sensitive). Length is counted in characters,
/// not bytes. Duplicates are kept, so flattening the result gives back
/// every input word.
///
/// # Examples
/// ```
/// use wordkit::core::sort_by_length;
///
/// assert_eq!(
///     sort_by_length(&["a", "cat", "friend"]),
///     vec![vec!["a"], vec!["cat"], vec!["friend"]]
/// );
///
/// assert_eq!(
///     sort_by_length(&["tater", "tatertots", "a", "meal", "of", "champion", "cats"]),
///     vec![
///         vec!["a"],
///         vec!["of"],
///         vec!["cats", "meal"],
///         vec!["tater"],
///         vec!["champion"],
///         vec!["tatertots"],
///     ]
/// );
/// ```
#[must_use]
pub fn sort_by_length<S: AsRef<str>>(words: &[S]) -> Vec<Vec<String>> {
    let mut groups: FxHashMap<usize, Vec<String>> = FxHashMap::default();

    for word in words {
        let word = word.as_ref();
        groups
            .entry(word.chars().count())
            .or_default()
            .push(word.to_string());
    }

    let mut lengths: Vec<usize> = groups.keys().copied().collect();
    lengths.sort_unstable();

    lengths
        .into_iter()
        .map(|length| {
            let mut group = groups.remove(&length).unwrap_or_default();
            group.sort();
            group
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_singleton_groups() {
        assert_eq!(
            sort_by_length(&["a", "cat", "friend"]),
            vec![vec!["a"], vec!["cat"], vec!["friend"]]
        );
    }

    #[test]
    fn grouping_orders_groups_by_ascending_length() {
        let groups = sort_by_length(&["friend", "a", "cat"]);
        let lengths: Vec<usize> = groups.iter().map(|g| g[0].chars().count()).collect();
        assert_eq!(lengths, vec![1, 3, 6]);
    }

    #[test]
    fn grouping_sorts_within_group_alphabetically() {
        assert_eq!(
            sort_by_length(&["cat", "ant", "bat"]),
            vec![vec!["ant", "bat", "cat"]]
        );
    }

    #[test]
    fn grouping_is_case_sensitive_within_group() {
        // Default string ordering puts uppercase before lowercase
        assert_eq!(sort_by_length(&["bat", "Cat"]), vec![vec!["Cat", "bat"]]);
    }

    #[test]
    fn grouping_keeps_duplicate_words() {
        assert_eq!(sort_by_length(&["a", "a"]), vec![vec!["a", "a"]]);
    }

    #[test]
    fn grouping_empty_input() {
        let empty: &[&str] = &[];
        assert!(sort_by_length(empty).is_empty());
    }

    #[test]
    fn grouping_counts_chars_not_bytes() {
        // "héllo" is five characters even though it is six bytes
        assert_eq!(
            sort_by_length(&["héllo", "world"]),
            vec![vec!["héllo", "world"]]
        );
    }

    #[test]
    fn grouping_flattened_is_permutation_of_input() {
        let input = [
            "tater",
            "tatertots",
            "a",
            "meal",
            "of",
            "champion",
            "cats",
            "om",
            "nom",
        ];

        let mut flattened: Vec<String> = sort_by_length(&input).into_iter().flatten().collect();
        flattened.sort();

        let mut expected: Vec<String> = input.iter().map(|w| (*w).to_string()).collect();
        expected.sort();

        assert_eq!(flattened, expected);
    }
}
