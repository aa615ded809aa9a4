//! Embedded example suite
//!
//! Every documented example, replayed against the live implementation.
//! This is the binary's default action: the examples double as an
//! executable description of each function, and the exit code reports
//! whether they all still match.

use crate::core::{can_spell, cleanup_word, has_doubles, is_palindrome, sort_by_length};
use crate::output::{masked_word, word_columns};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// One replayed example: the call rendered as text, the documented
/// expected output, and what the implementation actually produced.
#[derive(Debug, Clone)]
pub struct ExampleOutcome {
    pub function: &'static str,
    pub call: String,
    pub expected: String,
    pub actual: String,
}

impl ExampleOutcome {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Statistics from running the example suite
#[derive(Debug)]
pub struct SelfTestReport {
    pub total: usize,
    pub passed: usize,
    pub failures: Vec<ExampleOutcome>,
    /// (passed, run) per function name
    pub per_function: FxHashMap<&'static str, (usize, usize)>,
    pub duration: Duration,
}

impl SelfTestReport {
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

fn case(
    function: &'static str,
    call: &str,
    expected: impl Into<String>,
    actual: impl Into<String>,
) -> ExampleOutcome {
    ExampleOutcome {
        function,
        call: call.to_string(),
        expected: expected.into(),
        actual: actual.into(),
    }
}

/// Build the embedded example table.
///
/// One entry per documented example, expected values written out
/// literally.
#[must_use]
#[allow(clippy::too_many_lines)] // One entry per documented example
pub fn example_cases() -> Vec<ExampleOutcome> {
    let alphabet: Vec<char> = ('a'..='z').collect();
    let alphabet_x4 = alphabet.repeat(4);

    vec![
        // cleanup_word
        case(
            "cleanup_word",
            r#"cleanup_word("2015")"#,
            "",
            cleanup_word("2015"),
        ),
        case(
            "cleanup_word",
            r#"cleanup_word("HELLO FRIENDS!")"#,
            "hello friends",
            cleanup_word("HELLO FRIENDS!"),
        ),
        case(
            "cleanup_word",
            r#"cleanup_word("Party like it's 1979!")"#,
            "party like its",
            cleanup_word("Party like it's 1979!"),
        ),
        case(
            "cleanup_word",
            r#"cleanup_word("  hello...")"#,
            "hello",
            cleanup_word("  hello..."),
        ),
        case(
            "cleanup_word",
            r#"cleanup_word("so   many   gaps")"#,
            "so many gaps",
            cleanup_word("so   many   gaps"),
        ),
        // is_palindrome
        case(
            "is_palindrome",
            r#"is_palindrome("tot")"#,
            "true",
            is_palindrome("tot").to_string(),
        ),
        case(
            "is_palindrome",
            r#"is_palindrome("mot")"#,
            "false",
            is_palindrome("mot").to_string(),
        ),
        case(
            "is_palindrome",
            r#"is_palindrome("noon")"#,
            "true",
            is_palindrome("noon").to_string(),
        ),
        case(
            "is_palindrome",
            r#"is_palindrome("aibohphobia")"#,
            "true",
            is_palindrome("aibohphobia").to_string(),
        ),
        case(
            "is_palindrome",
            r#"is_palindrome("")"#,
            "true",
            is_palindrome("").to_string(),
        ),
        case(
            "is_palindrome",
            r#"is_palindrome("x")"#,
            "true",
            is_palindrome("x").to_string(),
        ),
        // has_doubles
        case(
            "has_doubles",
            r#"has_doubles("wow")"#,
            "true",
            has_doubles("wow").to_string(),
        ),
        case(
            "has_doubles",
            r#"has_doubles("tater")"#,
            "true",
            has_doubles("tater").to_string(),
        ),
        case(
            "has_doubles",
            r#"has_doubles("OMnom")"#,
            "false",
            has_doubles("OMnom").to_string(),
        ),
        case(
            "has_doubles",
            r#"has_doubles("doubles")"#,
            "false",
            has_doubles("doubles").to_string(),
        ),
        case(
            "has_doubles",
            r#"has_doubles("Can haz taters?")"#,
            "true",
            has_doubles("Can haz taters?").to_string(),
        ),
        // can_spell
        case(
            "can_spell",
            r#"can_spell("wow", ['w', 'o'])"#,
            "false",
            can_spell("wow", &['w', 'o']).to_string(),
        ),
        case(
            "can_spell",
            r#"can_spell("wow", ['w', 'w', 'o'])"#,
            "true",
            can_spell("wow", &['w', 'w', 'o']).to_string(),
        ),
        case(
            "can_spell",
            r#"can_spell("wow", ['a', 'b', 'c', 'w', 'o', 'w'])"#,
            "true",
            can_spell("wow", &['a', 'b', 'c', 'w', 'o', 'w']).to_string(),
        ),
        case(
            "can_spell",
            r#"can_spell("Tot", ['t', 'o', 't'])"#,
            "true",
            can_spell("Tot", &['t', 'o', 't']).to_string(),
        ),
        case(
            "can_spell",
            r#"can_spell("Aibohphobia", alphabet x4)"#,
            "true",
            can_spell("Aibohphobia", &alphabet_x4).to_string(),
        ),
        // masked_word
        case(
            "masked_word",
            r#"masked_word("hello", ['e'])"#,
            "_ e _ _ _",
            masked_word("hello", &['e']),
        ),
        case(
            "masked_word",
            r#"masked_word("cheezeburger", ['a', 'b', 'c', 'd', 'e'])"#,
            "c _ e e _ e b _ _ _ e _",
            masked_word("cheezeburger", &['a', 'b', 'c', 'd', 'e']),
        ),
        case(
            "masked_word",
            r#"masked_word("cheezeburger", [])"#,
            "_ _ _ _ _ _ _ _ _ _ _ _",
            masked_word("cheezeburger", &[]),
        ),
        case(
            "masked_word",
            r#"masked_word("Frosted flakes", ['f'])"#,
            "_ _ _ _ _ _ _ _ f _ _ _ _ _",
            masked_word("Frosted flakes", &['f']),
        ),
        case(
            "masked_word",
            r#"masked_word("go on", ['o', ' '])"#,
            "_ o   o _",
            masked_word("go on", &['o', ' ']),
        ),
        // sort_by_length
        case(
            "sort_by_length",
            r#"sort_by_length(["a", "cat", "friend"])"#,
            r#"[["a"], ["cat"], ["friend"]]"#,
            format!("{:?}", sort_by_length(&["a", "cat", "friend"])),
        ),
        case(
            "sort_by_length",
            r#"sort_by_length(["tater", "tatertots", "a", "meal", "of", "champion", "cats"])"#,
            r#"[["a"], ["of"], ["cats", "meal"], ["tater"], ["champion"], ["tatertots"]]"#,
            format!(
                "{:?}",
                sort_by_length(&["tater", "tatertots", "a", "meal", "of", "champion", "cats"])
            ),
        ),
        // word_columns
        case(
            "word_columns",
            r#"word_columns(["a", "cat", "friend"])"#,
            "a  cat  friend",
            word_columns(&["a", "cat", "friend"]).join("\n"),
        ),
        case(
            "word_columns",
            r#"word_columns(["tater", "tatertots", "a", "meal", "of", "champion", "cats", "om", "nom"])"#,
            "a  of  nom  cats  tater  champion  tatertots\n   om       meal",
            word_columns(&[
                "tater",
                "tatertots",
                "a",
                "meal",
                "of",
                "champion",
                "cats",
                "om",
                "nom",
            ])
            .join("\n"),
        ),
    ]
}

/// Run the embedded example suite
///
/// Walks the example table under a progress bar and collects every
/// mismatch into the report.
#[must_use]
pub fn run_selftest() -> SelfTestReport {
    let cases = example_cases();
    let total = cases.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut passed = 0;
    let mut failures = Vec::new();
    let mut per_function: FxHashMap<&'static str, (usize, usize)> = FxHashMap::default();

    for outcome in cases {
        let entry = per_function.entry(outcome.function).or_insert((0, 0));
        entry.1 += 1;

        if outcome.passed() {
            entry.0 += 1;
            passed += 1;
        } else {
            pb.set_message(format!("MISMATCH: {}", outcome.call));
            failures.push(outcome);
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    SelfTestReport {
        total,
        passed,
        failures,
        per_function,
        duration: start.elapsed(),
    }
}

/// Print the example suite report
pub fn print_selftest_report(report: &SelfTestReport) {
    println!("\n{}", "═".repeat(70));
    println!(" Example Suite Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Examples run:  {}", report.total);
    println!(
        "  Matched:       {} {}",
        report.passed,
        format!(
            "({:.1}%)",
            report.passed as f64 / report.total as f64 * 100.0
        )
        .green()
    );
    if !report.failures.is_empty() {
        println!(
            "  Mismatched:    {}",
            format!("{}", report.failures.len()).red().bold()
        );
    }
    println!(
        "  Time taken:    {:.2}s",
        report.duration.as_secs_f64()
    );

    println!("\n📈 {}", "Per Function".bright_cyan().bold());
    let mut functions: Vec<(&str, (usize, usize))> = report
        .per_function
        .iter()
        .map(|(name, counts)| (*name, *counts))
        .collect();
    functions.sort_unstable();

    for (function, (ok, run)) in functions {
        let bar_len = if run > 0 { ok * 20 / run } else { 0 };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(20_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {function:<16} {bar} {ok}/{run}");
    }

    for failure in &report.failures {
        println!("\n❌ {}", failure.call.red().bold());
        println!("   expected: {}", failure.expected);
        println!("   actual:   {}", failure.actual);
    }

    println!();
    if report.all_passed() {
        println!(
            "{}",
            format!("✅ All {} examples matched!", report.total)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ {} of {} examples mismatched",
                report.failures.len(),
                report.total
            )
            .red()
            .bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_embedded_examples_pass() {
        let report = run_selftest();
        assert!(
            report.all_passed(),
            "mismatched examples: {:?}",
            report.failures
        );
    }

    #[test]
    fn report_counts_are_consistent() {
        let report = run_selftest();

        assert_eq!(report.total, example_cases().len());
        assert_eq!(report.passed + report.failures.len(), report.total);

        let run_total: usize = report.per_function.values().map(|(_, run)| run).sum();
        assert_eq!(run_total, report.total);

        let ok_total: usize = report.per_function.values().map(|(ok, _)| ok).sum();
        assert_eq!(ok_total, report.passed);
    }

    #[test]
    fn example_table_covers_every_function() {
        let functions: HashSet<&str> = example_cases().iter().map(|c| c.function).collect();

        for expected in [
            "cleanup_word",
            "is_palindrome",
            "has_doubles",
            "can_spell",
            "masked_word",
            "sort_by_length",
            "word_columns",
        ] {
            assert!(functions.contains(expected), "no examples for {expected}");
        }
    }

    #[test]
    fn outcome_mismatch_is_reported() {
        let outcome = ExampleOutcome {
            function: "cleanup_word",
            call: r#"cleanup_word("x")"#.to_string(),
            expected: "x".to_string(),
            actual: "y".to_string(),
        };
        assert!(!outcome.passed());
    }
}
