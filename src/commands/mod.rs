//! Command implementations

pub mod inspect;
pub mod selftest;
pub mod spell;

pub use inspect::{InspectResult, inspect_word};
pub use selftest::{ExampleOutcome, SelfTestReport, print_selftest_report, run_selftest};
pub use spell::{SpellResult, check_spelling, parse_letters};
