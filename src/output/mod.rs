//! Terminal output formatting
//!
//! Display utilities for masked words, column layouts, and CLI results.

pub mod display;
pub mod formatters;

pub use display::{
    display_masked_word, pretty_print_words, print_inspect_result, print_spell_result,
};
pub use formatters::{masked_word, word_columns};
