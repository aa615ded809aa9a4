//! Wordkit
//!
//! Small word and letter utilities: text cleanup, palindrome and
//! duplicate-letter checks, letter-pool spelling checks, masked-word
//! display, and length-grouped column printing. Every public function
//! carries example-based checks that double as documentation, and the
//! binary's default action replays the whole example suite.
//!
//! # Quick Start
//!
//! ```rust
//! use wordkit::core::{cleanup_word, is_palindrome};
//!
//! let cleaned = cleanup_word("Amore, Roma!");
//! assert_eq!(cleaned, "amore roma");
//!
//! // Phrase palindromes hold once spaces are dropped too
//! assert!(is_palindrome(&cleaned.replace(' ', "")));
//! ```

// Core word and letter functions
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
