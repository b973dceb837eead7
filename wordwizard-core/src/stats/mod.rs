//! Lexical statistics over tokenizer output.
//!
//! Every function here is a pure function of the text. Empty or blank input
//! gives zero counts and empty collections, never an error.

mod frequency;
mod vocabulary;

pub use frequency::word_frequency;
pub use vocabulary::unique_sorted_words;

use crate::analyzer::{extract_capitalized, extract_numbers, extract_words};

/// Number of word-rule tokens.
#[inline]
pub fn count_words(text: &str) -> usize {
    extract_words(text).count()
}

/// Number of numeric literals.
#[inline]
pub fn count_numbers(text: &str) -> usize {
    extract_numbers(text).count()
}

/// Capitalized words in document order, duplicates kept.
pub fn capitalized_words(text: &str) -> Vec<&str> {
    extract_capitalized(text).map(|t| t.text).collect()
}
