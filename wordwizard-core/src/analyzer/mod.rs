//! Text analysis pipeline.
//!
//! This module provides the token extraction rules:
//! - **Words**: letter runs, Polish diacritics included
//! - **Numbers**: integer, decimal and exponent literals
//! - **Capitalized**: ASCII word runs starting with an uppercase letter
//! - **Mixed**: words, numbers and punctuation in one scan (frequency input)
//!
//! All rules are pure functions of the text. The returned iterators borrow
//! it and can be cloned to rescan.

pub mod casefold;
pub mod charclass;
pub mod number;
pub mod tokenizer;

pub use number::Numbers;
pub use tokenizer::{Capitalized, Mixed, Words};

/// Letter-only words bounded by word boundaries.
#[inline]
pub fn extract_words(text: &str) -> Words<'_> {
    Words::new(text)
}

/// Numeric literals bounded by word boundaries.
#[inline]
pub fn extract_numbers(text: &str) -> Numbers<'_> {
    Numbers::new(text)
}

/// ASCII word runs starting with an uppercase ASCII letter.
#[inline]
pub fn extract_capitalized(text: &str) -> Capitalized<'_> {
    Capitalized::new(text)
}

/// Words, numbers and single-char punctuation, in document order.
#[inline]
pub fn extract_mixed(text: &str) -> Mixed<'_> {
    Mixed::new(text)
}
