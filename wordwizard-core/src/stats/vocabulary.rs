//! Sorted vocabulary.

use rustc_hash::FxHashSet;

use crate::analyzer::casefold::sort_key;
use crate::analyzer::extract_words;

/// Distinct word-rule tokens, sorted case-insensitively.
///
/// Distinctness is case-sensitive: `Cat` and `cat` are separate entries.
/// Words with the same lowercase form are ordered by their exact text, so the
/// output does not depend on hashing order.
pub fn unique_sorted_words(text: &str) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    let mut words: Vec<&str> = extract_words(text)
        .filter(|t| seen.insert(t.text))
        .map(|t| t.text)
        .collect();

    words.sort_by_cached_key(|w| (sort_key(w), *w));
    words
}
