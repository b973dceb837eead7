//! Sequence pattern matching.
//!
//! Finds the words of a text that contain a query's units in order,
//! case-insensitively, possibly with other chars between them. A match never
//! crosses a word boundary: words are maximal runs of Unicode word chars, and
//! each word is tested on its own.
//!
//! ```text
//! text:   "cat dog concatenate"
//! query:  ["c", "a", "t"]
//! result: ["cat", "concatenate"]
//! ```
//!
//! The whole word is reported. [`find_subsequence`] gives the shortest span
//! inside the word that the units occupy.

mod subsequence;

pub use subsequence::{shortest_window, Unit};

use core::ops::Range;

use memchr::memchr2;
use smallvec::SmallVec;
use tracing::trace;
use wordwizard_types::{PatternMatches, SequenceQuery};

use crate::analyzer::casefold::{fold_char, fold_into, FoldedWord};
use crate::analyzer::charclass::{is_unicode_word, Runs};

/// A query with its units folded once, ready to test many words.
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    key: String,
    units: SmallVec<[Unit; 8]>,
    /// Folded first char of the first unit, when it is ASCII.
    lead: Option<u8>,
}

impl CompiledQuery {
    /// Folds the units of `query`.
    pub fn new(query: &SequenceQuery) -> Self {
        let units: SmallVec<[Unit; 8]> = query
            .units()
            .iter()
            .filter(|u| !u.is_empty())
            .map(|u| u.chars().map(fold_char).collect())
            .collect();

        let lead = units
            .first()
            .and_then(|u| u.first())
            .filter(|c| c.is_ascii())
            .map(|&c| c as u8);

        Self {
            key: query.key(),
            units,
            lead,
        }
    }

    /// Label of the query.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns `true` if the query matches every word.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Cheap rejection of ASCII words that lack the first unit's leading char.
    #[inline]
    fn may_match(&self, word: &str) -> bool {
        match self.lead {
            Some(lead) if word.is_ascii() => {
                memchr2(lead, lead.to_ascii_uppercase(), word.as_bytes()).is_some()
            }
            _ => true,
        }
    }

    /// Shortest char range of an already folded word holding all units in order.
    #[inline]
    pub fn find_in(&self, folded: &[char]) -> Option<Range<usize>> {
        shortest_window(folded, &self.units)
    }

    /// Returns `true` if `word` contains the units in order.
    pub fn matches_word(&self, word: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        if !self.may_match(word) {
            return false;
        }
        let mut folded = FoldedWord::new();
        fold_into(word, &mut folded);
        self.find_in(&folded).is_some()
    }
}

/// Byte range of the shortest span of `word` holding the query's units in order.
///
/// Returns `None` when the word does not match. An empty query gives the empty
/// range at 0.
pub fn find_subsequence(word: &str, query: &SequenceQuery) -> Option<Range<usize>> {
    let compiled = CompiledQuery::new(query);
    let mut folded = FoldedWord::new();
    fold_into(word, &mut folded);

    let window = compiled.find_in(&folded)?;
    let byte_at = |char_idx: usize| {
        word.char_indices()
            .nth(char_idx)
            .map_or(word.len(), |(b, _)| b)
    };
    Some(byte_at(window.start)..byte_at(window.end))
}

/// Words of `text` matching each query.
///
/// Output entries follow query order, and each list follows document order
/// with duplicates kept. An empty query lists every word. Queries sharing a
/// key share an entry; the later query's matches win.
pub fn match_sequences(text: &str, queries: &[SequenceQuery]) -> PatternMatches {
    let compiled: Vec<CompiledQuery> = queries.iter().map(CompiledQuery::new).collect();
    let mut lists: Vec<Vec<String>> = vec![Vec::new(); compiled.len()];
    let mut folded = FoldedWord::new();
    let mut scanned = 0usize;

    for (_, word) in Runs::new(text, is_unicode_word) {
        scanned += 1;
        let mut is_folded = false;

        for (query, list) in compiled.iter().zip(lists.iter_mut()) {
            if !query.is_empty() {
                if !query.may_match(word) {
                    continue;
                }
                if !is_folded {
                    fold_into(word, &mut folded);
                    is_folded = true;
                }
                if query.find_in(&folded).is_none() {
                    continue;
                }
            }
            list.push(word.to_owned());
        }
    }

    trace!(queries = compiled.len(), words = scanned, "sequence scan done");

    let mut matches = PatternMatches::new();
    for (query, list) in compiled.into_iter().zip(lists) {
        matches.insert(query.key, list);
    }
    matches
}
