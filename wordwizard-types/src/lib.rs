//! Core types shared across the WordWizard crates.
//!
//! This crate provides the plain data types exchanged between the analyzer
//! core and whatever drives it (the CLI, a benchmark, a test). Keeping them
//! separate ensures:
//!
//! - **Borrowed tokens**: [`Token`] is a slice of the analyzed text, never a copy
//! - **Ordered results**: [`FrequencyTable`] and [`PatternMatches`] keep their
//!   entry order through serialization
//! - **Clean boundaries**: the core never depends on the CLI, the CLI never
//!   reaches into the core's scanners

#![warn(missing_docs)]

use core::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Classification assigned to a token by one of the extraction rules.
///
/// `#[repr(u8)]` keeps the kind one byte wide so token buffers stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// A run of letters (or, for the mixed rule, letters, digits and underscores).
    Word = 0,
    /// A numeric literal.
    Number = 1,
    /// A single non-whitespace symbol that is not a word character.
    Punctuation = 2,
}

impl TokenKind {
    /// Lowercase name of the kind, as used in logs.
    #[must_use]
    #[inline(always)]
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Number => "number",
            TokenKind::Punctuation => "punctuation",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified span of the analyzed text.
///
/// Tokens are slices of the document, not new allocations. They live only as
/// long as the text they were scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'t> {
    /// The matched substring.
    pub text: &'t str,
    /// How the substring was classified.
    pub kind: TokenKind,
    /// Byte offset of the first character in the document.
    pub offset: usize,
}

impl<'t> Token<'t> {
    /// Creates a new token.
    #[inline(always)]
    pub const fn new(text: &'t str, kind: TokenKind, offset: usize) -> Self {
        Self { text, kind, offset }
    }

    /// Byte offset one past the last character of the token.
    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{}", self.kind, self.text, self.offset)
    }
}

/// An ordered list of letter units to look for inside words.
///
/// `["c", "a", "t"]` finds every word containing a `c`, later an `a`, later a
/// `t`. Units may be longer than one character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SequenceQuery {
    units: Vec<String>,
}

impl SequenceQuery {
    /// Creates a query from its units, in order.
    pub fn new<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            units: units.into_iter().map(Into::into).collect(),
        }
    }

    /// The units of this query, in order.
    #[inline]
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Label of the query: the concatenation of its units.
    ///
    /// Used only to name the query's entry in [`PatternMatches`].
    pub fn key(&self) -> String {
        self.units.concat()
    }

    /// Returns `true` if the query has no non-empty unit.
    ///
    /// An empty query matches every word.
    pub fn is_empty(&self) -> bool {
        self.units.iter().all(String::is_empty)
    }
}

impl<S: Into<String>> FromIterator<S> for SequenceQuery {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for SequenceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, unit) in self.units.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{unit:?}")?;
        }
        f.write_str("]")
    }
}

/// Errors raised while validating sequence queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query document has no `sequences` array.
    #[error("query document has no \"sequences\" array")]
    MissingSequences,

    /// A query is not a list of units.
    #[error("query #{index} is not a list of letter units")]
    NotAList {
        /// Zero-based position of the query.
        index: usize,
    },

    /// A unit inside a query is not text.
    #[error("query #{index} has a non-text unit at position {position}")]
    NonTextUnit {
        /// Zero-based position of the query.
        index: usize,
        /// Zero-based position of the unit inside the query.
        position: usize,
    },
}

/// Token texts with their occurrence counts.
///
/// Entries are ordered by count, highest first. Entries with equal counts keep
/// the order in which their tokens first appeared in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Builds a table from counts listed in first-occurrence order.
    ///
    /// The sort is stable, so ties keep first-occurrence order.
    pub fn from_first_seen(mut entries: Vec<(String, usize)>) -> Self {
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no token was counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for `text`, if it occurred.
    pub fn get(&self, text: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(t, _)| t == text)
            .map(|&(_, count)| count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Iterates entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Words matched by each sequence query, keyed by the query's label.
///
/// Entries keep the order of the queries that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternMatches {
    entries: Vec<(String, Vec<String>)>,
}

impl PatternMatches {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the matches for `key`.
    ///
    /// A key seen before keeps its original position; its matches are replaced.
    pub fn insert(&mut self, key: String, matches: Vec<String>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = matches,
            None => self.entries.push((key, matches)),
        }
    }

    /// Matches recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, m)| m.as_slice())
    }

    /// Number of distinct query keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no query was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, matches)` in query order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries.iter().map(|(k, m)| (k.as_str(), m.as_slice()))
    }
}

impl Serialize for PatternMatches {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Field names used when serializing an [`AnalysisResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportLabels {
    /// snake_case English field names.
    #[default]
    Standard,
    /// Polish headings of the legacy report format.
    Legacy,
}

impl ReportLabels {
    /// Field names in report order: word count, number count, capitalized
    /// count, pattern matches, unique words, frequency table.
    #[must_use]
    pub const fn field_names(self) -> [&'static str; 6] {
        match self {
            ReportLabels::Standard => [
                "word_count",
                "number_count",
                "capitalized_count",
                "pattern_matches",
                "unique_words",
                "frequency_table",
            ],
            ReportLabels::Legacy => [
                "Liczba wszystkich słów",
                "Ilość wszystkich liczb",
                "Lista słów rozpoczynających się od wielkiej litery",
                "Lista pasujących sekwencji",
                "Posortowana lista słów",
                "Słownik",
            ],
        }
    }
}

/// Every statistic computed for one document.
///
/// Built once per analysis and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Number of word-rule tokens.
    pub word_count: usize,
    /// Number of numeric literals.
    pub number_count: usize,
    /// Number of words starting with an uppercase ASCII letter.
    pub capitalized_count: usize,
    /// Matched words per sequence query.
    pub pattern_matches: PatternMatches,
    /// Distinct words, sorted case-insensitively.
    pub unique_words: Vec<String>,
    /// Mixed-rule token counts.
    pub frequency_table: FrequencyTable,
}

impl AnalysisResult {
    /// Wraps the result so it serializes with the given field names.
    #[inline]
    pub fn labeled(&self, labels: ReportLabels) -> LabeledReport<'_> {
        LabeledReport {
            result: self,
            labels,
        }
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.labeled(ReportLabels::Standard).serialize(serializer)
    }
}

/// An [`AnalysisResult`] paired with the field names to serialize it under.
#[derive(Debug, Clone, Copy)]
pub struct LabeledReport<'r> {
    result: &'r AnalysisResult,
    labels: ReportLabels,
}

impl Serialize for LabeledReport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let [words, numbers, capitalized, patterns, unique, frequency] =
            self.labels.field_names();
        let r = self.result;

        let mut map = serializer.serialize_map(Some(6))?;
        map.serialize_entry(words, &r.word_count)?;
        map.serialize_entry(numbers, &r.number_count)?;
        map.serialize_entry(capitalized, &r.capitalized_count)?;
        map.serialize_entry(patterns, &r.pattern_matches)?;
        map.serialize_entry(unique, &r.unique_words)?;
        map.serialize_entry(frequency, &r.frequency_table)?;
        map.end()
    }
}
