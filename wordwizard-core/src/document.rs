//! The analyzed text and report assembly.

use tracing::debug;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};
use wordwizard_types::{AnalysisResult, FrequencyTable, PatternMatches, SequenceQuery};

use crate::analyzer::{
    extract_capitalized, extract_mixed, extract_numbers, extract_words, Capitalized, Mixed,
    Numbers, Words,
};
use crate::matcher::match_sequences;
use crate::stats;

/// A text held in memory for analysis.
///
/// The text is stored in Unicode NFC, so `"z\u{307}"` and `"ż"` read the same
/// to every rule. After that it is never modified. Every method is a pure
/// function of it, so a `Document` can be shared across threads and analyzed
/// concurrently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
}

/// `text` composed into NFC, or `None` when it already is.
fn compose(text: &str) -> Option<String> {
    if text.is_ascii() || is_nfc_quick(text.chars()) == IsNormalized::Yes {
        return None;
    }
    let composed: String = text.nfc().collect();
    (composed != text).then_some(composed)
}

impl Document {
    /// Wraps already decoded text, composing it into NFC.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let composed = compose(&text);
        Self {
            text: composed.unwrap_or(text),
        }
    }

    /// The full text, in NFC.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Word-rule tokens, see [`extract_words`].
    pub fn words(&self) -> Words<'_> {
        extract_words(&self.text)
    }

    /// Numeric literals, see [`extract_numbers`].
    pub fn numbers(&self) -> Numbers<'_> {
        extract_numbers(&self.text)
    }

    /// Capitalized ASCII word runs, see [`extract_capitalized`].
    pub fn capitalized(&self) -> Capitalized<'_> {
        extract_capitalized(&self.text)
    }

    /// Mixed-rule tokens, see [`extract_mixed`].
    pub fn mixed(&self) -> Mixed<'_> {
        extract_mixed(&self.text)
    }

    /// Mixed-rule token counts, most frequent first.
    pub fn word_frequency(&self) -> FrequencyTable {
        stats::word_frequency(&self.text)
    }

    /// Words containing each query as an ordered subsequence, keyed by
    /// the query's joined units.
    pub fn match_sequences(&self, queries: &[SequenceQuery]) -> PatternMatches {
        match_sequences(&self.text, queries)
    }

    /// Computes every statistic for this text.
    pub fn analyze(&self, queries: &[SequenceQuery]) -> AnalysisResult {
        let text = self.as_str();

        let word_count = stats::count_words(text);
        let number_count = stats::count_numbers(text);
        let capitalized_count = extract_capitalized(text).count();
        debug!(word_count, number_count, capitalized_count, "token counts");

        let pattern_matches = match_sequences(text, queries);
        debug!(queries = queries.len(), keys = pattern_matches.len(), "sequences matched");

        let unique_words: Vec<String> = stats::unique_sorted_words(text)
            .into_iter()
            .map(str::to_owned)
            .collect();
        let frequency_table = stats::word_frequency(text);
        debug!(
            unique = unique_words.len(),
            distinct_tokens = frequency_table.len(),
            "vocabulary built"
        );

        AnalysisResult {
            word_count,
            number_count,
            capitalized_count,
            pattern_matches,
            unique_words,
            frequency_table,
        }
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::from("Ala ma kota. Kot ma 2 łapy, a Ala ma 3.5 kota!")
    }

    #[test]
    fn analyze_sample() {
        let queries = [SequenceQuery::new(["k", "t"])];
        let result = sample().analyze(&queries);

        assert_eq!(result.word_count, 10);
        assert_eq!(result.number_count, 2);
        assert_eq!(result.capitalized_count, 3);
        assert_eq!(
            result.pattern_matches.get("kt"),
            Some(&["kota", "Kot", "kota"].map(String::from)[..])
        );
        assert_eq!(
            result.unique_words,
            vec!["a", "Ala", "Kot", "kota", "ma", "łapy"]
        );
        assert_eq!(result.frequency_table.get("ma"), Some(3));
        assert_eq!(result.frequency_table.iter().next(), Some(("ma", 3)));
    }

    #[test]
    fn analyze_empty() {
        let result = Document::default().analyze(&[SequenceQuery::new(["a"])]);
        assert_eq!(result.word_count, 0);
        assert_eq!(result.number_count, 0);
        assert_eq!(result.capitalized_count, 0);
        assert!(result.unique_words.is_empty());
        assert!(result.frequency_table.is_empty());
        assert_eq!(result.pattern_matches.get("a"), Some(&[][..]));
    }

    #[test]
    fn analyze_is_idempotent() {
        let doc = sample();
        let queries = [SequenceQuery::new(["a"]), SequenceQuery::default()];
        assert_eq!(doc.analyze(&queries), doc.analyze(&queries));
    }

    #[test]
    fn accessors_agree_with_free_functions() {
        let doc = sample();
        assert_eq!(doc.words().count(), stats::count_words(doc.as_str()));
        assert_eq!(doc.numbers().count(), stats::count_numbers(doc.as_str()));
        assert_eq!(doc.word_frequency().total(), doc.mixed().count());
        assert_eq!(doc.capitalized().count(), 3);
    }

    #[test]
    fn text_is_composed() {
        let decomposed = "Z\u{307}o\u{301}\u{142}w i z\u{307}aba";
        let doc = Document::from(decomposed);
        assert_eq!(doc.as_str(), "Żółw i żaba");
        assert_eq!(doc, Document::from(String::from("Żółw i żaba")));
        assert_eq!(doc.words().count(), 3);
    }

    #[test]
    fn composed_text_is_kept() {
        for text in ["plain ascii", "Zażółć gęślą jaźń", ""] {
            assert_eq!(Document::new(text).as_str(), text);
        }
    }

    #[test]
    fn document_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Document>();
    }
}
