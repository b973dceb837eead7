//! Token frequency table.

use rustc_hash::FxHashMap;
use wordwizard_types::FrequencyTable;

use crate::analyzer::extract_mixed;

/// Occurrence count of every mixed-rule token, highest count first.
///
/// Keys are exact token texts. Ties keep the order in which the tokens first
/// appeared, so the table is identical across runs.
pub fn word_frequency(text: &str) -> FrequencyTable {
    let mut slots: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for token in extract_mixed(text) {
        match slots.get(token.text) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(token.text, counts.len());
                counts.push((token.text, 1));
            }
        }
    }

    FrequencyTable::from_first_seen(
        counts
            .into_iter()
            .map(|(text, count)| (text.to_owned(), count))
            .collect(),
    )
}
