use wordwizard_core::analyzer::{extract_mixed, extract_numbers, extract_words};
use wordwizard_core::{
    capitalized_words, count_numbers, count_words, match_sequences, unique_sorted_words,
    word_frequency, Document, SequenceQuery,
};

const CORPUS: &[&str] = &[
    "",
    "   \n\t  ",
    "Value is 3.14e-10 and 42.",
    "Alice met Bob_2 near the River.",
    "cat dog concatenate",
    "Zażółć gęślą jaźń. Łódź, 2024-05-01; café x_y 1e5x.",
    "The THE the tHe, a A a! 7 7 7.0",
    "well-known (and) [bracketed] {words}: e-mail@example.com",
];

fn q(units: &[&str]) -> SequenceQuery {
    SequenceQuery::new(units.iter().copied())
}

#[test]
fn word_count_equals_extraction_length() {
    for text in CORPUS {
        assert_eq!(count_words(text), extract_words(text).count(), "{text:?}");
        assert_eq!(count_numbers(text), extract_numbers(text).count(), "{text:?}");
    }
}

#[test]
fn vocabulary_is_unique_and_sorted() {
    for text in CORPUS {
        let words = unique_sorted_words(text);

        let mut dedup = words.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), words.len(), "{text:?}");

        for pair in words.windows(2) {
            assert!(
                pair[0].to_lowercase() <= pair[1].to_lowercase(),
                "{:?} before {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn frequency_sums_to_token_count() {
    for text in CORPUS {
        let table = word_frequency(text);
        assert_eq!(table.total(), extract_mixed(text).count(), "{text:?}");

        if let Some((_, top)) = table.iter().next() {
            assert!(table.iter().all(|(_, c)| c <= top), "{text:?}");
        };
    }
}

#[test]
fn operations_are_idempotent() {
    let queries = [q(&["c", "a", "t"]), q(&["ż"]), q(&[])];
    for text in CORPUS {
        let doc = Document::from(*text);
        assert_eq!(doc.analyze(&queries), doc.analyze(&queries));
        assert_eq!(unique_sorted_words(text), unique_sorted_words(text));
        assert_eq!(word_frequency(text), word_frequency(text));
    }
}

#[test]
fn ordered_subsequence_boundary() {
    let m = match_sequences("concatenate", &[q(&["c", "a", "t"]), q(&["t", "a", "c"])]);
    assert_eq!(m.get("cat"), Some(&["concatenate".to_string()][..]));
    assert_eq!(m.get("tac"), Some(&[][..]));
}

#[test]
fn matches_anchor_to_words() {
    let m = match_sequences("cat dog concatenate", &[q(&["c", "a", "t"])]);
    let got: Vec<&str> = m
        .get("cat")
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(got, vec!["cat", "concatenate"]);
}

#[test]
fn numeric_extraction() {
    let text = "Value is 3.14e-10 and 42.";
    assert_eq!(count_numbers(text), 2);
    let literals: Vec<&str> = extract_numbers(text).map(|t| t.text).collect();
    assert_eq!(literals, vec!["3.14e-10", "42"]);
}

#[test]
fn numbers_in_other_scripts() {
    let text = "٣٤ and ４２ and 7";
    assert_eq!(count_numbers(text), 3);
    let literals: Vec<&str> = extract_numbers(text).map(|t| t.text).collect();
    assert_eq!(literals, vec!["٣٤", "４２", "7"]);
}

#[test]
fn counts_ignore_composition_form() {
    let composed = "Zażółć gęślą jaźń";
    let decomposed = "Zaz\u{307}o\u{301}\u{142}c\u{301} ge\u{328}s\u{301}la\u{328} jaz\u{301}n\u{301}";
    assert_ne!(composed, decomposed);

    let queries = [q(&["ż", "ł"]), q(&["ś", "ą"])];
    let nfc = Document::from(composed).analyze(&queries);
    let nfd = Document::from(decomposed).analyze(&queries);

    assert_eq!(nfc.word_count, 3);
    assert_eq!(nfd.word_count, 3);
    assert_eq!(nfc, nfd);
    assert_eq!(
        nfd.pattern_matches.get("żł"),
        Some(&["Zażółć".to_string()][..])
    );
}

#[test]
fn capitalization() {
    assert_eq!(
        capitalized_words("Alice met Bob_2 near the River."),
        vec!["Alice", "Bob_2", "River"]
    );
}

#[test]
fn empty_input() {
    let result = Document::from("").analyze(&[]);
    assert_eq!(result.word_count, 0);
    assert_eq!(result.number_count, 0);
    assert_eq!(result.capitalized_count, 0);
    assert!(result.pattern_matches.is_empty());
    assert!(result.unique_words.is_empty());
    assert!(result.frequency_table.is_empty());
}

#[test]
fn rules_disagree_on_diacritics() {
    // Word rule keeps Polish letters; mixed rule splits on them.
    let text = "żółw";
    assert_eq!(extract_words(text).map(|t| t.text).collect::<Vec<_>>(), vec!["żółw"]);
    assert_eq!(
        extract_mixed(text).map(|t| t.text).collect::<Vec<_>>(),
        vec!["ż", "ó", "ł", "w"]
    );
}

#[test]
fn components_run_concurrently() {
    let doc = Document::from(CORPUS.join(" "));
    let queries = vec![q(&["a"]), q(&["e", "e"])];

    let (words, matches) = std::thread::scope(|s| {
        let words = s.spawn(|| count_words(doc.as_str()));
        let matches = s.spawn(|| doc.match_sequences(&queries));
        (words.join().unwrap(), matches.join().unwrap())
    });

    assert_eq!(words, count_words(doc.as_str()));
    assert_eq!(matches, match_sequences(doc.as_str(), &queries));
}
