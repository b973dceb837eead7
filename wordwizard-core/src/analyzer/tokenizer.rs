//! Streaming Tokenizer Module
//!
//! Splits raw text into typed tokens under several independent rules. Each
//! rule is a lazy iterator over `&str` slices of the input: nothing is copied,
//! and an iterator can be recreated at any time to rescan the same text.
//!
//! ## The Rules
//!
//! ```text
//! input:        "Ala ma 2 koty_3, łódź!"
//! words:        Ala ma łódź                     (letters only, diacritics allowed)
//! capitalized:  Ala                             (ASCII word run, uppercase first)
//! mixed:        Ala ma 2 koty_3 , ł ó d ź !     (ASCII word runs, then symbols)
//! ```
//!
//! `koty_3` is not a word (underscore and digit), and in the mixed rule the
//! Polish letters fall out of the ASCII word class and become single-char
//! symbols. Both are intended.

use wordwizard_types::{Token, TokenKind};

use super::charclass::{
    is_ascii_digit, is_ascii_word, is_unicode_word, is_word_letter, preceded_by_non, Runs,
};
use super::number::longest_literal;

/// Word-rule tokens. Created by [`extract_words`](super::extract_words).
///
/// A run of Unicode word characters becomes a token only when every char in
/// it is a word letter; `abc123`, `snake_case` and `café` yield nothing.
#[derive(Debug, Clone)]
pub struct Words<'t> {
    runs: Runs<'t>,
}

impl<'t> Words<'t> {
    #[inline]
    pub(crate) const fn new(text: &'t str) -> Self {
        Self {
            runs: Runs::new(text, is_unicode_word),
        }
    }
}

impl<'t> Iterator for Words<'t> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runs
            .by_ref()
            .find(|(_, run)| run.chars().all(is_word_letter))
            .map(|(offset, run)| Token::new(run, TokenKind::Word, offset))
    }
}

/// ASCII word runs starting with an uppercase letter.
/// Created by [`extract_capitalized`](super::extract_capitalized).
#[derive(Debug, Clone)]
pub struct Capitalized<'t> {
    runs: Runs<'t>,
}

impl<'t> Capitalized<'t> {
    #[inline]
    pub(crate) const fn new(text: &'t str) -> Self {
        Self {
            runs: Runs::new(text, is_ascii_word),
        }
    }
}

impl<'t> Iterator for Capitalized<'t> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runs
            .by_ref()
            .find(|(_, run)| run.as_bytes()[0].is_ascii_uppercase())
            .map(|(offset, run)| Token::new(run, TokenKind::Word, offset))
    }
}

/// Words, numbers and punctuation from one left-to-right scan.
/// Created by [`extract_mixed`](super::extract_mixed).
///
/// At each position the first matching alternative wins:
///
/// 1. a maximal ASCII word run starting on a boundary
///    (`Number` if it is all digits, `Word` otherwise)
/// 2. a numeric literal over ASCII digits
/// 3. a single char that is neither whitespace nor an ASCII word char
///
/// Whitespace is skipped. Because alternative 1 always consumes whole runs,
/// alternative 2 only fires for a digit glued to a preceding word char, which
/// a left-to-right scan never lands on.
#[derive(Debug, Clone)]
pub struct Mixed<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Mixed<'t> {
    #[inline]
    pub(crate) const fn new(text: &'t str) -> Self {
        Self { text, pos: 0 }
    }

    #[inline(always)]
    fn emit(&mut self, start: usize, end: usize, kind: TokenKind) -> Token<'t> {
        self.pos = end;
        Token::new(&self.text[start..end], kind, start)
    }
}

impl<'t> Iterator for Mixed<'t> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;

        while let Some(c) = text[self.pos..].chars().next() {
            let start = self.pos;

            if c.is_whitespace() {
                self.pos += c.len_utf8();
                continue;
            }

            if is_ascii_word(c) && preceded_by_non(text, start, is_ascii_word) {
                let run = &text[start..];
                let len = run.find(|c: char| !is_ascii_word(c)).unwrap_or(run.len());
                let kind = if run.as_bytes()[..len].iter().all(u8::is_ascii_digit) {
                    TokenKind::Number
                } else {
                    TokenKind::Word
                };
                return Some(self.emit(start, start + len, kind));
            }

            if let Some(end) = longest_literal(text, start, is_ascii_digit) {
                return Some(self.emit(start, end, TokenKind::Number));
            }

            if !is_ascii_word(c) {
                return Some(self.emit(start, start + c.len_utf8(), TokenKind::Punctuation));
            }

            self.pos += c.len_utf8();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'t>(it: impl Iterator<Item = Token<'t>>) -> Vec<&'t str> {
        it.map(|t| t.text).collect()
    }

    #[test]
    fn words_letters_only() {
        assert_eq!(
            texts(Words::new("The cat, 2 dogs and abc123 x_y.")),
            vec!["The", "cat", "dogs", "and"]
        );
    }

    #[test]
    fn words_accept_polish_diacritics() {
        assert_eq!(
            texts(Words::new("Zażółć gęślą jaźń")),
            vec!["Zażółć", "gęślą", "jaźń"]
        );
    }

    #[test]
    fn words_reject_other_diacritics() {
        // 'é' is a word char for the boundary but not a word letter.
        assert!(texts(Words::new("café naïve")).is_empty());
    }

    #[test]
    fn words_split_on_hyphen_and_apostrophe() {
        assert_eq!(
            texts(Words::new("well-known don't")),
            vec!["well", "known", "don", "t"]
        );
    }

    #[test]
    fn capitalized_basic() {
        assert_eq!(
            texts(Capitalized::new("Alice met Bob_2 near the River.")),
            vec!["Alice", "Bob_2", "River"]
        );
    }

    #[test]
    fn capitalized_is_ascii_only() {
        // 'Ł' is not ASCII, and 'ż' ends the ASCII run after "Za".
        assert_eq!(texts(Capitalized::new("Łódź Zażółć")), vec!["Za"]);
    }

    #[test]
    fn capitalized_requires_uppercase_first() {
        assert!(texts(Capitalized::new("iPhone 2Fast _Hidden")).is_empty());
    }

    #[test]
    fn mixed_splits_words_numbers_symbols() {
        let toks: Vec<_> = Mixed::new("Hi, 42 cats!").collect();
        let got: Vec<_> = toks.iter().map(|t| (t.text, t.kind)).collect();
        assert_eq!(
            got,
            vec![
                ("Hi", TokenKind::Word),
                (",", TokenKind::Punctuation),
                ("42", TokenKind::Number),
                ("cats", TokenKind::Word),
                ("!", TokenKind::Punctuation),
            ]
        );
    }

    #[test]
    fn mixed_breaks_decimal_at_period() {
        assert_eq!(texts(Mixed::new("3.14")), vec!["3", ".", "14"]);
        assert_eq!(texts(Mixed::new("1e-5")), vec!["1e", "-", "5"]);
    }

    #[test]
    fn mixed_keeps_underscore_runs() {
        assert_eq!(texts(Mixed::new("snake_case_1")), vec!["snake_case_1"]);
    }

    #[test]
    fn mixed_diacritics_become_symbols() {
        assert_eq!(texts(Mixed::new("zażółć")), vec!["za", "ż", "ó", "ł", "ć"]);
    }

    #[test]
    fn mixed_non_ascii_digits_become_symbols() {
        let got: Vec<_> = Mixed::new("٣ 7").map(|t| (t.text, t.kind)).collect();
        assert_eq!(
            got,
            vec![("٣", TokenKind::Punctuation), ("7", TokenKind::Number)]
        );
    }

    #[test]
    fn mixed_skips_all_whitespace() {
        assert!(texts(Mixed::new(" \t\n\u{a0}")).is_empty());
    }

    #[test]
    fn iterators_are_restartable() {
        let text = "One two 3";
        let words = Words::new(text);
        assert_eq!(texts(words.clone()), texts(words));
        assert_eq!(texts(Mixed::new(text)), texts(Mixed::new(text)));
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello, world 7");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        for t in Mixed::new(&input) {
            let ptr = t.text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
            assert_eq!(&input[t.offset..t.end()], t.text);
        }
    }
}
