//! Numeric literal grammar.
//!
//! A literal is `digits ('.' digits)? ([eE] [+-]? digits)?`. The number rule
//! accepts any Unicode decimal digit; the mixed rule passes an ASCII-only class.
//!
//! When a literal has to end on a word boundary, the longest form is tried
//! first and shorter forms are tried after it, in this order:
//!
//! 1. mantissa with fraction, with exponent
//! 2. mantissa with fraction
//! 3. integer part, with exponent
//! 4. integer part
//!
//! So `3.14abc` still yields `3` (the `.` after it is a boundary), while
//! `1e5x` yields nothing.

use smallvec::SmallVec;
use wordwizard_types::{Token, TokenKind};

use super::charclass::{followed_by_non, is_decimal_digit, is_unicode_word, preceded_by_non};

/// Byte end of the run of `digit` chars starting at `from`.
#[inline(always)]
fn digits_end(text: &str, from: usize, digit: fn(char) -> bool) -> usize {
    let tail = &text[from..];
    from + tail.find(|c: char| !digit(c)).unwrap_or(tail.len())
}

/// `[eE] [+-]? digits` starting at `from`, if present.
#[inline]
fn exponent_end(text: &str, from: usize, digit: fn(char) -> bool) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = from;
    if !matches!(bytes.get(i), Some(b'e' | b'E')) {
        return None;
    }
    i += 1;
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }
    let end = digits_end(text, i, digit);
    (end > i).then_some(end)
}

/// Candidate literal ends for a literal starting at `start`, longest form first.
///
/// `digit` decides what counts as a digit. Empty when `start` is not one.
pub fn literal_ends(text: &str, start: usize, digit: fn(char) -> bool) -> SmallVec<[usize; 4]> {
    let mut ends = SmallVec::new();

    let int_end = digits_end(text, start, digit);
    if int_end == start {
        return ends;
    }

    let mut mantissas: SmallVec<[usize; 2]> = SmallVec::new();
    if text.as_bytes().get(int_end) == Some(&b'.') {
        let frac_end = digits_end(text, int_end + 1, digit);
        if frac_end > int_end + 1 {
            mantissas.push(frac_end);
        }
    }
    mantissas.push(int_end);

    for m in mantissas {
        if let Some(e) = exponent_end(text, m, digit) {
            ends.push(e);
        }
        ends.push(m);
    }
    ends
}

/// End of the longest literal starting at `start`, ignoring word boundaries.
#[inline]
pub fn longest_literal(text: &str, start: usize, digit: fn(char) -> bool) -> Option<usize> {
    literal_ends(text, start, digit).first().copied()
}

/// End of the first literal form starting at `start` that is followed by a
/// word boundary. `start` itself must already be a boundary.
///
/// Any Unicode decimal digit counts, so `٣٤` and `４２` are literals too.
#[inline]
pub fn bounded_literal(text: &str, start: usize) -> Option<usize> {
    literal_ends(text, start, is_decimal_digit)
        .into_iter()
        .find(|&end| followed_by_non(text, end, is_unicode_word))
}

/// Numeric literals bounded by word boundaries, left to right.
///
/// Created by [`extract_numbers`](super::extract_numbers).
#[derive(Debug, Clone)]
pub struct Numbers<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Numbers<'t> {
    #[inline]
    pub(crate) const fn new(text: &'t str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'t> Iterator for Numbers<'t> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;

        while self.pos < text.len() {
            let start = self.pos + text[self.pos..].find(is_decimal_digit)?;

            if preceded_by_non(text, start, is_unicode_word) {
                if let Some(end) = bounded_literal(text, start) {
                    self.pos = end;
                    return Some(Token::new(&text[start..end], TokenKind::Number, start));
                }
            }
            self.pos = start + text[start..].chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}
