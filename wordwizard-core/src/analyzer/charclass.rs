//! Character classes used by the extraction rules.
//!
//! The rules deliberately disagree on what a "word character" is:
//!
//! | predicate           | letters                  | digits | `_` | used by                    |
//! |---------------------|--------------------------|--------|-----|----------------------------|
//! | [`is_word_letter`]  | ASCII + Polish diacritics| no     | no  | word rule (token body)     |
//! | [`is_unicode_word`] | any Unicode letter       | yes    | yes | word/number rule boundaries, matcher |
//! | [`is_ascii_word`]   | ASCII only               | yes    | yes | capitalized and mixed rules|
//!
//! Digits come in two flavours as well: [`is_decimal_digit`] (any Unicode
//! decimal digit, number rule) and [`is_ascii_digit`] (mixed rule).
//!
//! Keep them separate: merging them changes the output for any text with
//! non-ASCII letters.

/// Letters accepted by the word rule in addition to ASCII `A-Z a-z`.
pub const EXTRA_WORD_LETTERS: &str = "ąęółńśćżźĄĘÓŁŃŚĆŻŹ";

/// Letter of the word rule: ASCII Latin or one of [`EXTRA_WORD_LETTERS`].
#[inline(always)]
pub fn is_word_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(
            c,
            'ą' | 'ę' | 'ó' | 'ł' | 'ń' | 'ś' | 'ć' | 'ż' | 'ź'
                | 'Ą' | 'Ę' | 'Ó' | 'Ł' | 'Ń' | 'Ś' | 'Ć' | 'Ż' | 'Ź'
        )
}

/// Unicode word character: alphanumeric or underscore.
#[inline(always)]
pub fn is_unicode_word(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// ASCII word character: `[A-Za-z0-9_]`.
#[inline(always)]
pub const fn is_ascii_word(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// First code point of every block of ten Unicode decimal digits (category Nd).
#[rustfmt::skip]
const DECIMAL_ZEROS: [u32; 66] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6,
    0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0,
    0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620,
    0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066,
    0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0,
    0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2,
    0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E950, 0x1FBF0,
];

/// Unicode decimal digit: ASCII `0-9`, Arabic-Indic, Devanagari, fullwidth, ...
///
/// Superscripts, fractions and Roman numerals are numeric but not decimal
/// digits, and are rejected.
#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    let c = c as u32;
    match DECIMAL_ZEROS.binary_search(&c) {
        Ok(_) => true,
        Err(0) => false,
        Err(i) => c - DECIMAL_ZEROS[i - 1] < 10,
    }
}

/// ASCII digit `0-9`.
#[inline(always)]
pub const fn is_ascii_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` if the character ending at byte `pos` is not in `class`.
///
/// Position 0 always counts as a boundary.
#[inline]
pub fn preceded_by_non(text: &str, pos: usize, class: fn(char) -> bool) -> bool {
    text[..pos].chars().next_back().is_none_or(|c| !class(c))
}

/// Returns `true` if the character starting at byte `pos` is not in `class`.
///
/// The end of the text always counts as a boundary.
#[inline]
pub fn followed_by_non(text: &str, pos: usize, class: fn(char) -> bool) -> bool {
    text[pos..].chars().next().is_none_or(|c| !class(c))
}

/// Maximal runs of characters in one class, left to right.
///
/// Yields `(byte_offset, run)`. Every run is bounded by a character outside
/// the class (or a string edge) on both sides.
#[derive(Debug, Clone)]
pub struct Runs<'t> {
    text: &'t str,
    pos: usize,
    class: fn(char) -> bool,
}

impl<'t> Runs<'t> {
    /// Creates a run scanner over `text`.
    #[inline]
    pub const fn new(text: &'t str, class: fn(char) -> bool) -> Self {
        Self {
            text,
            pos: 0,
            class,
        }
    }
}

impl<'t> Iterator for Runs<'t> {
    type Item = (usize, &'t str);

    fn next(&mut self) -> Option<Self::Item> {
        let class = self.class;
        let rest = &self.text[self.pos..];
        let start = self.pos + rest.find(class)?;

        let tail = &self.text[start..];
        let len = tail.find(|c: char| !class(c)).unwrap_or(tail.len());
        self.pos = start + len;

        Some((start, &self.text[start..start + len]))
    }
}
