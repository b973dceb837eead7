//! Case folding for case-insensitive comparison.
//!
//! Two flavours are needed:
//!
//! - [`lowercase_into`] / [`sort_key`]: full Unicode lowercasing of a whole
//!   string, used as the vocabulary sort key.
//! - [`fold_char`] / [`fold_into`]: one char in, one char out, used by the
//!   sequence matcher so that positions in the folded word line up with
//!   positions in the original.
//!
//! ASCII takes a table lookup; everything else goes through `char::to_lowercase`.

use smallvec::SmallVec;

#[rustfmt::skip]
const LOWERCASE_TABLE: [u8; 128] = [
    0x00,0x01,0x02,0x03,0x04,0x05,0x06,0x07,0x08,0x09,0x0a,0x0b,0x0c,0x0d,0x0e,0x0f,
    0x10,0x11,0x12,0x13,0x14,0x15,0x16,0x17,0x18,0x19,0x1a,0x1b,0x1c,0x1d,0x1e,0x1f,
    0x20,0x21,0x22,0x23,0x24,0x25,0x26,0x27,0x28,0x29,0x2a,0x2b,0x2c,0x2d,0x2e,0x2f,
    0x30,0x31,0x32,0x33,0x34,0x35,0x36,0x37,0x38,0x39,0x3a,0x3b,0x3c,0x3d,0x3e,0x3f,
    0x40,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x5b,0x5c,0x5d,0x5e,0x5f,
    0x60,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x7b,0x7c,0x7d,0x7e,0x7f,
];

/// Folded buffer for one word. Most words fit inline.
pub type FoldedWord = SmallVec<[char; 24]>;

/// Lowercases a single character, keeping only the first char of multi-char
/// expansions (`İ` folds to `i`).
#[inline(always)]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        LOWERCASE_TABLE[c as usize] as char
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// Folds `input` char by char into `out`, clearing it first.
#[inline]
pub fn fold_into(input: &str, out: &mut FoldedWord) {
    out.clear();
    out.extend(input.chars().map(fold_char));
}

/// Lowercases `input` into an existing buffer, clearing it first.
///
/// The ASCII prefix is copied through the table; the rest uses full Unicode
/// lowercasing.
pub fn lowercase_into(input: &str, out: &mut String) {
    out.clear();
    out.reserve(input.len());

    let bytes = input.as_bytes();
    let ascii_len = bytes.iter().take_while(|b| b.is_ascii()).count();
    out.extend(
        bytes[..ascii_len]
            .iter()
            .map(|&b| LOWERCASE_TABLE[b as usize] as char),
    );

    for c in input[ascii_len..].chars() {
        out.extend(c.to_lowercase());
    }
}

/// Case-insensitive sort key for a word.
#[inline]
pub fn sort_key(word: &str) -> String {
    let mut key = String::with_capacity(word.len());
    lowercase_into(word, &mut key);
    key
}
