//! Shortest ordered-subsequence window.
//!
//! Given a folded word and folded units `[u1, .., un]`, find the shortest
//! char range that contains `u1`, then `u2` after it, ..., then `un`, with
//! anything (including nothing) in between.
//!
//! ## How It Works
//!
//! Each round does two linear passes:
//!
//! 1. **Forward**: from `from`, take the earliest occurrence of each unit in
//!    turn. The end of the last unit is the earliest possible window end.
//! 2. **Backward**: from that end, take the latest occurrence of each unit in
//!    reverse. This pulls the window start as far right as it can go.
//!
//! The next round restarts one char past the window start. Rounds stop when
//! the forward pass fails, so no occurrence is ever revisited by backtracking.

use core::ops::Range;

use smallvec::SmallVec;

/// One folded query unit.
pub type Unit = SmallVec<[char; 4]>;

#[inline(always)]
fn unit_at(word: &[char], at: usize, unit: &[char]) -> bool {
    word[at..].starts_with(unit)
}

#[inline]
fn find_forward(word: &[char], from: usize, unit: &[char]) -> Option<usize> {
    let last = word.len().checked_sub(unit.len())?;
    (from..=last).find(|&i| unit_at(word, i, unit))
}

/// Latest occurrence of `unit` ending at or before `until`.
#[inline]
fn find_backward(word: &[char], until: usize, unit: &[char]) -> Option<usize> {
    let last = until.checked_sub(unit.len())?;
    (0..=last).rev().find(|&i| unit_at(word, i, unit))
}

/// Shortest window of `word` containing every unit in order.
///
/// Ties go to the leftmost window. Empty units are ignored; if every unit is
/// empty the result is the empty range at 0.
pub fn shortest_window(word: &[char], units: &[Unit]) -> Option<Range<usize>> {
    let mut units = units.iter().filter(|u| !u.is_empty()).peekable();
    if units.peek().is_none() {
        return Some(0..0);
    }
    let units: SmallVec<[&Unit; 8]> = units.collect();

    let mut best: Option<Range<usize>> = None;
    let mut from = 0usize;

    loop {
        let mut end = from;
        for unit in &units {
            match find_forward(word, end, unit) {
                Some(at) => end = at + unit.len(),
                None => return best,
            }
        }

        let mut start = end;
        for unit in units.iter().rev() {
            match find_backward(word, start, unit) {
                Some(at) => start = at,
                None => return best,
            }
        }

        if best.as_ref().is_none_or(|b| end - start < b.len()) {
            best = Some(start..end);
        }
        from = start + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn units(parts: &[&str]) -> Vec<Unit> {
        parts.iter().map(|p| p.chars().collect()).collect()
    }

    fn window(word: &str, parts: &[&str]) -> Option<Range<usize>> {
        shortest_window(&chars(word), &units(parts))
    }

    #[test]
    fn in_order_match() {
        assert!(window("concatenate", &["c", "a", "t"]).is_some());
    }

    #[test]
    fn wrong_order_fails() {
        assert_eq!(window("concatenate", &["t", "a", "c"]), None);
    }

    #[test]
    fn picks_the_shortest_span() {
        // c(0) .. a(4) t(5) is longer than c(3) a(4) t(5).
        assert_eq!(window("concatenate", &["c", "a", "t"]), Some(3..6));
    }

    #[test]
    fn leftmost_among_equal_spans() {
        assert_eq!(window("abxab", &["a", "b"]), Some(0..2));
    }

    #[test]
    fn gaps_allowed() {
        assert_eq!(window("cxxaxxt", &["c", "a", "t"]), Some(0..7));
    }

    #[test]
    fn multi_char_units() {
        assert_eq!(window("strength", &["st", "th"]), Some(0..8));
        assert_eq!(window("stth", &["st", "th"]), Some(0..4));
        assert_eq!(window("sth", &["st", "th"]), None);
    }

    #[test]
    fn repeated_units() {
        assert_eq!(window("banana", &["a", "a", "a"]), Some(1..6));
        assert_eq!(window("ban", &["a", "a"]), None);
    }

    #[test]
    fn unit_longer_than_word() {
        assert_eq!(window("ab", &["abc"]), None);
    }

    #[test]
    fn empty_units() {
        assert_eq!(window("anything", &[]), Some(0..0));
        assert_eq!(window("anything", &["", ""]), Some(0..0));
        assert_eq!(window("cat", &["", "a", ""]), Some(1..2));
    }

    #[test]
    fn long_word_stays_fast() {
        let word: Vec<char> = "a".repeat(20_000).chars().chain(['b']).collect();
        let q = units(&["a", "a", "b"]);
        assert_eq!(shortest_window(&word, &q), Some(19_998..20_001));
    }
}
