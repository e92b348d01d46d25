//! Alphabetical scorer
//!
//! Maps a normalized phrase to an integer whose numeric ordering matches
//! the phrase's lexicographic ordering, so an ordered-score data
//! structure doubles as an alphabetically sorted index.
//!
//! The first `width` characters are read as digits of a base-27 number:
//! letters map to digits 2..=27, everything else (and positions past the
//! end of the string) maps to the filler digit 1, which sorts before any
//! real letter. Two phrases that only diverge after `width` characters
//! collapse to the same score; that precision loss is bounded by
//! configuration and accepted.

const BASE: u128 = 27;
const FILLER: u128 = 1;

/// Default number of leading characters considered
pub const DEFAULT_WIDTH: usize = 20;

/// Widths beyond this would overflow the u128 accumulator
pub const MAX_WIDTH: usize = 25;

/// Score a normalized key over its first `width` characters
///
/// Property: for keys that differ within the first `width` characters,
/// `score(a) < score(b)` iff the digit sequences of `a` and `b` compare
/// lexicographically. Widths above [`MAX_WIDTH`] are clamped.
pub fn score(key: &str, width: usize) -> u128 {
    let width = width.min(MAX_WIDTH);
    let mut digits = key.chars().map(digit).chain(std::iter::repeat(FILLER));

    let mut total: u128 = 0;
    for i in 0..width {
        // The repeat() tail makes next() infallible
        let d = digits.next().unwrap_or(FILLER);
        total += d * BASE.pow((width - i) as u32);
    }
    total
}

fn digit(c: char) -> u128 {
    if c.is_ascii_lowercase() {
        (c as u128) - ('a' as u128) + 2
    } else {
        FILLER
    }
}
