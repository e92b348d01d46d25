//! Phrase normalization
//!
//! Turns raw phrases into the token form used everywhere else: lowercase,
//! strip every character outside `[a-z0-9_\-]` and whitespace, split on
//! whitespace, drop stop words. Pure functions, no state.

use std::collections::HashSet;

/// Normalize a phrase into its ordered token sequence
pub fn normalize(phrase: &str, stop_words: &HashSet<String>) -> Vec<String> {
    let cleaned: String = phrase
        .to_lowercase()
        .chars()
        .filter(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-' || c.is_whitespace()
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| !stop_words.contains(*word))
        .map(String::from)
        .collect()
}

/// Canonical single-string form of a phrase: normalized tokens joined by
/// single spaces. This is the input to the alphabetical scorer.
pub fn normalize_key(phrase: &str, stop_words: &HashSet<String>) -> String {
    normalize(phrase, stop_words).join(" ")
}
