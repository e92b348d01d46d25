//! Built-in stop-word sets
//!
//! Two sets are provided. The default set holds only the English
//! articles and works fine for titles and similar short phrases. The
//! aggressive set is the conventional large English list and gives
//! better results when the indexed documents are longer.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static DEFAULT: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["a", "an", "of", "the"].into_iter().collect());

static AGGRESSIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "able", "about", "across", "after", "all", "almost", "also", "am", "among", "an",
        "and", "any", "are", "as", "at", "be", "because", "been", "but", "by", "can", "cannot",
        "could", "dear", "did", "do", "does", "either", "else", "ever", "every", "for", "from",
        "get", "got", "had", "has", "have", "he", "her", "hers", "him", "his", "how", "however",
        "i", "if", "in", "into", "is", "it", "its", "just", "least", "let", "like", "likely",
        "may", "me", "might", "most", "must", "my", "neither", "no", "nor", "not", "of", "off",
        "often", "on", "only", "or", "other", "our", "own", "rather", "said", "say", "says",
        "she", "should", "since", "so", "some", "than", "that", "the", "their", "them", "then",
        "there", "these", "they", "this", "tis", "to", "too", "twas", "us", "wants", "was", "we",
        "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
        "would", "yet", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// The default small stop-word set (English articles)
pub fn default_stop_words() -> HashSet<String> {
    DEFAULT.iter().map(|w| w.to_string()).collect()
}

/// The large English stop-word set for longer documents
pub fn aggressive_stop_words() -> HashSet<String> {
    AGGRESSIVE.iter().map(|w| w.to_string()).collect()
}
