//! Engine configuration
//!
//! Provides a builder-style configuration struct covering every
//! recognized option: minimum prefix length for fan-out, key namespace,
//! stop-word set, intersection-cache TTL, and scorer precision.
//! Connection parameters belong to whichever `Store` implementation the
//! caller constructs, not to the engine.

use crate::stopwords;
use std::collections::HashSet;
use std::time::Duration;

/// Configuration for an autocomplete engine
///
/// # Example
///
/// ```
/// use lexa_core::EngineConfig;
/// use std::time::Duration;
///
/// let config = EngineConfig::default()
///     .min_word_len(3)
///     .namespace("titles")
///     .cache_ttl(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum prefix length produced by the fan-out (default 2)
    pub min_word_len: usize,
    /// Key namespace prefix; all store keys start with `{namespace}:`
    pub namespace: String,
    /// Words dropped during phrase normalization
    pub stop_words: HashSet<String>,
    /// Time-to-live for multi-word intersection cache entries
    pub cache_ttl: Duration,
    /// Number of leading characters the scorer considers
    pub score_width: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_word_len: 2,
            namespace: "ac".to_string(),
            stop_words: stopwords::default_stop_words(),
            cache_ttl: Duration::from_secs(300),
            score_width: 20,
        }
    }
}

impl EngineConfig {
    /// Builder: set the minimum prefix length
    pub fn min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = len;
        self
    }

    /// Builder: set the key namespace prefix
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Builder: replace the stop-word set
    pub fn stop_words(mut self, words: HashSet<String>) -> Self {
        self.stop_words = words;
        self
    }

    /// Builder: use the large English stop-word set
    ///
    /// Better suited to indexing longer documents; the default small set
    /// works fine for titles and similar short phrases.
    pub fn aggressive_stop_words(mut self) -> Self {
        self.stop_words = stopwords::aggressive_stop_words();
        self
    }

    /// Builder: set the intersection-cache TTL
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Builder: set the scorer precision (leading characters considered)
    pub fn score_width(mut self, width: usize) -> Self {
        self.score_width = width;
        self
    }
}
