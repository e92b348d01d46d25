//! Search requests
//!
//! [`SearchRequest`] is the universal request type for both the raw
//! string pipeline ([`crate::Engine::search`]) and the JSON pipeline
//! ([`crate::Engine::search_json`]). It carries the phrase, an optional
//! result limit, a boost map, and pluggable mapper/filter chains over
//! the payload type.

use std::collections::BTreeMap;
use std::fmt;

/// Request for a search against the index
///
/// `T` is the payload type flowing through the mapper/filter chains:
/// `String` for raw payloads, any `DeserializeOwned` type for the JSON
/// pipeline.
///
/// # Example
///
/// ```
/// use lexa_engine::SearchRequest;
///
/// let request = SearchRequest::new("red car")
///     .with_limit(10)
///     .boost("car", 2.0)
///     .filter(|payload: &String| !payload.is_empty());
/// ```
pub struct SearchRequest<'a, T = String> {
    pub(crate) phrase: String,
    pub(crate) limit: Option<usize>,
    pub(crate) boosts: BTreeMap<String, f64>,
    pub(crate) mappers: Vec<Box<dyn Fn(T) -> T + 'a>>,
    pub(crate) filters: Vec<Box<dyn Fn(&T) -> bool + 'a>>,
}

impl<'a, T> SearchRequest<'a, T> {
    /// Create a request for a phrase
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            limit: None,
            boosts: BTreeMap::new(),
            mappers: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Builder: stop after collecting `limit` results
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Builder: boost results whose composite key contains `part`
    ///
    /// A factor above 1.0 moves matching results earlier; the member's
    /// score is multiplied by the reciprocal of the factor.
    pub fn boost(mut self, part: impl Into<String>, factor: f64) -> Self {
        self.boosts.insert(part.into(), factor);
        self
    }

    /// Builder: append a payload transform to the mapper chain
    pub fn map(mut self, mapper: impl Fn(T) -> T + 'a) -> Self {
        self.mappers.push(Box::new(mapper));
        self
    }

    /// Builder: append a predicate to the filter chain (AND semantics)
    pub fn filter(mut self, filter: impl Fn(&T) -> bool + 'a) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Canonical serialization of the boost map for cache signatures
    ///
    /// Sorted `part:factor` pairs joined by `|`; empty string when no
    /// boosts are set.
    pub(crate) fn boost_signature(&self) -> String {
        self.boosts
            .iter()
            .map(|(part, factor)| format!("{part}:{factor}"))
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl<T> fmt::Debug for SearchRequest<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchRequest")
            .field("phrase", &self.phrase)
            .field("limit", &self.limit)
            .field("boosts", &self.boosts)
            .field("mappers", &self.mappers.len())
            .field("filters", &self.filters.len())
            .finish()
    }
}
