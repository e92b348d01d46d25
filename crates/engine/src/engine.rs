//! Index writer/remover and the search pipeline
//!
//! ## Design
//!
//! The engine is a stateless facade over a [`Store`] implementation. It
//! holds no in-memory state beyond its configuration; every public
//! operation is a bounded sequence of store calls. Writes and removals
//! are handed to the store as one batch so partial application is
//! minimized; the store is the sole source of atomicity guarantees.
//!
//! ## Caching
//!
//! Multi-word (and boosted) queries resolve through a TTL-bounded
//! intersection cache keyed by the sorted token list plus the canonical
//! boost signature. Cache entries are never invalidated by writes or
//! removals, so they may serve stale members until the TTL lapses; that
//! staleness window is part of the contract. Concurrent callers racing
//! on the same missing entry may compute it redundantly, which is
//! harmless.

use crate::keys::KeySpace;
use crate::normalize::{normalize, normalize_key};
use crate::prefix::prefixes;
use crate::score::score;
use crate::search::SearchRequest;
use lexa_core::config::EngineConfig;
use lexa_core::error::Result;
use lexa_core::types::ObjectKey;
use lexa_store::{Batch, Store};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Keys deleted per bulk operation during a namespace flush
const FLUSH_BATCH_SIZE: usize = 1000;

// ============================================================================
// Document
// ============================================================================

/// An object to index: id plus optional kind, title, and payload
///
/// Omitted fields default at store time: title falls back to the id,
/// payload falls back to the title.
///
/// # Example
///
/// ```
/// use lexa_engine::Document;
///
/// let doc = Document::new("a1")
///     .with_kind("recipe")
///     .with_title("Apple Pie")
///     .with_payload("A");
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) id: String,
    pub(crate) kind: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) payload: Option<String>,
}

impl Document {
    /// Create a document with only an id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: None,
            title: None,
            payload: None,
        }
    }

    /// Builder: set the kind tag
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Builder: set the indexed title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: set the stored payload
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    fn object_key(&self) -> Result<ObjectKey> {
        ObjectKey::from_parts(&self.id, self.kind.as_deref())
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Autocomplete index engine over a backing store
///
/// Stateless facade: all index state lives in the store, and multiple
/// engines over the same store (and namespace) are safe.
pub struct Engine<S: Store> {
    backend: S,
    config: EngineConfig,
    keys: KeySpace,
}

impl<S: Store> Engine<S> {
    /// Create an engine with the default configuration
    pub fn new(backend: S) -> Self {
        Self::with_config(backend, EngineConfig::default())
    }

    /// Create an engine with a custom configuration
    pub fn with_config(backend: S, config: EngineConfig) -> Self {
        let keys = KeySpace::new(&config.namespace);
        Self {
            backend,
            config,
            keys,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The backing store
    pub fn backend(&self) -> &S {
        &self.backend
    }

    // ========================================================================
    // Writing
    // ========================================================================

    /// Index a document (overwrite semantics)
    ///
    /// Writes the payload and title maps and fans the composite key out
    /// into every prefix bucket of every title token, all with one title
    /// score, as a single atomic batch. Re-storing the same id with a
    /// different title leaves the old title's bucket memberships in
    /// place; only [`Engine::remove`] prunes buckets.
    pub fn store(&self, doc: &Document) -> Result<()> {
        let key = doc.object_key()?;
        let member = key.encode();
        let title = doc.title.as_deref().unwrap_or(&doc.id);
        let payload = doc.payload.as_deref().unwrap_or(title);

        let title_score =
            score(&normalize_key(title, &self.config.stop_words), self.config.score_width) as f64;

        let mut batch = Batch::new();
        batch.map_set(self.keys.data(), &member, payload);
        batch.map_set(self.keys.title(), &member, title);
        for word in normalize(title, &self.config.stop_words) {
            for prefix in prefixes(&word, self.config.min_word_len) {
                batch.set_add(&self.keys.bucket(prefix), &member, title_score);
            }
        }

        debug!(id = %key, buckets = batch.len() - 2, "indexing object");
        self.backend.apply(batch)
    }

    /// Index a document with a JSON-serialized payload
    pub fn store_json<T: Serialize>(&self, doc: &Document, payload: &T) -> Result<()> {
        let encoded = serde_json::to_string(payload)?;
        self.store(&doc.clone().with_payload(encoded))
    }

    /// Remove a document from the index
    ///
    /// Removal of a never-stored id is a no-op. For each bucket the
    /// stored title generates, a bounded probe decides between deleting
    /// the whole bucket (no members beyond the first) and removing just
    /// this member; that avoids fetching a large bucket merely to learn
    /// whether it would become empty. The bucket edits and both map
    /// deletions are applied as one batch.
    pub fn remove(&self, id: &str, kind: Option<&str>) -> Result<()> {
        let key = ObjectKey::from_parts(id, kind)?;
        let member = key.encode();
        let title = self
            .backend
            .map_get(self.keys.title(), &member)?
            .unwrap_or_default();

        let mut batch = Batch::new();
        for word in normalize(&title, &self.config.stop_words) {
            for prefix in prefixes(&word, self.config.min_word_len) {
                let bucket = self.keys.bucket(prefix);
                if self.backend.set_range(&bucket, 1, 2)?.is_empty() {
                    batch.delete(&bucket);
                } else {
                    batch.set_remove(&bucket, &member);
                }
            }
        }
        batch.map_remove(self.keys.data(), &member);
        batch.map_remove(self.keys.title(), &member);

        debug!(id = %key, "removing object");
        self.backend.apply(batch)
    }

    /// Whether an id (plus optional kind) is currently indexed
    pub fn exists(&self, id: &str, kind: Option<&str>) -> Result<bool> {
        let key = ObjectKey::from_parts(id, kind)?;
        self.backend.map_contains(self.keys.data(), &key.encode())
    }

    /// Delete every key under this engine's namespace
    ///
    /// Keys are enumerated and deleted in batches to bound the size of
    /// any single bulk operation.
    pub fn flush(&self) -> Result<()> {
        let keys = self
            .backend
            .keys_with_prefix(&self.keys.enumeration_prefix())?;
        for chunk in keys.chunks(FLUSH_BATCH_SIZE) {
            self.backend.delete_many(chunk)?;
        }
        Ok(())
    }

    /// Wipe the ENTIRE backing store, not just this namespace
    ///
    /// Irreversible and unscoped; kept separate from [`Engine::flush`]
    /// so it can never be reached through default configuration.
    pub fn flush_everything(&self) -> Result<()> {
        warn!("wiping the entire backing store");
        self.backend.flush_all()
    }

    // ========================================================================
    // Searching
    // ========================================================================

    /// Search for raw string payloads
    ///
    /// A phrase that normalizes to zero tokens returns an empty result.
    /// Results come back ascending by (possibly boosted) score, which
    /// approximates alphabetical order of the owning titles.
    pub fn search(&self, request: SearchRequest<'_, String>) -> Result<Vec<String>> {
        self.run_search(request, |raw| Ok(raw.to_string()))
    }

    /// Search with payloads deserialized from JSON
    ///
    /// Same pipeline as [`Engine::search`] with a deserialization step
    /// prepended; mappers and filters operate on the decoded values.
    pub fn search_json<T: DeserializeOwned>(
        &self,
        request: SearchRequest<'_, T>,
    ) -> Result<Vec<T>> {
        self.run_search(request, |raw| Ok(serde_json::from_str(raw)?))
    }

    fn run_search<T>(
        &self,
        request: SearchRequest<'_, T>,
        decode: impl Fn(&str) -> Result<T>,
    ) -> Result<Vec<T>> {
        let tokens = normalize(&request.phrase, &self.config.stop_words);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let active = self.resolve_result_set(&tokens, &request)?;

        let mut results = Vec::new();
        for member in self.backend.set_range(&active, 0, -1)? {
            if request.limit.is_some_and(|limit| results.len() >= limit) {
                break;
            }
            let Some(raw) = self.backend.map_get(self.keys.data(), &member)? else {
                // Dangling bucket reference: treated as "no longer exists"
                debug!(member = %member, "skipping bucket member without payload");
                continue;
            };

            let mut value = decode(&raw)?;
            for mapper in &request.mappers {
                value = mapper(value);
            }
            if !request.filters.iter().all(|filter| filter(&value)) {
                continue;
            }
            results.push(value);
        }
        Ok(results)
    }

    /// Resolve the sorted set the search should iterate
    ///
    /// Single word without boosts reads its bucket directly. Everything
    /// else goes through the intersection cache; on a miss the weighted
    /// intersection is computed, given the configured TTL, and boosted
    /// exactly once. Because the boost signature is part of the cache
    /// key, a cache hit already carries correctly boosted scores and is
    /// never rewritten.
    fn resolve_result_set<T>(
        &self,
        tokens: &[String],
        request: &SearchRequest<'_, T>,
    ) -> Result<String> {
        if tokens.len() == 1 && request.boosts.is_empty() {
            return Ok(self.keys.bucket(&tokens[0]));
        }

        let mut sorted = tokens.to_vec();
        sorted.sort();
        let cache_key = self
            .keys
            .cache(&sorted.join("|"), &request.boost_signature());

        if !self.backend.exists(&cache_key)? {
            debug!(key = %cache_key, "intersection cache miss");
            let sources: Vec<String> = tokens.iter().map(|t| self.keys.bucket(t)).collect();
            self.backend.set_intersect(&cache_key, &sources)?;
            self.backend.expire(&cache_key, self.config.cache_ttl)?;
            if !request.boosts.is_empty() {
                self.apply_boosts(&cache_key, &request.boosts)?;
            }
        }
        Ok(cache_key)
    }

    /// Multiply member scores by the reciprocal of matching boosts
    ///
    /// A member's composite key is split back into its id/kind parts;
    /// every part present in the boost map contributes one factor. Only
    /// scores that actually changed are rewritten, in one batch.
    fn apply_boosts(&self, set_key: &str, boosts: &BTreeMap<String, f64>) -> Result<()> {
        let mut batch = Batch::new();
        for (member, original) in self.backend.set_range_with_scores(set_key, 0, -1)? {
            let mut adjusted = original;
            for part in ObjectKey::decode(&member).parts() {
                if let Some(factor) = boosts.get(part) {
                    adjusted *= 1.0 / factor;
                }
            }
            if adjusted != original {
                batch.set_add(set_key, &member, adjusted);
            }
        }
        if !batch.is_empty() {
            self.backend.apply(batch)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lexa_store::MemoryStore;
    use std::time::Duration;

    fn test_engine() -> Engine<MemoryStore> {
        Engine::new(MemoryStore::new())
    }

    #[test]
    fn test_store_and_search_round_trip() {
        let engine = test_engine();
        engine
            .store(&Document::new("1").with_title("Hello World").with_payload("payload-1"))
            .unwrap();

        let hits = engine.search(SearchRequest::new("hel")).unwrap();
        assert_eq!(hits, vec!["payload-1"]);
        let hits = engine.search(SearchRequest::new("wor")).unwrap();
        assert_eq!(hits, vec!["payload-1"]);
    }

    #[test]
    fn test_store_defaults_title_and_payload() {
        let engine = test_engine();
        // title defaults to id, payload defaults to title
        engine.store(&Document::new("hello")).unwrap();
        assert_eq!(engine.search(SearchRequest::new("hel")).unwrap(), vec!["hello"]);

        engine.store(&Document::new("2").with_title("world")).unwrap();
        assert_eq!(engine.search(SearchRequest::new("wor")).unwrap(), vec!["world"]);
    }

    #[test]
    fn test_remove_cleans_buckets() {
        let engine = test_engine();
        engine
            .store(&Document::new("1").with_title("Hello World"))
            .unwrap();
        engine.remove("1", None).unwrap();

        assert!(engine.search(SearchRequest::new("hel")).unwrap().is_empty());
        assert!(!engine.exists("1", None).unwrap());
        // No bucket under the namespace survives
        assert!(engine
            .backend()
            .keys_with_prefix("ac:s:")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_remove_keeps_shared_buckets() {
        let engine = test_engine();
        engine.store(&Document::new("1").with_title("cats")).unwrap();
        engine.store(&Document::new("2").with_title("cattle")).unwrap();

        engine.remove("1", None).unwrap();

        // "ca" and "cat" buckets are shared and must survive for id 2
        assert_eq!(engine.search(SearchRequest::new("cat")).unwrap(), vec!["cattle"]);
        // The "cats" bucket belonged to id 1 alone and is gone entirely
        assert!(!engine.backend().exists("ac:s:cats").unwrap());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let engine = test_engine();
        engine.store(&Document::new("1").with_title("hello")).unwrap();
        engine.remove("1", None).unwrap();
        engine.remove("1", None).unwrap();
        engine.remove("never-stored", None).unwrap();
    }

    #[test]
    fn test_exists() {
        let engine = test_engine();
        assert!(!engine.exists("1", None).unwrap());
        engine.store(&Document::new("1")).unwrap();
        assert!(engine.exists("1", None).unwrap());
        assert!(!engine.exists("1", Some("user")).unwrap());
    }

    #[test]
    fn test_kinds_are_distinct() {
        let engine = test_engine();
        engine
            .store(&Document::new("1").with_kind("user").with_title("hello").with_payload("U"))
            .unwrap();
        engine
            .store(&Document::new("1").with_kind("post").with_title("hello").with_payload("P"))
            .unwrap();

        let mut hits = engine.search(SearchRequest::new("hel")).unwrap();
        hits.sort();
        assert_eq!(hits, vec!["P", "U"]);

        engine.remove("1", Some("user")).unwrap();
        assert_eq!(engine.search(SearchRequest::new("hel")).unwrap(), vec!["P"]);
    }

    #[test]
    fn test_invalid_id_rejected() {
        let engine = test_engine();
        assert!(engine.store(&Document::new("a\u{1}b")).is_err());
        assert!(engine
            .store(&Document::new("ok").with_kind("bad\u{1}kind"))
            .is_err());
    }

    #[test]
    fn test_results_sorted_alphabetically_by_title() {
        let engine = test_engine();
        engine
            .store(&Document::new("a2").with_title("Apple Tart").with_payload("B"))
            .unwrap();
        engine
            .store(&Document::new("a1").with_title("Apple Pie").with_payload("A"))
            .unwrap();

        assert_eq!(engine.search(SearchRequest::new("app")).unwrap(), vec!["A", "B"]);
        assert_eq!(engine.search(SearchRequest::new("apple pie")).unwrap(), vec!["A"]);
    }

    #[test]
    fn test_multi_word_is_order_independent_intersection() {
        let engine = test_engine();
        engine
            .store(&Document::new("1").with_title("red car").with_payload("RC"))
            .unwrap();
        engine
            .store(&Document::new("2").with_title("red bus").with_payload("RB"))
            .unwrap();

        assert_eq!(engine.search(SearchRequest::new("red car")).unwrap(), vec!["RC"]);
        assert_eq!(engine.search(SearchRequest::new("car red")).unwrap(), vec!["RC"]);

        // Sorted token signature: both spellings share one cache entry
        assert_eq!(engine.backend().keys_with_prefix("ac:c:").unwrap().len(), 1);
    }

    #[test]
    fn test_single_word_fast_path_skips_cache() {
        let engine = test_engine();
        engine.store(&Document::new("1").with_title("hello")).unwrap();
        engine.search(SearchRequest::new("hel")).unwrap();
        assert!(engine.backend().keys_with_prefix("ac:c:").unwrap().is_empty());
    }

    #[test]
    fn test_cache_entry_expires() {
        let engine = Engine::with_config(
            MemoryStore::new(),
            EngineConfig::default().cache_ttl(Duration::from_millis(20)),
        );
        engine.store(&Document::new("1").with_title("red car")).unwrap();
        engine.search(SearchRequest::new("red car")).unwrap();

        let cache_keys = engine.backend().keys_with_prefix("ac:c:").unwrap();
        assert_eq!(cache_keys.len(), 1);

        std::thread::sleep(Duration::from_millis(40));
        assert!(!engine.backend().exists(&cache_keys[0]).unwrap());
    }

    #[test]
    fn test_cache_serves_stale_results_until_ttl() {
        let engine = test_engine();
        engine
            .store(&Document::new("1").with_title("red car").with_payload("RC"))
            .unwrap();
        engine
            .store(&Document::new("2").with_title("red card").with_payload("RD"))
            .unwrap();
        assert_eq!(
            engine.search(SearchRequest::new("red car")).unwrap(),
            vec!["RC", "RD"]
        );

        // A new match arrives after the cache entry was built; within the
        // TTL the intersection does not see it.
        engine
            .store(&Document::new("3").with_title("red carpet").with_payload("RP"))
            .unwrap();
        assert_eq!(
            engine.search(SearchRequest::new("red car")).unwrap(),
            vec!["RC", "RD"]
        );
    }

    #[test]
    fn test_boost_reorders_without_changing_membership() {
        let engine = test_engine();
        engine
            .store(&Document::new("1").with_kind("apple").with_title("fruit basket").with_payload("A"))
            .unwrap();
        engine
            .store(&Document::new("2").with_kind("banana").with_title("fruit basket").with_payload("B"))
            .unwrap();

        let plain = engine.search(SearchRequest::new("fruit basket")).unwrap();
        assert_eq!(plain, vec!["A", "B"]);

        let boosted = engine
            .search(SearchRequest::new("fruit basket").boost("banana", 2.0))
            .unwrap();
        assert_eq!(boosted, vec!["B", "A"]);
    }

    #[test]
    fn test_boost_single_word_goes_through_cache() {
        let engine = test_engine();
        engine
            .store(&Document::new("1").with_kind("x").with_title("hello").with_payload("X"))
            .unwrap();
        engine
            .store(&Document::new("2").with_kind("y").with_title("hello").with_payload("Y"))
            .unwrap();

        let boosted = engine
            .search(SearchRequest::new("hello").boost("y", 4.0))
            .unwrap();
        assert_eq!(boosted, vec!["Y", "X"]);
        assert_eq!(engine.backend().keys_with_prefix("ac:c:").unwrap().len(), 1);
    }

    #[test]
    fn test_boost_does_not_compound_on_repeated_queries() {
        let engine = test_engine();
        engine
            .store(&Document::new("1").with_kind("x").with_title("red car"))
            .unwrap();

        let request = || SearchRequest::<String>::new("red car").boost("x", 2.0);
        engine.search(request()).unwrap();

        let cache_key = engine.backend().keys_with_prefix("ac:c:").unwrap()[0].clone();
        let first = engine
            .backend()
            .set_range_with_scores(&cache_key, 0, -1)
            .unwrap();

        engine.search(request()).unwrap();
        let second = engine
            .backend()
            .set_range_with_scores(&cache_key, 0, -1)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_boosts_use_different_cache_entries() {
        let engine = test_engine();
        engine
            .store(&Document::new("1").with_kind("x").with_title("red car"))
            .unwrap();

        engine
            .search(SearchRequest::new("red car").boost("x", 2.0))
            .unwrap();
        engine
            .search(SearchRequest::new("red car").boost("x", 3.0))
            .unwrap();
        engine.search(SearchRequest::new("red car")).unwrap();

        assert_eq!(engine.backend().keys_with_prefix("ac:c:").unwrap().len(), 3);
    }

    #[test]
    fn test_limit() {
        let engine = test_engine();
        for (id, title) in [("1", "apple one"), ("2", "apple two"), ("3", "apple three")] {
            engine.store(&Document::new(id).with_title(title).with_payload(id)).unwrap();
        }

        let hits = engine.search(SearchRequest::new("app").with_limit(2)).unwrap();
        assert_eq!(hits.len(), 2);
        // First two by alphabetical title order: "apple one", "apple three"
        assert_eq!(hits, vec!["1", "3"]);

        assert!(engine
            .search(SearchRequest::new("app").with_limit(0))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_limit_counts_only_filtered_survivors() {
        let engine = test_engine();
        for id in ["1", "2", "3", "4"] {
            engine
                .store(&Document::new(id).with_title(format!("item {id}")).with_payload(id))
                .unwrap();
        }

        let hits = engine
            .search(
                SearchRequest::new("item")
                    .filter(|p: &String| p != "1")
                    .with_limit(2),
            )
            .unwrap();
        assert_eq!(hits, vec!["2", "3"]);
    }

    #[test]
    fn test_mappers_run_before_filters() {
        let engine = test_engine();
        engine
            .store(&Document::new("1").with_title("hello").with_payload("raw"))
            .unwrap();

        let hits = engine
            .search(
                SearchRequest::new("hel")
                    .map(|p: String| format!("mapped:{p}"))
                    .filter(|p: &String| p.starts_with("mapped:")),
            )
            .unwrap();
        assert_eq!(hits, vec!["mapped:raw"]);
    }

    #[test]
    fn test_empty_phrase_returns_empty() {
        let engine = test_engine();
        engine.store(&Document::new("1").with_title("hello")).unwrap();
        assert!(engine.search(SearchRequest::new("")).unwrap().is_empty());
        assert!(engine.search(SearchRequest::new("the a of")).unwrap().is_empty());
        assert!(engine.search(SearchRequest::new("!!!")).unwrap().is_empty());
    }

    #[test]
    fn test_dangling_member_is_skipped() {
        let engine = test_engine();
        engine
            .store(&Document::new("1").with_title("hello").with_payload("one"))
            .unwrap();
        engine
            .store(&Document::new("2").with_title("hello").with_payload("two"))
            .unwrap();

        // Simulate a payload lost out-of-band; the bucket still references it
        let member = ObjectKey::new("1").unwrap().encode();
        engine.backend().map_remove("ac:d", &member).unwrap();

        assert_eq!(engine.search(SearchRequest::new("hel")).unwrap(), vec!["two"]);
    }

    #[test]
    fn test_overwrite_keeps_stale_bucket_membership() {
        let engine = test_engine();
        engine
            .store(&Document::new("1").with_title("cats").with_payload("old"))
            .unwrap();
        engine
            .store(&Document::new("1").with_title("dogs").with_payload("new"))
            .unwrap();

        // New title is searchable; the old title's buckets still point at
        // the object (only remove() prunes them)
        assert_eq!(engine.search(SearchRequest::new("dog")).unwrap(), vec!["new"]);
        assert_eq!(engine.search(SearchRequest::new("cat")).unwrap(), vec!["new"]);
    }

    #[test]
    fn test_store_json_and_search_json() {
        let engine = test_engine();
        engine
            .store_json(
                &Document::new("1").with_title("hello world"),
                &serde_json::json!({"name": "one", "rank": 3}),
            )
            .unwrap();

        let hits: Vec<serde_json::Value> = engine
            .search_json(SearchRequest::new("hel"))
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["name"], "one");
        assert_eq!(hits[0]["rank"], 3);
    }

    #[test]
    fn test_search_json_filters_on_decoded_values() {
        let engine = test_engine();
        for (id, rank) in [("1", 1), ("2", 2)] {
            engine
                .store_json(
                    &Document::new(id).with_title(format!("entry {id}")),
                    &serde_json::json!({"rank": rank}),
                )
                .unwrap();
        }

        let hits: Vec<serde_json::Value> = engine
            .search_json(SearchRequest::new("entry").filter(|v: &serde_json::Value| v["rank"] == 2))
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["rank"], 2);
    }

    #[test]
    fn test_flush_is_namespace_scoped() {
        let engine = test_engine();
        engine.store(&Document::new("1").with_title("hello")).unwrap();
        engine.backend().map_set("other:d", "k", "v").unwrap();

        engine.flush().unwrap();
        assert!(engine.backend().keys_with_prefix("ac:").unwrap().is_empty());
        assert!(engine.backend().exists("other:d").unwrap());
    }

    #[test]
    fn test_flush_everything_wipes_the_store() {
        let engine = test_engine();
        engine.store(&Document::new("1").with_title("hello")).unwrap();
        engine.backend().map_set("other:d", "k", "v").unwrap();

        engine.flush_everything().unwrap();
        assert!(!engine.backend().exists("other:d").unwrap());
        assert!(engine.search(SearchRequest::new("hel")).unwrap().is_empty());
    }

    #[test]
    fn test_min_word_len_zero_indexes_from_single_chars() {
        let engine = Engine::with_config(
            MemoryStore::new(),
            EngineConfig::default().min_word_len(0),
        );
        engine.store(&Document::new("1").with_title("cats")).unwrap();

        assert_eq!(engine.search(SearchRequest::new("c")).unwrap(), vec!["cats"]);
        // The empty prefix is never indexed
        assert!(!engine.backend().exists("ac:s:").unwrap());
    }

    #[test]
    fn test_custom_namespace_and_min_word_len() {
        let engine = Engine::with_config(
            MemoryStore::new(),
            EngineConfig::default().namespace("idx").min_word_len(3),
        );
        engine.store(&Document::new("1").with_title("hello")).unwrap();

        assert!(engine.backend().exists("idx:s:hel").unwrap());
        // Below the minimum no bucket exists
        assert!(!engine.backend().exists("idx:s:he").unwrap());
        assert!(engine.search(SearchRequest::new("he")).unwrap().is_empty());
        assert_eq!(engine.search(SearchRequest::new("hel")).unwrap(), vec!["hello"]);
    }
}
