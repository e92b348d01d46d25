//! Backing-store abstraction for lexadb
//!
//! This crate defines the capability contract the index engine requires
//! from its backing store, plus an in-memory reference implementation.
//!
//! The trait enables swapping the in-memory backend for a networked
//! sorted-set store (or anything else exposing the same capabilities)
//! without breaking the engine. All keys are plain strings of the shape
//! `<namespace>:<category>[:detail]`; the engine owns the layout, the
//! store just hosts the data.
//!
//! Thread safety: all methods must be safe to call concurrently from
//! multiple threads (requires `Send + Sync`). The store is the sole
//! source of atomicity guarantees; [`Store::apply`] applies a [`Batch`]
//! as one atomic unit, and nothing spans more than one call.

pub mod batch;
pub mod memory;

pub use batch::{Batch, WriteOp};
pub use memory::MemoryStore;

use lexa_core::error::Result;
use std::time::Duration;

/// Capability contract required from a backing store
///
/// Two storage shapes are needed: maps (field -> string value under a
/// namespace key) and sorted sets (member -> f64 score, iterated in
/// ascending score order). Rank ranges use inclusive start/stop indices
/// where negative values count back from the end (`-1` is the last
/// member), matching the conventions of sorted-set stores.
pub trait Store: Send + Sync {
    // ---- Map storage ----

    /// Set a field in a map
    fn map_set(&self, map: &str, field: &str, value: &str) -> Result<()>;

    /// Get a field from a map; `None` if the map or field is absent
    fn map_get(&self, map: &str, field: &str) -> Result<Option<String>>;

    /// Delete a field from a map; absent field is a no-op
    fn map_remove(&self, map: &str, field: &str) -> Result<()>;

    /// Whether a map contains a field
    fn map_contains(&self, map: &str, field: &str) -> Result<bool>;

    // ---- Sorted sets ----

    /// Add a member with a score, overwriting any previous score
    fn set_add(&self, key: &str, member: &str, score: f64) -> Result<()>;

    /// Remove a member; absent member is a no-op
    fn set_remove(&self, key: &str, member: &str) -> Result<()>;

    /// Members in rank range `[start, stop]`, ascending by score
    ///
    /// An absent key reads as an empty set. Ties are broken by member
    /// ordering so iteration is deterministic.
    fn set_range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>>;

    /// Like [`Store::set_range`] but paired with each member's score
    fn set_range_with_scores(&self, key: &str, start: i64, stop: i64)
        -> Result<Vec<(String, f64)>>;

    /// Weighted intersection of `sources` into `dest` with summed scores
    ///
    /// Members must be present in every source. An absent source reads as
    /// empty. An empty result deletes `dest` rather than storing an empty
    /// set.
    fn set_intersect(&self, dest: &str, sources: &[String]) -> Result<()>;

    // ---- Keys ----

    /// Whether a key exists (map or sorted set)
    fn exists(&self, key: &str) -> Result<bool>;

    /// Delete a whole key; absent key is a no-op
    fn delete(&self, key: &str) -> Result<()>;

    /// Set a time-to-live on a key; absent key is a no-op
    fn expire(&self, key: &str, ttl: Duration) -> Result<()>;

    /// All live keys starting with `prefix`
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;

    /// Delete a batch of keys
    fn delete_many(&self, keys: &[String]) -> Result<()>;

    /// Wipe the entire store, not just one namespace
    ///
    /// Irreversible and unscoped; exposed for the engine's separately
    /// gated whole-store flush.
    fn flush_all(&self) -> Result<()>;

    // ---- Batching ----

    /// Apply a batch of write operations as one atomic unit
    fn apply(&self, batch: Batch) -> Result<()>;
}

// Forwarding impls so one backend can serve several engines, whether
// borrowed or shared behind an Arc.
impl<S: Store + ?Sized> Store for &S {
    fn map_set(&self, map: &str, field: &str, value: &str) -> Result<()> {
        (**self).map_set(map, field, value)
    }

    fn map_get(&self, map: &str, field: &str) -> Result<Option<String>> {
        (**self).map_get(map, field)
    }

    fn map_remove(&self, map: &str, field: &str) -> Result<()> {
        (**self).map_remove(map, field)
    }

    fn map_contains(&self, map: &str, field: &str) -> Result<bool> {
        (**self).map_contains(map, field)
    }

    fn set_add(&self, key: &str, member: &str, score: f64) -> Result<()> {
        (**self).set_add(key, member, score)
    }

    fn set_remove(&self, key: &str, member: &str) -> Result<()> {
        (**self).set_remove(key, member)
    }

    fn set_range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        (**self).set_range(key, start, stop)
    }

    fn set_range_with_scores(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> Result<Vec<(String, f64)>> {
        (**self).set_range_with_scores(key, start, stop)
    }

    fn set_intersect(&self, dest: &str, sources: &[String]) -> Result<()> {
        (**self).set_intersect(dest, sources)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        (**self).exists(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }

    fn expire(&self, key: &str, ttl: Duration) -> Result<()> {
        (**self).expire(key, ttl)
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        (**self).keys_with_prefix(prefix)
    }

    fn delete_many(&self, keys: &[String]) -> Result<()> {
        (**self).delete_many(keys)
    }

    fn flush_all(&self) -> Result<()> {
        (**self).flush_all()
    }

    fn apply(&self, batch: Batch) -> Result<()> {
        (**self).apply(batch)
    }
}

impl<S: Store + ?Sized> Store for std::sync::Arc<S> {
    fn map_set(&self, map: &str, field: &str, value: &str) -> Result<()> {
        (**self).map_set(map, field, value)
    }

    fn map_get(&self, map: &str, field: &str) -> Result<Option<String>> {
        (**self).map_get(map, field)
    }

    fn map_remove(&self, map: &str, field: &str) -> Result<()> {
        (**self).map_remove(map, field)
    }

    fn map_contains(&self, map: &str, field: &str) -> Result<bool> {
        (**self).map_contains(map, field)
    }

    fn set_add(&self, key: &str, member: &str, score: f64) -> Result<()> {
        (**self).set_add(key, member, score)
    }

    fn set_remove(&self, key: &str, member: &str) -> Result<()> {
        (**self).set_remove(key, member)
    }

    fn set_range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        (**self).set_range(key, start, stop)
    }

    fn set_range_with_scores(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> Result<Vec<(String, f64)>> {
        (**self).set_range_with_scores(key, start, stop)
    }

    fn set_intersect(&self, dest: &str, sources: &[String]) -> Result<()> {
        (**self).set_intersect(dest, sources)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        (**self).exists(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }

    fn expire(&self, key: &str, ttl: Duration) -> Result<()> {
        (**self).expire(key, ttl)
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        (**self).keys_with_prefix(prefix)
    }

    fn delete_many(&self, keys: &[String]) -> Result<()> {
        (**self).delete_many(keys)
    }

    fn flush_all(&self) -> Result<()> {
        (**self).flush_all()
    }

    fn apply(&self, batch: Batch) -> Result<()> {
        (**self).apply(batch)
    }
}
