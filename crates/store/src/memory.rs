//! In-memory reference backend
//!
//! ## Design
//!
//! A single `RwLock`-guarded `HashMap` holds every key; each entry is
//! either a map or a sorted set. Sorted sets keep members in a plain
//! `HashMap<member, score>` and order them on read, which is the right
//! trade-off for a reference backend exercised by tests and embedded
//! callers.
//!
//! ## TTL
//!
//! Expiry deadlines are absolute and checked at query time: an expired
//! entry reads as absent and is dropped on the next write-locked touch
//! of its key. No background sweeper.
//!
//! ## Atomicity
//!
//! [`MemoryStore::apply`] holds the write lock for the whole batch, so a
//! batch is observed either fully applied or not at all. A batch that
//! fails mid-way (type mismatch) leaves its earlier operations applied,
//! mirroring the per-operation atomicity of networked stores.

use crate::batch::{Batch, WriteOp};
use crate::Store;
use lexa_core::error::{Error, Result};
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::{Duration, Instant};

enum Entry {
    Map(HashMap<String, String>),
    Sorted(HashMap<String, f64>),
}

struct Keyed {
    entry: Entry,
    expires_at: Option<Instant>,
}

impl Keyed {
    fn new(entry: Entry) -> Self {
        Self {
            entry,
            expires_at: None,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// In-memory [`Store`] implementation
///
/// Safe to share across threads; all state lives behind one
/// `parking_lot::RwLock`.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, Keyed>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn wrong_type(key: &str) -> Error {
    Error::Store(format!("wrong entry type for key {key:?}"))
}

/// Drop the entry under `key` if its deadline has passed
fn evict_expired(entries: &mut HashMap<String, Keyed>, key: &str) {
    let expired = entries
        .get(key)
        .map(|k| k.is_expired(Instant::now()))
        .unwrap_or(false);
    if expired {
        entries.remove(key);
    }
}

fn live<'a>(entries: &'a HashMap<String, Keyed>, key: &str) -> Option<&'a Entry> {
    let keyed = entries.get(key)?;
    if keyed.is_expired(Instant::now()) {
        return None;
    }
    Some(&keyed.entry)
}

fn do_map_set(
    entries: &mut HashMap<String, Keyed>,
    map: &str,
    field: &str,
    value: &str,
) -> Result<()> {
    evict_expired(entries, map);
    let keyed = entries
        .entry(map.to_string())
        .or_insert_with(|| Keyed::new(Entry::Map(HashMap::new())));
    match &mut keyed.entry {
        Entry::Map(fields) => {
            fields.insert(field.to_string(), value.to_string());
            Ok(())
        }
        Entry::Sorted(_) => Err(wrong_type(map)),
    }
}

fn do_map_remove(entries: &mut HashMap<String, Keyed>, map: &str, field: &str) -> Result<()> {
    evict_expired(entries, map);
    let now_empty = match entries.get_mut(map) {
        Some(keyed) => match &mut keyed.entry {
            Entry::Map(fields) => {
                fields.remove(field);
                fields.is_empty()
            }
            Entry::Sorted(_) => return Err(wrong_type(map)),
        },
        None => false,
    };
    if now_empty {
        entries.remove(map);
    }
    Ok(())
}

fn do_set_add(
    entries: &mut HashMap<String, Keyed>,
    key: &str,
    member: &str,
    score: f64,
) -> Result<()> {
    evict_expired(entries, key);
    let keyed = entries
        .entry(key.to_string())
        .or_insert_with(|| Keyed::new(Entry::Sorted(HashMap::new())));
    match &mut keyed.entry {
        Entry::Sorted(members) => {
            members.insert(member.to_string(), score);
            Ok(())
        }
        Entry::Map(_) => Err(wrong_type(key)),
    }
}

fn do_set_remove(entries: &mut HashMap<String, Keyed>, key: &str, member: &str) -> Result<()> {
    evict_expired(entries, key);
    let now_empty = match entries.get_mut(key) {
        Some(keyed) => match &mut keyed.entry {
            Entry::Sorted(members) => {
                members.remove(member);
                members.is_empty()
            }
            Entry::Map(_) => return Err(wrong_type(key)),
        },
        None => false,
    };
    if now_empty {
        entries.remove(key);
    }
    Ok(())
}

/// Members ordered ascending by `(score, member)`
fn ordered_members(entry: &Entry, key: &str) -> Result<Vec<(String, f64)>> {
    match entry {
        Entry::Sorted(members) => {
            let mut out: Vec<(String, f64)> =
                members.iter().map(|(m, s)| (m.clone(), *s)).collect();
            out.sort_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.0.cmp(&b.0))
            });
            Ok(out)
        }
        Entry::Map(_) => Err(wrong_type(key)),
    }
}

/// Resolve an inclusive rank range with negative-index semantics
///
/// Returns `None` when the range selects nothing.
fn rank_bounds(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let n = len as i64;
    let mut start = if start < 0 { n + start } else { start };
    let mut stop = if stop < 0 { n + stop } else { stop };
    if start < 0 {
        start = 0;
    }
    if stop >= n {
        stop = n - 1;
    }
    if start > stop || start >= n || stop < 0 {
        return None;
    }
    Some((start as usize, stop as usize))
}

impl Store for MemoryStore {
    fn map_set(&self, map: &str, field: &str, value: &str) -> Result<()> {
        do_map_set(&mut self.inner.write(), map, field, value)
    }

    fn map_get(&self, map: &str, field: &str) -> Result<Option<String>> {
        let entries = self.inner.read();
        match live(&entries, map) {
            Some(Entry::Map(fields)) => Ok(fields.get(field).cloned()),
            Some(Entry::Sorted(_)) => Err(wrong_type(map)),
            None => Ok(None),
        }
    }

    fn map_remove(&self, map: &str, field: &str) -> Result<()> {
        do_map_remove(&mut self.inner.write(), map, field)
    }

    fn map_contains(&self, map: &str, field: &str) -> Result<bool> {
        let entries = self.inner.read();
        match live(&entries, map) {
            Some(Entry::Map(fields)) => Ok(fields.contains_key(field)),
            Some(Entry::Sorted(_)) => Err(wrong_type(map)),
            None => Ok(false),
        }
    }

    fn set_add(&self, key: &str, member: &str, score: f64) -> Result<()> {
        do_set_add(&mut self.inner.write(), key, member, score)
    }

    fn set_remove(&self, key: &str, member: &str) -> Result<()> {
        do_set_remove(&mut self.inner.write(), key, member)
    }

    fn set_range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        Ok(self
            .set_range_with_scores(key, start, stop)?
            .into_iter()
            .map(|(member, _)| member)
            .collect())
    }

    fn set_range_with_scores(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> Result<Vec<(String, f64)>> {
        let entries = self.inner.read();
        let ordered = match live(&entries, key) {
            Some(entry) => ordered_members(entry, key)?,
            None => return Ok(Vec::new()),
        };
        Ok(match rank_bounds(ordered.len(), start, stop) {
            Some((lo, hi)) => ordered[lo..=hi].to_vec(),
            None => Vec::new(),
        })
    }

    fn set_intersect(&self, dest: &str, sources: &[String]) -> Result<()> {
        let mut entries = self.inner.write();
        let now = Instant::now();

        let mut result: Option<HashMap<String, f64>> = None;
        for source in sources {
            let members = match entries.get(source).filter(|k| !k.is_expired(now)) {
                Some(keyed) => match &keyed.entry {
                    Entry::Sorted(members) => members.clone(),
                    Entry::Map(_) => return Err(wrong_type(source)),
                },
                None => HashMap::new(),
            };
            result = Some(match result {
                None => members,
                Some(acc) => acc
                    .into_iter()
                    .filter_map(|(m, s)| members.get(&m).map(|other| (m, s + other)))
                    .collect(),
            });
        }

        let result = result.unwrap_or_default();
        if result.is_empty() {
            entries.remove(dest);
        } else {
            entries.insert(dest.to_string(), Keyed::new(Entry::Sorted(result)));
        }
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(live(&self.inner.read(), key).is_some())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.inner.write().remove(key);
        Ok(())
    }

    fn expire(&self, key: &str, ttl: Duration) -> Result<()> {
        let mut entries = self.inner.write();
        evict_expired(&mut entries, key);
        if let Some(keyed) = entries.get_mut(key) {
            keyed.expires_at = Some(Instant::now() + ttl);
        }
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let entries = self.inner.read();
        let now = Instant::now();
        Ok(entries
            .iter()
            .filter(|(key, keyed)| key.starts_with(prefix) && !keyed.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect())
    }

    fn delete_many(&self, keys: &[String]) -> Result<()> {
        let mut entries = self.inner.write();
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }

    fn flush_all(&self) -> Result<()> {
        self.inner.write().clear();
        Ok(())
    }

    fn apply(&self, batch: Batch) -> Result<()> {
        let mut entries = self.inner.write();
        for op in batch.into_ops() {
            match op {
                WriteOp::MapSet { map, field, value } => {
                    do_map_set(&mut entries, &map, &field, &value)?
                }
                WriteOp::MapRemove { map, field } => do_map_remove(&mut entries, &map, &field)?,
                WriteOp::SetAdd { key, member, score } => {
                    do_set_add(&mut entries, &key, &member, score)?
                }
                WriteOp::SetRemove { key, member } => do_set_remove(&mut entries, &key, &member)?,
                WriteOp::Delete { key } => {
                    entries.remove(&key);
                }
            }
        }
        Ok(())
    }
}
