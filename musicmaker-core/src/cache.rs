//! Bounded memo caches for pitch, frequency and chord construction.
//!
//! Caching only saves work: a miss always recomputes the same value, so
//! eviction order and lock contention never change results.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Fixed-capacity map with least-recently-used eviction.
#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: usize,
    entries: HashMap<K, (V, u64)>,
    recency: BTreeMap<u64, K>,
    tick: u64,
}

impl<K: Eq + Hash + Clone, V: Clone> LruCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        LruCache {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            recency: BTreeMap::new(),
            tick: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up a value and mark it as most recently used.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let tick = self.next_tick();
        let (value, stamp) = self.entries.get_mut(key)?;
        self.recency.remove(&*stamp);
        *stamp = tick;
        self.recency.insert(tick, key.clone());
        Some(value.clone())
    }

    /// Insert a value, evicting the least recently used entry when full.
    pub fn insert(&mut self, key: K, value: V) {
        let tick = self.next_tick();
        if let Some((_, old_stamp)) = self.entries.remove(&key) {
            self.recency.remove(&old_stamp);
        } else if self.entries.len() >= self.capacity {
            if let Some((_, oldest)) = self.recency.pop_first() {
                self.entries.remove(&oldest);
            }
        }
        self.recency.insert(tick, key.clone());
        self.entries.insert(key, (value, tick));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

/// A process-wide, lazily created [`LruCache`] behind a mutex.
///
/// Values are built outside the lock; when two callers race on the same key
/// the first value stored wins and both get it back.
pub struct Memo<K, V> {
    capacity: usize,
    cell: OnceLock<Mutex<LruCache<K, V>>>,
}

impl<K: Eq + Hash + Clone, V: Clone> Memo<K, V> {
    pub const fn new(capacity: usize) -> Self {
        Memo {
            capacity,
            cell: OnceLock::new(),
        }
    }

    fn with_cache<R>(&self, f: impl FnOnce(&mut LruCache<K, V>) -> R) -> R {
        let mutex = self
            .cell
            .get_or_init(|| Mutex::new(LruCache::new(self.capacity)));
        let mut guard = mutex.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn get_or_insert_with(&self, key: K, build: impl FnOnce() -> V) -> V {
        if let Some(hit) = self.with_cache(|cache| cache.get(&key)) {
            return hit;
        }
        let value = build();
        self.store(key, value)
    }

    pub fn try_get_or_insert_with<E>(
        &self,
        key: K,
        build: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(hit) = self.with_cache(|cache| cache.get(&key)) {
            return Ok(hit);
        }
        let value = build()?;
        Ok(self.store(key, value))
    }

    fn store(&self, key: K, value: V) -> V {
        self.with_cache(|cache| match cache.get(&key) {
            Some(existing) => existing,
            None => {
                cache.insert(key, value.clone());
                value
            }
        })
    }

    pub fn len(&self) -> usize {
        self.with_cache(|cache| cache.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.with_cache(|cache| cache.clear());
    }
}
