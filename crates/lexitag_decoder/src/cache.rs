//! Bounded least-recently-used memo cache.
//!
//! Recency is tracked with a queue of `(key, stamp)` pairs. Touching an entry
//! pushes a fresh pair and leaves the old one behind; stale pairs are skipped
//! on eviction and swept out when the queue grows too long.

use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Hit and miss counters for a cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that missed
    pub misses: u64,
    /// Entries currently held
    pub len: usize,
    /// Maximum number of entries
    pub capacity: usize,
}

impl CacheStats {
    /// Adds two sets of counters together.
    #[must_use]
    pub fn combine(self, other: CacheStats) -> CacheStats {
        CacheStats {
            hits: self.hits + other.hits,
            misses: self.misses + other.misses,
            len: self.len + other.len,
            capacity: self.capacity + other.capacity,
        }
    }
}

#[derive(Clone, Debug)]
struct CachedEntry<V> {
    value: V,
    stamp: u64,
}

/// A memo cache holding at most `capacity` entries.
///
/// A capacity of zero disables caching.
#[derive(Clone, Debug)]
pub struct BoundedCache<K, V> {
    entries: HashMap<K, CachedEntry<V>>,
    recency: VecDeque<(K, u64)>,
    stamp: u64,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty cache.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            recency: VecDeque::new(),
            stamp: 0,
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Returns a cached value and marks it as recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let Some((stored, _)) = self.entries.get_key_value(key) else {
            self.misses += 1;
            return None;
        };
        let stored = stored.clone();
        self.stamp += 1;
        let stamp = self.stamp;
        let entry = self.entries.get_mut(key)?;
        entry.stamp = stamp;
        let value = entry.value.clone();
        self.recency.push_back((stored, stamp));
        self.hits += 1;
        self.compact();
        Some(value)
    }

    /// Stores a value, evicting the least recently used entry if full.
    pub fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        self.stamp += 1;
        let stamp = self.stamp;
        self.recency.push_back((key.clone(), stamp));
        self.entries.insert(key, CachedEntry { value, stamp });

        while self.entries.len() > self.capacity {
            let Some((oldest, oldest_stamp)) = self.recency.pop_front() else {
                break;
            };
            if self
                .entries
                .get(&oldest)
                .is_some_and(|e| e.stamp == oldest_stamp)
            {
                self.entries.remove(&oldest);
            }
        }
        self.compact();
    }

    /// Drops stale recency records once they outnumber live entries.
    fn compact(&mut self) {
        if self.recency.len() <= self.capacity.saturating_mul(2) + 16 {
            return;
        }
        let entries = &self.entries;
        self.recency
            .retain(|(key, stamp)| entries.get(key).is_some_and(|e| e.stamp == *stamp));
    }

    /// Returns the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    /// Returns the hit and miss counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            len: self.entries.len(),
            capacity: self.capacity,
        }
    }
}
