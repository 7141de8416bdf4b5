//! Response cache keyed by the fully-qualified request URL.

use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: Value,
    pub timestamp: Instant,
}

impl CacheEntry {
    /// Fresh strictly before `ttl` has elapsed; stale at or after it.
    pub fn is_fresh(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.timestamp) < ttl
    }
}

/// Time-boxed store owned by a single client.
///
/// Expired entries are not swept; they are ignored on lookup and replaced by
/// the next successful fetch. With a capacity set, inserting a new key into a
/// full cache drops the least recently used entry.
#[derive(Debug)]
pub struct ResponseCache {
    entries: HashMap<String, CacheEntry>,
    // front = most recently used, back = least recently used; empty when unbounded
    order: VecDeque<String>,
    ttl: Duration,
    max_entries: Option<usize>,
}

impl ResponseCache {
    pub fn new(ttl: Duration, max_entries: Option<usize>) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            ttl,
            max_entries,
        }
    }

    pub fn get(&mut self, key: &str) -> Option<Value> {
        self.get_at(key, Instant::now())
    }

    pub fn get_at(&mut self, key: &str, now: Instant) -> Option<Value> {
        let data = self
            .entries
            .get(key)
            .filter(|entry| entry.is_fresh(self.ttl, now))
            .map(|entry| entry.data.clone())?;
        self.touch(key);
        Some(data)
    }

    pub fn insert(&mut self, key: String, data: Value) {
        self.insert_at(key, data, Instant::now());
    }

    /// Insert-or-replace. The last write for a key wins.
    pub fn insert_at(&mut self, key: String, data: Value, now: Instant) {
        if let Some(max) = self.max_entries {
            if max == 0 {
                return;
            }
            if !self.entries.contains_key(&key) {
                while self.entries.len() >= max {
                    match self.order.pop_back() {
                        Some(oldest) => {
                            self.entries.remove(&oldest);
                        }
                        None => break,
                    }
                }
            }
        }

        self.touch(&key);
        self.entries.insert(
            key,
            CacheEntry {
                data,
                timestamp: now,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // No-op when unbounded.
    fn touch(&mut self, key: &str) {
        if self.max_entries.is_none() {
            return;
        }
        self.order.retain(|k| k != key);
        self.order.push_front(key.to_string());
    }
}
