//! Bounded query result cache.
//!
//! Eviction is strict insertion order: when an insert pushes the cache past
//! its capacity the oldest inserted key goes, regardless of how recently it
//! was read.

use std::collections::{HashMap, VecDeque};

/// FIFO cache keyed by query string.
#[derive(Debug, Clone)]
pub struct QueryCache<V> {
    capacity: usize,
    entries: HashMap<String, V>,
    order: VecDeque<String>,
}

impl<V> QueryCache<V> {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity.min(1024) + 1),
            order: VecDeque::with_capacity(capacity.min(1024) + 1),
        }
    }

    /// Look up a cached value. Reads never change eviction order.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Whether `key` is cached.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a value.
    ///
    /// Replacing an existing key keeps its original position. Returns the
    /// keys evicted to stay within capacity.
    pub fn insert(&mut self, key: String, value: V) -> Vec<String> {
        if self.entries.insert(key.clone(), value).is_none() {
            self.order.push_back(key);
        }

        let mut evicted = Vec::new();
        while self.entries.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            evicted.push(oldest);
        }
        evicted
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_first_inserted() {
        let mut cache = QueryCache::new(50);
        for i in 0..50 {
            assert!(cache.insert(format!("q{}", i), i).is_empty());
        }

        let evicted = cache.insert("q50".to_string(), 50);
        assert_eq!(evicted, vec!["q0".to_string()]);
        assert_eq!(cache.len(), 50);
        assert!(!cache.contains_key("q0"));
        assert!(cache.contains_key("q1"));
        assert!(cache.contains_key("q50"));
    }

    #[test]
    fn test_hit_does_not_refresh() {
        let mut cache = QueryCache::new(2);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        assert_eq!(cache.get("a"), Some(&1));

        cache.insert("c".to_string(), 3);
        assert!(!cache.contains_key("a"));
        assert!(cache.contains_key("b"));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut cache = QueryCache::new(2);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        assert!(cache.insert("a".to_string(), 10).is_empty());
        assert_eq!(cache.get("a"), Some(&10));

        assert_eq!(cache.insert("c".to_string(), 3), vec!["a".to_string()]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut cache = QueryCache::new(0);
        assert_eq!(cache.insert("a".to_string(), 1), vec!["a".to_string()]);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cache = QueryCache::new(4);
        cache.insert("a".to_string(), 1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 4);
    }
}
