//! Size-bounded FIFO pool

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Map bounded to `capacity` entries
///
/// When an insertion goes over capacity the oldest inserted entry is evicted.
/// Reads do not refresh an entry's position: this is FIFO, not LRU.
#[derive(Debug)]
pub struct FifoPool<K, V> {
    capacity: usize,
    entries: HashMap<K, V>,
    order: VecDeque<K>,
}

impl<K: Eq + Hash + Clone, V> FifoPool<K, V> {
    /// Pool holding at most `capacity` entries (at least one)
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace; returns the evicted entry, if any
    ///
    /// Replacing an existing key keeps its original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            return None;
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
        if self.entries.len() > self.capacity {
            return self.evict_oldest();
        }
        None
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(value)
    }

    /// Keys from oldest to newest
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order
            .iter()
            .filter_map(|k| self.entries.get(k).map(|v| (k, v)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn evict_oldest(&mut self) -> Option<(K, V)> {
        while let Some(oldest) = self.order.pop_front() {
            if let Some(value) = self.entries.remove(&oldest) {
                return Some((oldest, value));
            }
        }
        None
    }
}

impl<K: Eq + Hash + Clone, V: Clone> FifoPool<K, V> {
    /// Existing value for `key`, or insert the one built by `create`
    ///
    /// Returns the value and the entry evicted to make room, if any.
    pub fn get_or_insert_with<F>(&mut self, key: K, create: F) -> (V, Option<(K, V)>)
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.entries.get(&key) {
            return (value.clone(), None);
        }
        let value = create();
        let evicted = self.insert(key, value.clone());
        (value, evicted)
    }
}
