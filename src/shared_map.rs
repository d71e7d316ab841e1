use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    chaining_hash_map::{ChainingHashMap, DEFAULT_CAPACITY},
    hash_functions::{DefaultKeyHasher, KeyHasher},
};

/// A `ChainingHashMap` behind a single `RwLock`, shareable across threads.
///
/// Readers run in parallel. Every mutation, including the resize that `put` may trigger,
/// holds the write lock for its whole duration, so no reader ever sees a half-rehashed
/// table. Values are cloned out on read since no reference can outlive the guard.
///
/// A poisoned lock is recovered rather than propagated: the map's operations leave the
/// table consistent at every point a panic could unwind through them.
#[derive(Debug)]
pub struct SharedChainingHashMap<V, H = DefaultKeyHasher> {
    /// The wrapped map
    inner: RwLock<ChainingHashMap<V, H>>,
}

impl<V> Default for SharedChainingHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SharedChainingHashMap<V> {
    /// Creates an empty shared map with 11 buckets and `hash_function_1`
    #[must_use]
    pub fn new() -> Self {
        Self::from_map(ChainingHashMap::with_capacity(DEFAULT_CAPACITY))
    }
}

impl<V, H: KeyHasher> SharedChainingHashMap<V, H> {
    /// Creates an empty shared map with at least `capacity` buckets and the given hasher
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        Self::from_map(ChainingHashMap::with_capacity_and_hasher(capacity, hasher))
    }

    /// Inserts or updates a key-value pair, returning the previous value for the key
    pub fn put(&self, key: impl Into<String>, value: V) -> Option<V> {
        self.write().put(key, value)
    }

    /// Returns a clone of the value stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.read().get(key).cloned()
    }

    /// Returns true if the map holds `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// Removes a key, returning its value
    pub fn remove(&self, key: &str) -> Option<V> {
        self.write().remove(key)
    }

    /// Rebuilds the table with at least `new_capacity` buckets
    pub fn resize_table(&self, new_capacity: usize) {
        self.write().resize_table(new_capacity);
    }
}

impl<V, H> SharedChainingHashMap<V, H> {
    /// Wraps an existing map
    pub const fn from_map(map: ChainingHashMap<V, H>) -> Self {
        Self { inner: RwLock::new(map) }
    }

    /// Unwraps the map
    pub fn into_inner(self) -> ChainingHashMap<V, H> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires the read lock
    fn read(&self) -> RwLockReadGuard<'_, ChainingHashMap<V, H>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires the write lock
    fn write(&self) -> RwLockWriteGuard<'_, ChainingHashMap<V, H>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the map is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.read().capacity()
    }

    /// Returns the current load factor
    #[must_use]
    pub fn table_load(&self) -> f64 {
        self.read().table_load()
    }

    /// Returns the number of buckets with an empty chain
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.read().empty_buckets()
    }

    /// Returns a snapshot of every entry taken under one read lock
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.read().get_keys_and_values()
    }

    /// Clears the map, keeping the current number of buckets
    pub fn clear(&self) {
        self.write().clear();
    }
}
