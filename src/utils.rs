//! Utility functions and traits for `ChainingHashMap`

use crate::{ChainingHashMap, KeyHasher};

/// Extension trait for map implementations that provides additional utility methods
pub trait HashMapExtensions<V> {
    /// Returns the keys of the hash map as a Vec
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the hash map as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns the length of the longest bucket chain
    fn longest_chain(&self) -> usize;
}

impl<V, H> HashMapExtensions<V> for ChainingHashMap<V, H>
where
    V: Clone,
{
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn longest_chain(&self) -> usize {
        self.bucket_lengths().into_iter().max().unwrap_or_default()
    }
}

/// Creates a `ChainingHashMap` with the given hasher from an iterator of key-value pairs
pub fn from_pairs<K, V, H, I>(iter: I, hasher: H) -> ChainingHashMap<V, H>
where
    K: Into<String>,
    H: KeyHasher,
    I: IntoIterator<Item = (K, V)>,
{
    let iter = iter.into_iter();
    let (lower, _) = iter.size_hint();
    let mut map = ChainingHashMap::with_capacity_and_hasher(lower, hasher);
    map.extend(iter);
    map
}
