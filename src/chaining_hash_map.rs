use std::{fmt, iter::FusedIterator, mem, slice};

use tracing::{debug, trace};

use crate::{
    chain::{Chain, ChainIter},
    error::ConfigError,
    hash_functions::{DefaultKeyHasher, KeyHasher, hash_function_1},
    primes::next_prime,
};

/// Bucket count requested by `ChainingHashMap::new`
pub const DEFAULT_CAPACITY: usize = 11;

/// Load factor above which an insert grows the table
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 1.0;

/// A hash map with string keys that resolves collisions by separate chaining.
///
/// The bucket table always has a prime number of slots. A key lives in bucket
/// `hash(key) % capacity`, inside a singly linked chain shared with every other key that
/// lands there.
///
/// Growth is checked before an insert: if adding a new key would push `len / capacity`
/// above the maximum load factor, the table is doubled (and rounded up to the next prime)
/// first. Updating an existing key never resizes. After any `put` that adds a key the load
/// factor is at most the configured maximum, which itself never exceeds 1.0.
///
/// Note: This implementation is not thread-safe. For concurrent access, use
/// `SharedChainingHashMap`.
#[derive(Clone)]
pub struct ChainingHashMap<V, H = DefaultKeyHasher> {
    /// The bucket chains, one per slot
    buckets: Vec<Chain<V>>,
    /// Current number of entries across all chains
    size: usize,
    /// Threshold for `len / capacity` before an insert grows the table
    max_load_factor: f64,
    /// Maps keys to bucket hashes
    hasher: H,
}

/// Builder for `ChainingHashMap`.
///
/// ```rust
/// use chaining_hashmap::{ChainingHashMapBuilder, hash_function_2};
///
/// let mut map = ChainingHashMapBuilder::new()
///     .with_capacity(20)
///     .with_hasher(hash_function_2)
///     .with_max_load_factor(0.75)?
///     .build();
///
/// map.put("key1", 10);
/// assert_eq!(map.capacity(), 23);
/// # Ok::<(), chaining_hashmap::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChainingHashMapBuilder<H = DefaultKeyHasher> {
    /// Requested bucket count, rounded up to a prime on build
    capacity: usize,
    /// Threshold for `len / capacity`
    max_load_factor: f64,
    /// Hasher handed to the map
    hasher: H,
}

impl Default for ChainingHashMapBuilder {
    fn default() -> Self {
        let hasher: DefaultKeyHasher = hash_function_1;
        Self { capacity: DEFAULT_CAPACITY, max_load_factor: DEFAULT_MAX_LOAD_FACTOR, hasher }
    }
}

impl ChainingHashMapBuilder {
    /// Creates a builder with the default capacity, load factor and `hash_function_1`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: KeyHasher> ChainingHashMapBuilder<H> {
    /// Sets the requested number of buckets
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the maximum load factor.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidLoadFactor` unless `0.0 < max_load_factor <= 1.0`.
    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Result<Self, ConfigError> {
        if max_load_factor > 0.0 && max_load_factor <= 1.0 {
            self.max_load_factor = max_load_factor;
            Ok(self)
        } else {
            Err(ConfigError::InvalidLoadFactor(max_load_factor))
        }
    }

    /// Replaces the hasher
    #[must_use]
    pub fn with_hasher<T: KeyHasher>(self, hasher: T) -> ChainingHashMapBuilder<T> {
        ChainingHashMapBuilder {
            capacity: self.capacity,
            max_load_factor: self.max_load_factor,
            hasher,
        }
    }

    /// Builds an empty map
    #[must_use]
    pub fn build<V>(self) -> ChainingHashMap<V, H> {
        ChainingHashMap::from_parts(self.capacity, self.max_load_factor, self.hasher)
    }
}

impl<V> Default for ChainingHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ChainingHashMap<V> {
    /// Creates an empty map with 11 buckets and `hash_function_1`
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty map with at least `capacity` buckets and `hash_function_1`
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let hasher: DefaultKeyHasher = hash_function_1;
        Self::with_capacity_and_hasher(capacity, hasher)
    }
}

impl<V, H: KeyHasher> ChainingHashMap<V, H> {
    /// Creates an empty map with at least `capacity` buckets and the given hasher.
    ///
    /// The bucket count is rounded up to the next prime.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        Self::from_parts(capacity, DEFAULT_MAX_LOAD_FACTOR, hasher)
    }

    /// Allocates the initial table
    fn from_parts(capacity: usize, max_load_factor: f64, hasher: H) -> Self {
        Self { buckets: empty_table(next_prime(capacity)), size: 0, max_load_factor, hasher }
    }

    /// Gets the index of the bucket that holds `key`
    fn bucket_index(&self, key: &str) -> usize {
        bucket_index(&self.hasher, key, self.buckets.len())
    }

    /// Inserts or updates a key-value pair, returning the previous value for the key
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(existing) = self.get_mut(&key) {
            return Some(mem::replace(existing, value));
        }

        self.grow_for_insert();

        let index = self.bucket_index(&key);
        if let Some(bucket) = self.buckets.get_mut(index) {
            bucket.insert(key, value);
            self.size = self.size.saturating_add(1);
        }
        None
    }

    /// Grows the table so that one more entry stays within the load factor
    fn grow_for_insert(&mut self) {
        let needed = self.size.saturating_add(1);
        let mut target = self.capacity();
        if !self.overloaded(needed, target) {
            return;
        }

        // An explicit shrink can leave the table more than twice over the threshold.
        while self.overloaded(needed, target) && target < usize::MAX {
            target = target.saturating_mul(2);
        }
        self.resize_table(target);
    }

    /// Returns true if `len` entries in `capacity` buckets exceed the load factor
    #[allow(clippy::cast_precision_loss)]
    fn overloaded(&self, len: usize, capacity: usize) -> bool {
        len as f64 / capacity as f64 > self.max_load_factor
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets.get(self.bucket_index(key))?.find(key)
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets.get_mut(index)?.find_mut(key)
    }

    /// Returns true if the map holds `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes a key, returning its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let value = self.buckets.get_mut(index)?.remove(key)?;
        self.size = self.size.saturating_sub(1);
        Some(value)
    }

    /// Rebuilds the table with at least `new_capacity` buckets, rehashing every entry.
    ///
    /// A capacity of zero is ignored. The target is rounded up to the next prime. Unlike
    /// growth during `put`, an explicit resize may leave the table above its load factor.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity == 0 {
            return;
        }

        let old_capacity = self.capacity();
        let new_capacity = next_prime(new_capacity);
        let mut new_buckets = empty_table(new_capacity);

        for mut chain in mem::take(&mut self.buckets) {
            while let Some((key, value)) = chain.pop_front() {
                let index = bucket_index(&self.hasher, &key, new_capacity);
                if let Some(bucket) = new_buckets.get_mut(index) {
                    bucket.insert(key, value);
                }
            }
        }

        self.buckets = new_buckets;
        self.size = self.buckets.iter().map(Chain::len).sum();
        debug!(old_capacity, new_capacity, len = self.size, "resized bucket table");
    }
}

impl<V, H> ChainingHashMap<V, H> {
    /// Returns the number of entries in the map
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the configured maximum load factor
    #[must_use]
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Returns the current load factor, `len / capacity`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Returns the number of buckets with an empty chain
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_empty()).count()
    }

    /// Returns the chain length of every bucket, in bucket order
    #[must_use]
    pub fn bucket_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Chain::len).collect()
    }

    /// Returns a snapshot of every entry, in bucket order then chain order
    #[must_use]
    pub fn get_keys_and_values(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.iter().map(|(key, value)| (key.to_owned(), value.clone())).collect()
    }

    /// Clears the map, keeping the current number of buckets
    pub fn clear(&mut self) {
        let capacity = self.capacity();
        self.buckets = empty_table(capacity);
        self.size = 0;
        trace!(capacity, "cleared bucket table");
    }

    /// Returns an iterator over the key-value pairs, in bucket order then chain order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: self.buckets.iter(), chain: None, remaining: self.size }
    }
}

/// Allocates `capacity` empty chains
fn empty_table<V>(capacity: usize) -> Vec<Chain<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Chain::new);
    buckets
}

/// Maps `key` to a bucket index in a table of `capacity` slots
fn bucket_index<H: KeyHasher + ?Sized>(hasher: &H, key: &str, capacity: usize) -> usize {
    let capacity = u64::try_from(capacity).unwrap_or(u64::MAX);
    hasher
        .hash_key(key)
        .checked_rem(capacity)
        .and_then(|index| usize::try_from(index).ok())
        .unwrap_or_default()
}

impl<V: fmt::Debug, H> fmt::Debug for ChainingHashMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainingHashMap")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("max_load_factor", &self.max_load_factor)
            .field("buckets", &self.buckets)
            .finish_non_exhaustive()
    }
}

/// One line per bucket: `index: key: value -> key: value`
impl<V: fmt::Display, H> fmt::Display for ChainingHashMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            write!(f, "{index}:")?;
            for (position, (key, value)) in bucket.iter().enumerate() {
                let separator = if position == 0 { " " } else { " -> " };
                write!(f, "{separator}{key}: {value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<K, V, H> Extend<(K, V)> for ChainingHashMap<V, H>
where
    K: Into<String>,
    H: KeyHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for ChainingHashMap<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, V, H> IntoIterator for &'a ChainingHashMap<V, H> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the key-value pairs of the map
#[derive(Debug)]
pub struct Iter<'a, V> {
    /// Buckets not visited yet
    buckets: slice::Iter<'a, Chain<V>>,
    /// Position inside the current bucket
    chain: Option<ChainIter<'a, V>>,
    /// Entries not yielded yet
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(entry);
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}
