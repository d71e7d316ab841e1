//! # Chaining Hash Map
//!
//! A Rust implementation of a hash table that resolves collisions by separate chaining.
//!
//! This crate provides two hash map implementations:
//!
//! - `ChainingHashMap`: A single-threaded map with string keys and a pluggable hash function
//! - `SharedChainingHashMap`: The same map behind a `RwLock` for shared access across threads
//!
//! The bucket table is always sized to a prime number. Each bucket holds a singly linked
//! chain of entries, and the table doubles (then rounds up to the next prime) before an
//! insert would push the load factor above 1.0.
//!
//! The crate also ships `find_mode`, which returns the most frequent elements of a slice.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chaining_hashmap::{ChainingHashMap, hash_function_1};
//!
//! // Create a map with at least 20 buckets; the table rounds up to 23
//! let mut map = ChainingHashMap::with_capacity_and_hasher(20, hash_function_1);
//! assert_eq!(map.capacity(), 23);
//!
//! // Insert values
//! map.put("apple", 1);
//! map.put("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.put("apple", 10);
//! assert_eq!(map.get("apple"), Some(&10));
//! assert_eq!(map.len(), 2);
//!
//! // Rehash into a bigger table
//! map.resize_table(30);
//! assert_eq!(map.capacity(), 31);
//! assert!(map.contains_key("banana"));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Concurrent Usage
//!
//! ```rust
//! use chaining_hashmap::SharedChainingHashMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! // Create a shared hash map
//! let map = Arc::new(SharedChainingHashMap::new());
//!
//! // Clone references for different threads
//! let map1 = Arc::clone(&map);
//! let map2 = Arc::clone(&map);
//!
//! // Spawn threads that modify the map concurrently
//! let t1 = thread::spawn(move || {
//!     for i in 0..100 {
//!         map1.put(format!("key-{}", i), i);
//!     }
//! });
//!
//! let t2 = thread::spawn(move || {
//!     for i in 100..200 {
//!         map2.put(format!("key-{}", i), i);
//!     }
//! });
//!
//! // Wait for threads to complete
//! t1.join().unwrap();
//! t2.join().unwrap();
//!
//! // Every write holds the lock, so no insert is lost
//! assert_eq!(map.len(), 200);
//! ```

/// Singly linked chains that make up the buckets
mod chain;
/// Module implementing the single-threaded separate-chaining hash map
mod chaining_hash_map;
/// Configuration errors
mod error;
/// Pluggable string hash functions
mod hash_functions;
/// Statistical mode of a sequence
mod mode;
/// Prime helpers used to size the bucket table
mod primes;
/// Module implementing the lock-wrapped shared map
mod shared_map;
/// Utility functions and traits for the hash map
mod utils;

pub use chain::{Chain, ChainIter, ChainIterMut};
pub use chaining_hash_map::{
    ChainingHashMap, ChainingHashMapBuilder, DEFAULT_CAPACITY, DEFAULT_MAX_LOAD_FACTOR, Iter,
};
pub use error::ConfigError;
pub use hash_functions::{DefaultKeyHasher, KeyHasher, hash_function_1, hash_function_2};
pub use mode::find_mode;
pub use primes::{is_prime, next_prime};
pub use shared_map::SharedChainingHashMap;
pub use utils::{HashMapExtensions, from_pairs};
