//! Pluggable string hashing for `ChainingHashMap`.

/// Maps a string key to a non-negative integer.
///
/// Implementations must be deterministic: the same key has to hash to the same value for
/// the lifetime of the map, otherwise lookups after a resize will miss. Collisions are fine,
/// the chains absorb them.
///
/// Every `Fn(&str) -> u64` implements this trait, so plain functions and closures can be
/// handed to the map directly.
pub trait KeyHasher {
    /// Hashes `key`.
    fn hash_key(&self, key: &str) -> u64;
}

impl<F> KeyHasher for F
where
    F: Fn(&str) -> u64,
{
    fn hash_key(&self, key: &str) -> u64 {
        self(key)
    }
}

/// The hasher type used when none is given explicitly.
pub type DefaultKeyHasher = fn(&str) -> u64;

/// Sums the code points of the key.
///
/// Anagrams collide, which makes this a good stress test for chaining.
#[must_use]
pub fn hash_function_1(key: &str) -> u64 {
    key.chars().fold(0u64, |hash, c| hash.wrapping_add(u64::from(c)))
}

/// Sums the code points of the key, each weighted by its 1-based position.
#[must_use]
pub fn hash_function_2(key: &str) -> u64 {
    key.chars()
        .zip(1u64..)
        .fold(0u64, |hash, (c, weight)| hash.wrapping_add(weight.wrapping_mul(u64::from(c))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_function_1() {
        assert_eq!(hash_function_1(""), 0);
        assert_eq!(hash_function_1("a"), 97);
        assert_eq!(hash_function_1("ab"), 97 + 98);
        assert_eq!(hash_function_1("ab"), hash_function_1("ba"));
    }

    #[test]
    fn test_hash_function_2() {
        assert_eq!(hash_function_2(""), 0);
        assert_eq!(hash_function_2("a"), 97);
        assert_eq!(hash_function_2("ab"), 97 + 2 * 98);
        assert_ne!(hash_function_2("ab"), hash_function_2("ba"));
    }

    #[test]
    fn test_closures_are_key_hashers() {
        let constant = |_: &str| 7u64;
        assert_eq!(constant.hash_key("anything"), 7);

        let named: DefaultKeyHasher = hash_function_2;
        assert_eq!(named.hash_key("abc"), hash_function_2("abc"));
    }
}
