//! Singly linked chain of entries stored in one bucket.

use std::fmt;

/// A node in a bucket chain
#[derive(Debug)]
struct Node<V> {
    /// The key of the entry
    key: String,
    /// The value associated with the key
    value: V,
    /// The next node in the chain
    next: Option<Box<Node<V>>>,
}

/// A singly linked list of key-value entries.
///
/// New entries go to the front. The chain itself does not enforce key uniqueness; the map
/// checks `find` before calling `insert`.
pub struct Chain<V> {
    /// First node of the chain
    head: Option<Box<Node<V>>>,
    /// Number of nodes in the chain
    len: usize,
}

impl<V> Chain<V> {
    /// Creates an empty chain
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of entries in the chain
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the chain has no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Prepends an entry without checking for an existing key
    pub fn insert(&mut self, key: String, value: V) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { key, value, next }));
        self.len = self.len.saturating_add(1);
    }

    /// Returns a reference to the value stored under `key`
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&V> {
        self.iter().find(|&(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value stored under `key`
    pub fn find_mut(&mut self, key: &str) -> Option<&mut V> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.key == key {
                return Some(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the entry stored under `key` and returns its value
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.key != key) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let node = cursor.take()?;
        let Node { value, next, .. } = *node;
        *cursor = next;
        self.len = self.len.saturating_sub(1);
        Some(value)
    }

    /// Unlinks the first entry and returns it
    pub fn pop_front(&mut self) -> Option<(String, V)> {
        let node = self.head.take()?;
        let Node { key, value, next } = *node;
        self.head = next;
        self.len = self.len.saturating_sub(1);
        Some((key, value))
    }

    /// Iterates over the entries from front to back
    #[must_use]
    pub fn iter(&self) -> ChainIter<'_, V> {
        ChainIter { next: self.head.as_deref() }
    }

    /// Iterates over the entries from front to back with mutable values
    pub fn iter_mut(&mut self) -> ChainIterMut<'_, V> {
        ChainIterMut { next: self.head.as_deref_mut() }
    }
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively so long chains do not recurse through `Box` drops.
impl<V> Drop for Chain<V> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<V: Clone> Clone for Chain<V> {
    fn clone(&self) -> Self {
        let entries: Vec<(&str, &V)> = self.iter().collect();
        let mut chain = Self::new();
        for (key, value) in entries.into_iter().rev() {
            chain.insert(key.to_owned(), value.clone());
        }
        chain
    }
}

impl<V: fmt::Debug> fmt::Debug for Chain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over the entries of a chain
#[derive(Debug)]
pub struct ChainIter<'a, V> {
    /// The node to yield next
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for ChainIter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some((node.key.as_str(), &node.value))
    }
}

/// Iterator over the entries of a chain with mutable values
#[derive(Debug)]
pub struct ChainIterMut<'a, V> {
    /// The node to yield next
    next: Option<&'a mut Node<V>>,
}

impl<'a, V> Iterator for ChainIterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.as_deref_mut();
        Some((node.key.as_str(), &mut node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_of(entries: &[(&str, i32)]) -> Chain<i32> {
        let mut chain = Chain::new();
        for &(key, value) in entries {
            chain.insert(key.to_string(), value);
        }
        chain
    }

    #[test]
    fn test_insert_prepends() {
        let chain = chain_of(&[("a", 1), ("b", 2), ("c", 3)]);
        let keys: Vec<&str> = chain.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["c", "b", "a"]);
        assert_eq!(chain.len(), 3);
        assert!(!chain.is_empty());
    }

    #[test]
    fn test_find_and_find_mut() {
        let mut chain = chain_of(&[("a", 1), ("b", 2)]);
        assert_eq!(chain.find("a"), Some(&1));
        assert_eq!(chain.find("z"), None);

        if let Some(value) = chain.find_mut("a") {
            *value = 10;
        }
        assert_eq!(chain.find("a"), Some(&10));
        assert!(chain.find_mut("z").is_none());
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut chain = chain_of(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);

        assert_eq!(chain.remove("d"), Some(4)); // head
        assert_eq!(chain.remove("b"), Some(2)); // middle
        assert_eq!(chain.remove("a"), Some(1)); // tail
        assert_eq!(chain.remove("a"), None);
        assert_eq!(chain.len(), 1);

        let keys: Vec<&str> = chain.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["c"]);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut chain: Chain<i32> = Chain::new();
        assert_eq!(chain.remove("a"), None);
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn test_pop_front_drains() {
        let mut chain = chain_of(&[("a", 1), ("b", 2)]);
        assert_eq!(chain.pop_front(), Some(("b".to_string(), 2)));
        assert_eq!(chain.pop_front(), Some(("a".to_string(), 1)));
        assert_eq!(chain.pop_front(), None);
        assert!(chain.is_empty());
    }

    #[test]
    fn test_iter_mut() {
        let mut chain = chain_of(&[("a", 1), ("b", 2)]);
        for (_, value) in chain.iter_mut() {
            *value *= 100;
        }
        assert_eq!(chain.find("a"), Some(&100));
        assert_eq!(chain.find("b"), Some(&200));
    }

    #[test]
    fn test_clone_preserves_order() {
        let chain = chain_of(&[("a", 1), ("b", 2), ("c", 3)]);
        let cloned = chain.clone();
        let original: Vec<(&str, &i32)> = chain.iter().collect();
        let copy: Vec<(&str, &i32)> = cloned.iter().collect();
        assert_eq!(original, copy);
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let mut chain = Chain::new();
        for i in 0..200_000 {
            chain.insert(i.to_string(), i);
        }
        assert_eq!(chain.len(), 200_000);
        drop(chain);
    }
}
