//! A fixed-capacity hash table that resolves collisions by chaining. Each bucket is a
//! [`LinkedList`] of key/value entries, created the first time a key hashes to it, and every
//! lookup walks the bucket positionally with [`LinkedList::get`] and [`LinkedList::delete_at`].
//!
//! The bucket count never changes, so chains grow linearly once the table holds more entries than
//! it has buckets.
//!
//! # Examples
//!
//! ```
//! use iterbst::HashTable;
//!
//! let mut table = HashTable::with_capacity(4);
//! assert_eq!(table.add("one", 1), None);
//! assert_eq!(table.add("two", 2), None);
//!
//! // Adding an existing key replaces its value.
//! assert_eq!(table.add("one", 10), Some(1));
//! assert_eq!(table.get(&"one"), Some(&10));
//!
//! assert_eq!(table.remove(&"two"), Some(2));
//! assert!(!table.contains(&"two"));
//! assert_eq!(table.len(), 1);
//! ```

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use tracing::trace;

use crate::linked_list::LinkedList;

struct Entry<K, V> {
    key: K,
    value: V,
}

type Bucket<K, V> = LinkedList<Entry<K, V>>;

/// A hash table mapping keys to values with a fixed number of chained buckets.
pub struct HashTable<K, V> {
    buckets: Vec<Option<Bucket<K, V>>>,
    length: usize,
    hasher: RandomState,
}

impl<K, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> HashTable<K, V> {
    const DEFAULT_CAPACITY: usize = 16;

    /// Generates a new, empty `HashTable` with 16 buckets.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Generates a new, empty `HashTable` with `capacity` buckets. A table always has at least
    /// one bucket.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: (0..capacity.max(1)).map(|_| None).collect(),
            length: 0,
            hasher: RandomState::new(),
        }
    }

    /// The number of entries in the table.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Stores `value` under `key`, returning the value it replaced if `key` was already present.
    pub fn add(&mut self, key: K, value: V) -> Option<V>
    where
        K: Hash + Eq,
    {
        let index = self.bucket_index(&key);
        let bucket = self.buckets[index].get_or_insert_with(LinkedList::new);

        let replaced = position(bucket, &key)
            .and_then(|i| bucket.delete_at(i).ok())
            .map(|entry| entry.value);
        bucket.insert(Entry { key, value });

        if replaced.is_none() {
            self.length += 1;
        }
        trace!(bucket = index, length = self.length, "added hash table entry");
        replaced
    }

    /// The value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: Hash + Eq,
    {
        let bucket = self.buckets[self.bucket_index(key)].as_ref()?;
        let i = position(bucket, key)?;
        bucket.get(i).ok().map(|entry| &entry.value)
    }

    /// Whether `key` maps to a value.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Hash + Eq,
    {
        self.get(key).is_some()
    }

    /// Removes `key` and returns its value. Missing keys are not an error.
    pub fn remove(&mut self, key: &K) -> Option<V>
    where
        K: Hash + Eq,
    {
        let index = self.bucket_index(key);
        let bucket = self.buckets[index].as_mut()?;
        let i = position(bucket, key)?;
        let entry = bucket.delete_at(i).ok()?;

        self.length -= 1;
        trace!(bucket = index, length = self.length, "removed hash table entry");
        Some(entry.value)
    }

    /// Every key, in no particular order.
    pub fn keys(&self) -> LinkedList<&K> {
        self.entries().map(|entry| &entry.key).collect()
    }

    /// Every value, in no particular order.
    pub fn values(&self) -> LinkedList<&V> {
        self.entries().map(|entry| &entry.value).collect()
    }

    fn entries(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.buckets.iter().flatten().flat_map(LinkedList::iter)
    }

    fn bucket_index(&self, key: &K) -> usize
    where
        K: Hash,
    {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }
}

fn position<K: Eq, V>(bucket: &Bucket<K, V>, key: &K) -> Option<usize> {
    bucket.iter().position(|entry| entry.key == *key)
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries().map(|entry| (&entry.key, &entry.value)))
            .finish()
    }
}
