//! ChainedHashMap: fixed-capacity string-keyed map with per-bucket chains.
//!
//! Structure:
//! - A bucket array of `capacity` slots, sized once at construction and
//!   never resized. Each slot holds the head of a singly linked chain of
//!   entries, or nothing.
//! - Entries live in a `SlotMap` arena; buckets and chain links address
//!   them by slot key, so there are no per-entry boxes and no raw
//!   pointers anywhere in the structure.
//! - Bucket choice is `djb2(key) % capacity`: deterministic, so a key
//!   always lands in the same chain for a given capacity.
//!
//! Contract:
//! - Keys are unique across the whole map; `set` on a present key
//!   overwrites its value in place and leaves the entry count unchanged.
//! - Chains grow at the tail, so traversal order is insertion order.
//! - There is no removal and no resize; entries live until the map is
//!   dropped. `entries.len()` therefore equals the number of entries
//!   reachable from the buckets at all times.

use core::hash::Hasher;
use slotmap::{DefaultKey, SlotMap};

use crate::hash::Djb2;

/// Construction error: a map must have at least one bucket.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ZeroCapacity;

#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
    next: Option<DefaultKey>, // forward link within one bucket's chain
}

pub struct ChainedHashMap<V> {
    buckets: Vec<Option<DefaultKey>>, // chain heads, fixed length
    entries: SlotMap<DefaultKey, Entry<V>>,
}

impl<V> ChainedHashMap<V> {
    /// Create a map with a fixed number of buckets. Rejects zero: every
    /// key must have a bucket to land in.
    pub fn with_capacity(capacity: usize) -> Result<Self, ZeroCapacity> {
        if capacity == 0 {
            return Err(ZeroCapacity);
        }
        Ok(Self {
            buckets: vec![None; capacity],
            entries: SlotMap::with_key(),
        })
    }

    /// Number of buckets, as fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of live entries across all chains.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn bucket_index(&self, key: &str) -> usize {
        let mut hasher = Djb2::new();
        hasher.write(key.as_bytes());
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    /// Insert or update. Walks the key's chain head to tail: a matching
    /// key has its value overwritten in place; otherwise a new entry is
    /// appended at the chain tail. The key is copied into owned storage
    /// only when a new entry is created.
    pub fn set(&mut self, key: &str, value: V) {
        let index = self.bucket_index(key);

        let mut tail = None;
        let mut cursor = self.buckets[index];
        while let Some(slot) = cursor {
            if self.entries[slot].key == key {
                self.entries[slot].value = value;
                return;
            }
            tail = Some(slot);
            cursor = self.entries[slot].next;
        }

        let slot = self.entries.insert(Entry {
            key: key.to_owned(),
            value,
            next: None,
        });
        match tail {
            Some(prev) => self.entries[prev].next = Some(slot),
            None => self.buckets[index] = Some(slot),
        }
    }

    /// Look up a key. Walks the key's chain head to tail and returns the
    /// first match; `None` means the key was never set (an empty bucket
    /// or an exhausted chain).
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut cursor = self.buckets[self.bucket_index(key)];
        while let Some(slot) = cursor {
            let entry = &self.entries[slot];
            if entry.key == key {
                return Some(&entry.value);
            }
            cursor = entry.next;
        }
        None
    }
}
