//! Insertion-ordered key set with constant-time insert, lookup and removal.

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::Flatten;
use std::slice;

/// Iterator over the live keys of an [`OrderedSet`], in insertion order.
pub(crate) type OrderedIter<'a, K> = Flatten<slice::Iter<'a, Option<K>>>;

/// Keys in insertion order, backed by a slot vector and a position index.
///
/// Removal leaves a hole in `slots`; holes are compacted away once they
/// outnumber the live keys, so every operation is amortized O(1).
pub(crate) struct OrderedSet<K> {
    slots: Vec<Option<K>>,
    index: HashMap<K, usize>,
}

impl<K> OrderedSet<K>
where
    K: Eq + Hash + Clone,
{
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Append `key` unless it is already present. Returns whether it was added.
    pub(crate) fn insert(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.slots.len());
        self.slots.push(Some(key));
        true
    }

    /// Remove `key`, keeping the relative order of the others.
    pub(crate) fn remove(&mut self, key: &K) -> bool {
        let Some(pos) = self.index.remove(key) else {
            return false;
        };
        if let Some(slot) = self.slots.get_mut(pos) {
            *slot = None;
        }

        let holes = self.slots.len() - self.index.len();
        if holes > self.index.len().max(8) {
            self.compact();
        }
        true
    }

    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        for (pos, key) in self.slots.iter().flatten().enumerate() {
            if let Some(entry) = self.index.get_mut(key) {
                *entry = pos;
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
    }
}

impl<K> OrderedSet<K> {
    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub(crate) fn iter(&self) -> OrderedIter<'_, K> {
        self.slots.iter().flatten()
    }
}
