//! Label storage: one slot per undirected edge.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::canonical_pair;

/// Maps each undirected edge, keyed by its canonical pair, to its label.
///
/// Split into two levels (low endpoint -> high endpoint -> label) so that
/// lookups work on borrowed keys without cloning.
pub(crate) struct EdgeTable<K, L> {
    slots: HashMap<K, HashMap<K, Option<L>>>,
    len: usize,
}

impl<K, L> EdgeTable<K, L>
where
    K: Eq + Hash + Ord,
{
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(capacity),
            len: 0,
        }
    }

    /// Label slot of the edge `a -- b`, if the edge exists.
    pub(crate) fn get(&self, a: &K, b: &K) -> Option<&Option<L>> {
        let (low, high) = canonical_pair(a, b);
        self.slots.get(low)?.get(high)
    }

    pub(crate) fn get_mut(&mut self, a: &K, b: &K) -> Option<&mut Option<L>> {
        let (low, high) = canonical_pair(a, b);
        self.slots.get_mut(low)?.get_mut(high)
    }

    pub(crate) fn contains(&self, a: &K, b: &K) -> bool {
        self.get(a, b).is_some()
    }

    /// Store `label` for `a -- b`, returning the previous slot if the edge
    /// already existed.
    pub(crate) fn insert(&mut self, a: K, b: K, label: Option<L>) -> Option<Option<L>> {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let previous = self.slots.entry(low).or_default().insert(high, label);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub(crate) fn remove(&mut self, a: &K, b: &K) -> Option<Option<L>> {
        let (low, high) = canonical_pair(a, b);
        let row = self.slots.get_mut(low)?;
        let label = row.remove(high)?;
        if row.is_empty() {
            self.slots.remove(low);
        }
        self.len -= 1;
        Some(label)
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.len = 0;
    }
}
