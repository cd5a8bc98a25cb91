//! Borrowed edge views and undirected pair canonicalization.

use serde::Serialize;

/// Order two endpoints so that an undirected pair has a single spelling.
///
/// `(a, b)` and `(b, a)` both map to `(min, max)`; a self-edge maps to
/// `(a, a)`.
pub fn canonical_pair<'a, K: Ord>(a: &'a K, b: &'a K) -> (&'a K, &'a K) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// An undirected edge as seen during enumeration.
///
/// `node1` / `node2` keep the orientation in which the edge was first met
/// while walking the adjacency lists; they are not sorted.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Edge<'a, K, L> {
    /// Endpoint whose neighbor list yielded the edge.
    pub node1: &'a K,
    /// The other endpoint (equal to `node1` for a self-edge).
    pub node2: &'a K,
    /// Label stored on the edge, `None` if it was added without one.
    pub label: Option<&'a L>,
}

// Holds references only; no `K: Clone` / `L: Clone` bound.
impl<K, L> Clone for Edge<'_, K, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, L> Copy for Edge<'_, K, L> {}

impl<'a, K: Ord, L> Edge<'a, K, L> {
    /// Both endpoints in canonical order.
    pub fn endpoints(&self) -> (&'a K, &'a K) {
        canonical_pair(self.node1, self.node2)
    }

    /// Whether both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.node1 == self.node2
    }

    /// Whether this edge joins `a` and `b`, in either order.
    pub fn connects(&self, a: &K, b: &K) -> bool {
        self.endpoints() == canonical_pair(a, b)
    }
}

impl<K: Clone, L: Clone> Edge<'_, K, L> {
    /// Clone the view into an owned `(node1, node2, label)` triple.
    pub fn to_owned_triple(&self) -> (K, K, Option<L>) {
        (self.node1.clone(), self.node2.clone(), self.label.cloned())
    }
}
