//! Construction-time sizing for a graph.

/// Capacity hints applied when a [`Graph`](super::Graph) is created.
///
/// Hints only pre-allocate; the graph grows past them as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// Expected number of nodes.
    pub node_capacity: usize,
    /// Expected number of undirected edges.
    pub edge_capacity: usize,
}

impl GraphConfig {
    /// Config with both capacity hints set.
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            node_capacity,
            edge_capacity,
        }
    }

    /// Number of first-level rows to reserve in the label table. Each row is
    /// keyed by the lower endpoint, so there are never more rows than nodes
    /// or edges.
    pub(crate) fn edge_rows(&self) -> usize {
        self.node_capacity.min(self.edge_capacity)
    }
}
