//! Core graph structure — ordered adjacency lists + a shared label table.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde_json::Value;

use crate::types::{canonical_pair, Attributes, Edge};

use super::config::GraphConfig;
use super::edge_table::EdgeTable;
use super::ordered_set::{OrderedIter, OrderedSet};

/// Per-node state: neighbors in edge insertion order plus attributes.
pub(crate) struct NodeEntry<K> {
    pub(crate) neighbors: OrderedSet<K>,
    pub(crate) attributes: Attributes,
}

impl<K: Eq + Hash + Clone> NodeEntry<K> {
    fn new(attributes: Attributes) -> Self {
        Self {
            neighbors: OrderedSet::new(),
            attributes,
        }
    }
}

/// In-memory undirected graph with optional edge labels and node attributes.
///
/// Node keys need `Eq + Hash` for indexing and `Ord` so that the two
/// spellings of an undirected pair collapse to one canonical key. Each
/// edge label is stored exactly once under that canonical key; the
/// per-node neighbor lists hold keys only, so both directions of an edge
/// always report the same label.
///
/// Nodes and neighbors are reported in insertion order. Self-edges are
/// allowed and occupy a single neighbor slot, so they add 1 to the degree.
pub struct Graph<K, L> {
    /// Node keys in insertion order.
    pub(crate) order: OrderedSet<K>,
    /// Neighbor lists and attributes, indexed by key.
    pub(crate) nodes: HashMap<K, NodeEntry<K>>,
    /// Edge labels, indexed by canonical pair.
    pub(crate) labels: EdgeTable<K, L>,
}

impl<K, L> Graph<K, L>
where
    K: Eq + Hash + Ord + Clone,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        Self::with_config(GraphConfig::with_capacity(node_capacity, edge_capacity))
    }

    /// Create an empty graph sized by `config`.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            order: OrderedSet::with_capacity(config.node_capacity),
            nodes: HashMap::with_capacity(config.node_capacity),
            labels: EdgeTable::with_capacity(config.edge_rows()),
        }
    }

    /// Add a node with the given attributes.
    ///
    /// Returns `false` and leaves the stored attributes untouched if the
    /// node already exists: the first write wins.
    pub fn add_node(&mut self, node: K, attributes: Attributes) -> bool {
        if self.nodes.contains_key(&node) {
            return false;
        }
        self.order.insert(node.clone());
        self.nodes.insert(node, NodeEntry::new(attributes));
        true
    }

    pub(crate) fn ensure_node(&mut self, node: &K) {
        if !self.nodes.contains_key(node) {
            self.add_node(node.clone(), Attributes::new());
        }
    }

    /// Connect `node1` and `node2`, creating either endpoint if needed.
    ///
    /// Re-adding an existing edge replaces its label (last write wins) and
    /// keeps its position in both neighbor lists.
    pub fn add_edge(&mut self, node1: K, node2: K, label: Option<L>) {
        self.ensure_node(&node1);
        self.ensure_node(&node2);

        let previous = self.labels.insert(node1.clone(), node2.clone(), label);
        if previous.is_some() {
            return;
        }

        if node1 != node2 {
            if let Some(entry) = self.nodes.get_mut(&node2) {
                entry.neighbors.insert(node1.clone());
            }
        }
        if let Some(entry) = self.nodes.get_mut(&node1) {
            entry.neighbors.insert(node2);
        }
    }

    /// Add every `(node1, node2, label)` triple in order.
    pub fn extend_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (K, K, Option<L>)>,
    {
        let before = self.labels.len();
        for (node1, node2, label) in edges {
            self.add_edge(node1, node2, label);
        }
        log::debug!(
            "Bulk load added {} edges ({} nodes, {} edges total)",
            self.labels.len() - before,
            self.order.len(),
            self.labels.len()
        );
    }

    /// Remove a node together with all of its edges.
    ///
    /// Returns the node's attributes, or `None` if it was not present.
    pub fn remove_node(&mut self, node: &K) -> Option<Attributes> {
        // Detached from the map, so its neighbor list is a stable snapshot
        // while the neighbors' entries are edited below.
        let entry = self.nodes.remove(node)?;

        for neighbor in entry.neighbors.iter() {
            self.labels.remove(node, neighbor);
            if neighbor != node {
                if let Some(other) = self.nodes.get_mut(neighbor) {
                    other.neighbors.remove(node);
                }
            }
        }
        self.order.remove(node);

        log::debug!(
            "Removed node with {} incident edges",
            entry.neighbors.len()
        );
        Some(entry.attributes)
    }

    /// Remove the edge `node1 -- node2` if it exists.
    ///
    /// Returns the removed label slot: `None` if there was no edge,
    /// `Some(None)` if the edge had no label.
    pub fn remove_edge(&mut self, node1: &K, node2: &K) -> Option<Option<L>> {
        let label = self.labels.remove(node1, node2)?;

        if let Some(entry) = self.nodes.get_mut(node1) {
            entry.neighbors.remove(node2);
        }
        if node1 != node2 {
            if let Some(entry) = self.nodes.get_mut(node2) {
                entry.neighbors.remove(node1);
            }
        }
        Some(label)
    }

    /// Remove all nodes and edges.
    pub fn clear(&mut self) {
        self.order.clear();
        self.nodes.clear();
        self.labels.clear();
    }

    /// Neighbors of `node` in edge insertion order; empty for unknown nodes.
    pub fn neighbors(&self, node: &K) -> impl Iterator<Item = &K> + '_ {
        self.nodes
            .get(node)
            .map(|entry| entry.neighbors.iter())
            .into_iter()
            .flatten()
    }

    /// Neighbors of `node` as an owned list of references.
    pub fn get_neighbors(&self, node: &K) -> Vec<&K> {
        self.neighbors(node).collect()
    }

    /// Label of the edge `node1 -- node2`.
    ///
    /// `None` means there is no such edge; `Some(None)` means the edge
    /// exists without a label.
    pub fn get_edge_label(&self, node1: &K, node2: &K) -> Option<Option<&L>> {
        self.labels.get(node1, node2).map(Option::as_ref)
    }

    /// Mutable access to the label slot of an existing edge.
    ///
    /// There is one slot per edge, so a change is seen from both endpoints.
    pub fn edge_label_mut(&mut self, node1: &K, node2: &K) -> Option<&mut Option<L>> {
        self.labels.get_mut(node1, node2)
    }

    /// Number of neighbor entries of `node`; 0 for unknown nodes.
    ///
    /// A self-edge counts once.
    pub fn get_degree(&self, node: &K) -> usize {
        self.nodes
            .get(node)
            .map_or(0, |entry| entry.neighbors.len())
    }

    /// Whether `node1` and `node2` are connected, in either order.
    pub fn has_edge(&self, node1: &K, node2: &K) -> bool {
        self.labels.contains(node1, node2)
    }

    /// Whether `node` is in the graph.
    pub fn contains_node(&self, node: &K) -> bool {
        self.nodes.contains_key(node)
    }

    /// Attributes stored for `node` when it was created.
    pub fn node_attributes(&self, node: &K) -> Option<&Attributes> {
        self.nodes.get(node).map(|entry| &entry.attributes)
    }

    /// A single attribute of `node`.
    pub fn node_attribute(&self, node: &K, name: &str) -> Option<&Value> {
        self.node_attributes(node)?.get(name)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter()
    }

    /// All nodes in insertion order, collected.
    pub fn get_all_nodes(&self) -> Vec<&K> {
        self.order.iter().collect()
    }

    /// Lazily enumerate every undirected edge exactly once.
    pub fn edges(&self) -> Edges<'_, K, L> {
        Edges {
            graph: self,
            nodes: self.order.iter(),
            current: None,
            seen: HashSet::with_capacity(self.labels.len()),
        }
    }

    /// Every undirected edge exactly once, in adjacency order.
    pub fn get_all_edges(&self) -> Vec<Edge<'_, K, L>> {
        self.edges().collect()
    }

    /// Number of nodes.
    pub fn number_of_nodes(&self) -> usize {
        self.order.len()
    }

    /// Number of distinct undirected edges, re-derived by enumeration.
    pub fn number_of_edges(&self) -> usize {
        self.edges().count()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<K, L> Default for Graph<K, L>
where
    K: Eq + Hash + Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, L> FromIterator<(K, K, Option<L>)> for Graph<K, L>
where
    K: Eq + Hash + Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, K, Option<L>)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend_edges(iter);
        graph
    }
}

impl<K, L> Extend<(K, K, Option<L>)> for Graph<K, L>
where
    K: Eq + Hash + Ord + Clone,
{
    fn extend<I: IntoIterator<Item = (K, K, Option<L>)>>(&mut self, iter: I) {
        self.extend_edges(iter);
    }
}

/// Iterator over the distinct edges of a [`Graph`].
///
/// Walks nodes in insertion order and each neighbor list in order; an edge
/// is yielded the first time either direction is met.
pub struct Edges<'a, K, L> {
    graph: &'a Graph<K, L>,
    nodes: OrderedIter<'a, K>,
    current: Option<(&'a K, OrderedIter<'a, K>)>,
    seen: HashSet<(&'a K, &'a K)>,
}

impl<'a, K, L> Iterator for Edges<'a, K, L>
where
    K: Eq + Hash + Ord,
{
    type Item = Edge<'a, K, L>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            if let Some((node, neighbors)) = &mut self.current {
                let node: &'a K = *node;
                for neighbor in neighbors.by_ref() {
                    if !self.seen.insert(canonical_pair(node, neighbor)) {
                        continue;
                    }
                    let Some(label) = graph.labels.get(node, neighbor) else {
                        continue;
                    };
                    return Some(Edge {
                        node1: node,
                        node2: neighbor,
                        label: label.as_ref(),
                    });
                }
            }

            let node = self.nodes.next()?;
            self.current = graph
                .nodes
                .get(node)
                .map(|entry| (node, entry.neighbors.iter()));
        }
    }
}
