//! Fluent API for building Graph instances.

use std::hash::Hash;

use crate::types::Attributes;

use super::{Graph, GraphConfig};

enum Step<K, L> {
    Node(K, Attributes),
    Edge(K, K, Option<L>),
}

/// Fluent builder for constructing a [`Graph`].
///
/// Steps are replayed in the order they were declared, so node order and
/// the first-write-wins attribute rule behave exactly as with direct calls.
pub struct GraphBuilder<K, L> {
    config: GraphConfig,
    steps: Vec<Step<K, L>>,
}

impl<K, L> GraphBuilder<K, L>
where
    K: Eq + Hash + Ord + Clone,
{
    /// Create a new builder with no capacity hints.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new builder whose graph is pre-sized by `config`.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            steps: Vec::new(),
        }
    }

    /// Declare a node without attributes.
    pub fn node(&mut self, node: K) -> &mut Self {
        self.node_with(node, Attributes::new())
    }

    /// Declare a node with attributes.
    pub fn node_with(&mut self, node: K, attributes: Attributes) -> &mut Self {
        self.steps.push(Step::Node(node, attributes));
        self
    }

    /// Add an unlabeled edge.
    pub fn edge(&mut self, node1: K, node2: K) -> &mut Self {
        self.steps.push(Step::Edge(node1, node2, None));
        self
    }

    /// Add a labeled edge.
    pub fn labeled_edge(&mut self, node1: K, node2: K, label: L) -> &mut Self {
        self.steps.push(Step::Edge(node1, node2, Some(label)));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<K, L> {
        let mut graph = Graph::with_config(self.config);
        for step in self.steps {
            match step {
                Step::Node(node, attributes) => {
                    graph.add_node(node, attributes);
                }
                Step::Edge(node1, node2, label) => graph.add_edge(node1, node2, label),
            }
        }
        graph
    }
}

impl<K, L> Default for GraphBuilder<K, L>
where
    K: Eq + Hash + Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
