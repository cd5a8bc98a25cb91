//! Checked import from, and export to, nested adjacency mappings.
//!
//! The nested form lists every node with its neighbors and the label of each
//! connecting edge, both directions spelled out: `a: [(b, l)]`, `b: [(a, l)]`.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{Attributes, GraphError, GraphResult};

use super::Graph;

/// One node of a nested adjacency mapping with its `(neighbor, label)` list.
pub type AdjacencyRow<K, L> = (K, Vec<(K, Option<L>)>);

impl<K, L> Graph<K, L>
where
    K: Eq + Hash + Ord + Clone + Debug,
    L: PartialEq,
{
    /// Build a graph from a nested adjacency mapping.
    ///
    /// Nodes keep the order of the outer rows and each neighbor list keeps
    /// its input order. Fails if a neighbor is not itself a row, if an edge
    /// is listed in one direction only, or if the two directions disagree on
    /// the label.
    pub fn from_adjacency<I, N>(adjacency: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (K, N)>,
        N: IntoIterator<Item = (K, Option<L>)>,
    {
        let rows: Vec<AdjacencyRow<K, L>> = adjacency
            .into_iter()
            .map(|(node, neighbors)| (node, neighbors.into_iter().collect()))
            .collect();

        let edge_hint = rows.iter().map(|(_, n)| n.len()).sum::<usize>() / 2;
        let mut graph = Self::with_capacity(rows.len(), edge_hint);
        for (node, _) in &rows {
            graph.ensure_node(node);
        }

        if let Err(err) = check_rows(&graph, &rows) {
            log::warn!("Rejected adjacency import: {}", err);
            return Err(err);
        }

        for (node, neighbors) in rows {
            for (neighbor, label) in neighbors {
                if let Some(entry) = graph.nodes.get_mut(&node) {
                    entry.neighbors.insert(neighbor.clone());
                }
                graph.labels.insert(node.clone(), neighbor, label);
            }
        }

        log::debug!(
            "Imported adjacency: {} nodes, {} edges",
            graph.number_of_nodes(),
            graph.labels.len()
        );
        Ok(graph)
    }

    /// Like [`Graph::from_adjacency`], then attach attributes to nodes.
    ///
    /// Nodes without an attribute entry keep an empty bag. Attributes for a
    /// node missing from the adjacency are rejected.
    pub fn from_adjacency_with_attributes<I, N, A>(adjacency: I, attributes: A) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (K, N)>,
        N: IntoIterator<Item = (K, Option<L>)>,
        A: IntoIterator<Item = (K, Attributes)>,
    {
        let mut graph = Self::from_adjacency(adjacency)?;
        for (node, attrs) in attributes {
            match graph.nodes.get_mut(&node) {
                Some(entry) => entry.attributes = attrs,
                None => {
                    log::warn!("Rejected attributes for unknown node {:?}", node);
                    return Err(GraphError::UnknownNode(format!("{:?}", node)));
                }
            }
        }
        Ok(graph)
    }
}

/// Validate referential integrity and symmetry of the raw rows.
fn check_rows<K, L>(graph: &Graph<K, L>, rows: &[AdjacencyRow<K, L>]) -> GraphResult<()>
where
    K: Eq + Hash + Ord + Clone + Debug,
    L: PartialEq,
{
    let mut directed: HashMap<(&K, &K), &Option<L>> = HashMap::new();

    for (node, neighbors) in rows {
        for (neighbor, label) in neighbors {
            if !graph.contains_node(neighbor) {
                return Err(GraphError::DanglingNeighbor {
                    node: format!("{:?}", node),
                    neighbor: format!("{:?}", neighbor),
                });
            }
            if let Some(previous) = directed.insert((node, neighbor), label) {
                if previous != label {
                    return Err(label_mismatch(node, neighbor));
                }
            }
        }
    }

    for (node, neighbors) in rows {
        for (neighbor, label) in neighbors {
            match directed.get(&(neighbor, node)) {
                None => {
                    return Err(GraphError::AsymmetricEdge {
                        node: format!("{:?}", node),
                        neighbor: format!("{:?}", neighbor),
                    })
                }
                Some(reverse) if *reverse != label => return Err(label_mismatch(node, neighbor)),
                Some(_) => {}
            }
        }
    }
    Ok(())
}

fn label_mismatch<K: Debug>(node: &K, neighbor: &K) -> GraphError {
    GraphError::LabelMismatch {
        node: format!("{:?}", node),
        neighbor: format!("{:?}", neighbor),
    }
}

impl<K, L> Graph<K, L>
where
    K: Eq + Hash + Ord + Clone,
    L: Clone,
{
    /// Export the graph as a nested adjacency mapping, both directions
    /// spelled out, in node and neighbor order.
    pub fn to_adjacency(&self) -> Vec<AdjacencyRow<K, L>> {
        self.order
            .iter()
            .map(|node| {
                let neighbors = self
                    .neighbors(node)
                    .map(|neighbor| {
                        let label = self.labels.get(node, neighbor).cloned().flatten();
                        (neighbor.clone(), label)
                    })
                    .collect();
                (node.clone(), neighbors)
            })
            .collect()
    }
}
