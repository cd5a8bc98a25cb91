//! Error types for the undirected-graph library.

use thiserror::Error;

/// Errors raised by the checked construction paths.
///
/// Mutations and queries on an existing [`Graph`](crate::Graph) never fail;
/// only imports of externally supplied adjacency data are validated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A neighbor list names a node that has no adjacency entry of its own.
    #[error("Node {node} lists neighbor {neighbor}, which is not a node")]
    DanglingNeighbor { node: String, neighbor: String },

    /// An edge is listed in one direction only.
    #[error("Edge {node} -> {neighbor} has no reverse entry")]
    AsymmetricEdge { node: String, neighbor: String },

    /// The two directions of an edge carry different labels.
    #[error("Edge {node} -- {neighbor} has conflicting labels")]
    LabelMismatch { node: String, neighbor: String },

    /// Attributes were supplied for a node that is not in the graph.
    #[error("Attributes supplied for unknown node {0}")]
    UnknownNode(String),
}

/// Convenience result type for graph construction.
pub type GraphResult<T> = Result<T, GraphError>;
