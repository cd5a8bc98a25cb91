//! undirected-graph — in-memory undirected graph container.
//!
//! Stores nodes (with optional attributes) and labeled undirected edges, and
//! answers neighbor, degree, edge-lookup and enumeration queries. Meant as a
//! building block for graph algorithms, not an algorithm library.
//!
//! ```
//! use undirected_graph::{attributes, Graph};
//!
//! let mut graph: Graph<&str, &str> = Graph::new();
//! graph.add_node("a", attributes([("color", "red")]));
//! graph.add_edge("a", "b", Some("knows"));
//!
//! assert!(graph.has_edge(&"b", &"a"));
//! assert_eq!(graph.get_edge_label(&"a", &"b"), Some(Some(&"knows")));
//! assert_eq!(graph.number_of_edges(), 1);
//! ```

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{AdjacencyRow, Edges, Graph, GraphBuilder, GraphConfig};
pub use types::{attributes, canonical_pair, Attributes, Edge, GraphError, GraphResult};
