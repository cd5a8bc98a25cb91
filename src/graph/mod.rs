//! In-memory graph operations — the core data structure.

pub mod adjacency;
pub mod builder;
pub mod config;
mod edge_table;
mod ordered_set;
pub mod undirected;

pub use adjacency::AdjacencyRow;
pub use builder::GraphBuilder;
pub use config::GraphConfig;
pub use undirected::{Edges, Graph};
