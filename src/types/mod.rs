//! Data types shared across the graph: edges, attributes, errors.

pub mod attributes;
pub mod edge;
pub mod error;

pub use attributes::{attributes, Attributes};
pub use edge::{canonical_pair, Edge};
pub use error::{GraphError, GraphResult};
