//! Node attribute bags.

use std::collections::HashMap;

use serde_json::Value;

/// Named attribute values attached to a node when it is created.
pub type Attributes = HashMap<String, Value>;

/// Build an [`Attributes`] map from `(name, value)` pairs.
///
/// ```
/// use undirected_graph::attributes;
///
/// let attrs = attributes([("color", "red"), ("shape", "circle")]);
/// assert_eq!(attrs["color"], "red");
/// ```
pub fn attributes<I, S, V>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (S, V)>,
    S: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}
