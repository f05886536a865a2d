pub mod directed;
pub mod edge;
pub mod traits;

pub use directed::DirectedGraph;
pub use edge::Edge;
pub use traits::{EdgeWeight, Graph, MutableGraph, VertexId};

use std::fmt;

/// Formats a vertex sequence as a comma-separated list, e.g. `A, D, E, C`.
/// An empty sequence formats as the empty string.
pub fn format_path<V>(path: &[V]) -> String
where
    V: fmt::Display,
{
    let parts: Vec<String> = path.iter().map(|vertex| vertex.to_string()).collect();
    parts.join(", ")
}
