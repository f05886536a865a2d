use crate::graph::traits::EdgeWeight;

/// A directed, weighted connection to a destination vertex.
///
/// Edges live in the adjacency list of their origin vertex, so only the
/// destination is stored here. The weight type defaults to `u64`, matching
/// [`DirectedGraph`](crate::graph::DirectedGraph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<V, W = u64> {
    destination: V,
    weight: W,
}

impl<V, W> Edge<V, W>
where
    W: EdgeWeight,
{
    /// Creates an edge with the given destination and weight
    pub fn new(destination: V, weight: W) -> Self {
        Edge {
            destination,
            weight,
        }
    }

    /// Creates an edge with the maximum representable weight.
    ///
    /// `W::max_value()` is the "practically infinite" placeholder: relaxation
    /// saturates at it, so such an edge never shortens any path.
    pub fn infinite(destination: V) -> Self {
        Edge {
            destination,
            weight: W::max_value(),
        }
    }

    /// The vertex this edge points at
    pub fn destination(&self) -> &V {
        &self.destination
    }

    /// The cost of traversing this edge
    pub fn weight(&self) -> W {
        self.weight
    }
}
