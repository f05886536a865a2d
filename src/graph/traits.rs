use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{PrimInt, Unsigned};

/// Capability alias for vertex identifiers.
///
/// A vertex is whatever the caller keys it by. `Eq` and `Hash` must agree on
/// the identifying data alone; any payload carried alongside the key is
/// invisible to the graph. Blanket-implemented, never implemented by hand.
pub trait VertexId: Eq + Hash + Clone + Debug {}

impl<T> VertexId for T where T: Eq + Hash + Clone + Debug {}

/// Capability alias for edge weights: unsigned integers.
///
/// Unsignedness rules out negative weights at the type level, and
/// `W::max_value()` is reserved as the "practically infinite" sentinel for
/// placeholder edges and unreached distances. Blanket-implemented.
pub trait EdgeWeight: PrimInt + Unsigned + Debug {}

impl<T> EdgeWeight for T where T: PrimInt + Unsigned + Debug {}

/// Trait representing a weighted directed graph keyed by vertex id
pub trait Graph<V, W>: Debug
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, source: &V, destination: &V) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, source: &V, destination: &V) -> Option<W>;

    /// Returns an iterator over all vertex ids, in insertion order
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges of a vertex, empty when
    /// the vertex is unknown
    fn outgoing_edges(&self, source: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns the edge revision counter.
    ///
    /// Starts at zero and increases on every successful edge mutation, so two
    /// equal readings bracket a window with no edge changes. Rejected
    /// mutations leave it untouched.
    fn revision(&self) -> u64;
}

/// Trait for mutable graph operations.
///
/// The vertex set is fixed at construction; mutation is edges only.
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Adds a directed edge between vertices with the given weight.
    ///
    /// Replaces the weight in place when the edge already exists. Returns
    /// false without touching the graph when either endpoint is unknown.
    fn add_edge(&mut self, source: &V, destination: &V, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, source: &V, destination: &V) -> bool;
}
