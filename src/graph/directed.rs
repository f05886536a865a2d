use std::fmt;

use indexmap::IndexMap;
use log::trace;

use crate::graph::edge::Edge;
use crate::graph::traits::{EdgeWeight, Graph, MutableGraph, VertexId};

/// A directed graph implementation using insertion-ordered adjacency lists.
///
/// Vertices are caller-supplied ids and the set is fixed at construction;
/// mutation is edges only. Both the vertex iteration order and each adjacency
/// list keep insertion order, so traversals are deterministic.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W = u64>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Outgoing edges for each vertex: vertex id -> [edge, ...]
    adjacency: IndexMap<V, Vec<Edge<V, W>>>,

    /// Bumped on every successful edge mutation
    revision: u64,
}

impl<V, W> DirectedGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Creates a graph over the given vertex set, with no edges.
    ///
    /// Duplicate ids are skipped; the first occurrence keeps its position in
    /// the iteration order.
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut adjacency = IndexMap::new();
        for vertex in vertices {
            adjacency.entry(vertex).or_insert_with(Vec::new);
        }
        DirectedGraph {
            adjacency,
            revision: 0,
        }
    }

    /// Adds an edge given as an [`Edge`] value.
    ///
    /// Same contract as [`MutableGraph::add_edge`]: an existing edge to the
    /// same destination has its weight replaced in place, keeping its
    /// position in the adjacency list, and the edge is rejected when either
    /// endpoint is unknown.
    pub fn insert_edge(&mut self, source: &V, edge: Edge<V, W>) -> bool {
        if !self.adjacency.contains_key(edge.destination()) {
            trace!(
                "rejecting edge {:?} -> {:?}: unknown destination",
                source,
                edge.destination()
            );
            return false;
        }
        let edges = match self.adjacency.get_mut(source) {
            Some(edges) => edges,
            None => {
                trace!("rejecting edge from {:?}: unknown source", source);
                return false;
            }
        };

        // Replace in place if an edge to this destination already exists
        match edges
            .iter_mut()
            .find(|existing| existing.destination() == edge.destination())
        {
            Some(existing) => *existing = edge,
            None => edges.push(edge),
        }
        self.revision += 1;
        true
    }

    /// Applies [`insert_edge`](DirectedGraph::insert_edge) to each edge in
    /// turn and returns how many were accepted. Rejected edges are skipped,
    /// not fatal.
    pub fn add_edges<I>(&mut self, source: &V, edges: I) -> usize
    where
        I: IntoIterator<Item = Edge<V, W>>,
    {
        let mut accepted = 0;
        for edge in edges {
            if self.insert_edge(source, edge) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Returns the outgoing edge list of a vertex, or `None` when the vertex
    /// is unknown. An isolated vertex yields an empty slice, not `None`.
    pub fn neighbors(&self, source: &V) -> Option<&[Edge<V, W>]> {
        self.adjacency.get(source).map(|edges| edges.as_slice())
    }

    // Linear scan over the outgoing list; adjacency lists stay short enough
    // that an index per source is not worth carrying.
    fn edge_position(&self, source: &V, destination: &V) -> Option<usize> {
        self.adjacency
            .get(source)?
            .iter()
            .position(|edge| edge.destination() == destination)
    }
}

impl<V, W> DirectedGraph<V, W>
where
    V: VertexId + fmt::Display,
    W: EdgeWeight + fmt::Display,
{
    /// Formats one vertex and its outgoing edges, e.g. `[A] - {B:6, D:1}`.
    ///
    /// An isolated vertex formats as `[A]`; an unknown vertex yields `None`.
    pub fn format_vertex(&self, vertex: &V) -> Option<String> {
        let edges = self.adjacency.get(vertex)?;
        if edges.is_empty() {
            return Some(format!("[{}]", vertex));
        }
        let targets: Vec<String> = edges
            .iter()
            .map(|edge| format!("{}:{}", edge.destination(), edge.weight()))
            .collect();
        Some(format!("[{}] - {{{}}}", vertex, targets.join(", ")))
    }
}

impl<V, W> fmt::Display for DirectedGraph<V, W>
where
    V: VertexId + fmt::Display,
    W: EdgeWeight + fmt::Display,
{
    /// One line per vertex, in insertion order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.adjacency.keys() {
            if let Some(line) = self.format_vertex(vertex) {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl<V, W> Graph<V, W> for DirectedGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, source: &V, destination: &V) -> bool {
        self.edge_position(source, destination).is_some()
    }

    fn edge_weight(&self, source: &V, destination: &V) -> Option<W> {
        self.adjacency
            .get(source)?
            .iter()
            .find(|edge| edge.destination() == destination)
            .map(|edge| edge.weight())
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn outgoing_edges(&self, source: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.adjacency.get(source) {
            Box::new(edges.iter().map(|edge| (edge.destination(), edge.weight())))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

impl<V, W> MutableGraph<V, W> for DirectedGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    fn add_edge(&mut self, source: &V, destination: &V, weight: W) -> bool {
        self.insert_edge(source, Edge::new(destination.clone(), weight))
    }

    fn remove_edge(&mut self, source: &V, destination: &V) -> bool {
        let position = self.edge_position(source, destination);
        match (position, self.adjacency.get_mut(source)) {
            (Some(index), Some(edges)) => {
                edges.remove(index);
                self.revision += 1;
                true
            }
            _ => false,
        }
    }
}
