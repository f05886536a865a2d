//! Pathgraph - weighted digraphs with cached Dijkstra shortest-path queries
//!
//! The library has two halves. [`graph`] stores a directed graph over
//! caller-supplied vertex ids with unsigned integer edge weights; the vertex
//! set is fixed at construction and edges mutate freely afterwards, in
//! insertion order throughout. [`algorithm`] computes single-source shortest
//! paths over any such graph and answers path and distance queries from a
//! cached predecessor tree that tracks the graph's edge revision.
//!
//! Malformed queries degrade softly: adding an edge at an unknown vertex
//! reports `false`, asking for a path between unknown or unconnected
//! vertices yields an empty path. The one hard error is computing from a
//! source vertex the graph does not contain.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{Dijkstra, SelectionPolicy},
    engine::{EngineStatus, ShortestPathEngine},
    ShortestPathAlgorithm, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::{
    directed::DirectedGraph, edge::Edge, format_path, EdgeWeight, Graph, MutableGraph, VertexId,
};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source vertex not found in graph")]
    SourceNotFound,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
