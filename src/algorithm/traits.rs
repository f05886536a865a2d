use std::collections::HashMap;

use log::warn;

use crate::graph::{EdgeWeight, Graph, VertexId};
use crate::Result;

/// Distance and predecessor link for one reached vertex
#[derive(Debug, Clone)]
struct PathRecord<V, W> {
    distance: W,
    previous: Option<V>,
}

/// Result of a shortest path computation: the predecessor tree rooted at the
/// source, with a distance per reached vertex.
///
/// All algorithm state lives here, keyed by vertex id. Vertices the source
/// cannot reach simply have no record, so the unreached sentinel never leaks
/// out of the computation.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Vertex the tree was computed from
    source: V,

    /// Best distance and predecessor for each reached vertex
    records: HashMap<V, PathRecord<V, W>>,
}

impl<V, W> ShortestPathTree<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    pub(crate) fn new(source: V) -> Self {
        ShortestPathTree {
            source,
            records: HashMap::new(),
        }
    }

    pub(crate) fn record(&mut self, vertex: V, distance: W, previous: Option<V>) {
        self.records.insert(
            vertex,
            PathRecord {
                distance,
                previous,
            },
        );
    }

    /// The vertex this tree was computed from
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Distance from the source, `None` when the vertex was not reached
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.records.get(vertex).map(|record| record.distance)
    }

    /// Predecessor on the shortest path, `None` for the source itself and
    /// for unreached vertices
    pub fn previous(&self, vertex: &V) -> Option<&V> {
        self.records
            .get(vertex)
            .and_then(|record| record.previous.as_ref())
    }

    /// Returns true if the source can reach the vertex
    pub fn reached(&self, vertex: &V) -> bool {
        self.records.contains_key(vertex)
    }

    /// Number of reached vertices, the source included
    pub fn reached_count(&self) -> usize {
        self.records.len()
    }

    /// Reconstructs the path source -> ... -> target by walking predecessor
    /// links backward from the target, then reversing.
    ///
    /// Returns `None` when the target was not reached, and aborts with `None`
    /// if the predecessor chain is broken or longer than the tree itself.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.records.contains_key(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target.clone();
        loop {
            path.push(current.clone());
            let record = self.records.get(&current)?;
            match &record.previous {
                Some(previous) => current = previous.clone(),
                None => break,
            }
            if path.len() > self.records.len() {
                warn!(
                    "predecessor chain behind {:?} exceeds tree size, aborting reconstruction",
                    target
                );
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: VertexId,
    W: EdgeWeight,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all reachable vertices.
    ///
    /// Fails with [`Error::SourceNotFound`](crate::Error::SourceNotFound)
    /// when the source is not a vertex of the graph, which covers the empty
    /// graph as well.
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathTree<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
