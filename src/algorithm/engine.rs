use log::debug;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::traits::{ShortestPathAlgorithm, ShortestPathTree};
use crate::graph::{EdgeWeight, Graph, VertexId};
use crate::Result;

/// Cache state of a [`ShortestPathEngine`] relative to a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    /// No computation has run yet
    NotComputed,
    /// The cached tree was computed at the graph's current edge revision
    Computed,
    /// Edges changed since the cached tree was computed
    Stale,
}

/// A computed tree together with the graph revision it was computed at
#[derive(Debug, Clone)]
struct CachedTree<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    tree: ShortestPathTree<V, W>,
    revision: u64,
}

/// Caching front end over a shortest path algorithm.
///
/// The engine holds at most one computed tree, tagged with the
/// [`Graph::revision`] it was computed at. Queries recompute lazily when the
/// cache is missing, stale, or rooted at a different start vertex, so a run
/// of queries from one start against an unchanged graph pays for a single
/// computation. The graph is borrowed per call rather than held, which keeps
/// it free for mutation between queries.
///
/// Queries never fail on bad input: unknown endpoints, unreachable targets
/// and empty graphs yield an empty path or `None` distance.
#[derive(Debug)]
pub struct ShortestPathEngine<V, W = u64, A = Dijkstra>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// The algorithm driven by this engine
    algorithm: A,

    /// Most recently computed tree, if any
    cache: Option<CachedTree<V, W>>,
}

impl<V, W, A> Default for ShortestPathEngine<V, W, A>
where
    V: VertexId,
    W: EdgeWeight,
    A: Default,
{
    fn default() -> Self {
        ShortestPathEngine {
            algorithm: A::default(),
            cache: None,
        }
    }
}

impl<V, W, A> ShortestPathEngine<V, W, A>
where
    V: VertexId,
    W: EdgeWeight,
    A: Default,
{
    /// Creates an engine with a default-configured algorithm
    pub fn new() -> Self {
        ShortestPathEngine::default()
    }
}

impl<V, W, A> ShortestPathEngine<V, W, A>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Creates an engine around a configured algorithm instance
    pub fn with_algorithm(algorithm: A) -> Self {
        ShortestPathEngine {
            algorithm,
            cache: None,
        }
    }

    /// The cached tree from the most recent computation, if any
    pub fn tree(&self) -> Option<&ShortestPathTree<V, W>> {
        self.cache.as_ref().map(|cached| &cached.tree)
    }

    /// Drops the cached tree; the next query recomputes
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// Reports the cache state relative to the graph's current revision
    pub fn status<G>(&self, graph: &G) -> EngineStatus
    where
        G: Graph<V, W>,
    {
        match &self.cache {
            None => EngineStatus::NotComputed,
            Some(cached) if cached.revision == graph.revision() => EngineStatus::Computed,
            Some(_) => EngineStatus::Stale,
        }
    }

    /// Runs the algorithm from the given source and caches the resulting
    /// tree, replacing whatever was cached before.
    pub fn compute<G>(&mut self, graph: &G, source: &V) -> Result<&ShortestPathTree<V, W>>
    where
        G: Graph<V, W>,
        A: ShortestPathAlgorithm<V, W, G>,
    {
        let tree = self.algorithm.compute_shortest_paths(graph, source)?;
        let cached = self.cache.insert(CachedTree {
            tree,
            revision: graph.revision(),
        });
        Ok(&cached.tree)
    }

    /// Shortest path `start -> ... -> end` as a vertex sequence.
    ///
    /// Empty when either endpoint is unknown, when `end` is unreachable from
    /// `start`, or when a vertex on the reconstructed path is no longer in
    /// the graph. A non-empty path always begins at `start` and ends at
    /// `end`; `start == end` yields the single-vertex path.
    pub fn shortest_path<G>(&mut self, graph: &G, start: &V, end: &V) -> Vec<V>
    where
        G: Graph<V, W>,
        A: ShortestPathAlgorithm<V, W, G>,
    {
        if !graph.has_vertex(start) || !graph.has_vertex(end) {
            return Vec::new();
        }
        let tree = match self.refresh(graph, start) {
            Some(tree) => tree,
            None => return Vec::new(),
        };
        match tree.path_to(end) {
            Some(path) if path.iter().all(|vertex| graph.has_vertex(vertex)) => path,
            _ => Vec::new(),
        }
    }

    /// Shortest distance `start -> end`, `None` when there is no path or
    /// either endpoint is unknown. Caching rules match
    /// [`shortest_path`](ShortestPathEngine::shortest_path).
    pub fn distance<G>(&mut self, graph: &G, start: &V, end: &V) -> Option<W>
    where
        G: Graph<V, W>,
        A: ShortestPathAlgorithm<V, W, G>,
    {
        if !graph.has_vertex(start) || !graph.has_vertex(end) {
            return None;
        }
        self.refresh(graph, start)?.distance(end)
    }

    /// Recomputes unless a tree rooted at `source` and matching the graph's
    /// revision is already cached.
    fn refresh<G>(&mut self, graph: &G, source: &V) -> Option<&ShortestPathTree<V, W>>
    where
        G: Graph<V, W>,
        A: ShortestPathAlgorithm<V, W, G>,
    {
        let usable = match &self.cache {
            Some(cached) => {
                cached.revision == graph.revision() && cached.tree.source() == source
            }
            None => false,
        };
        if !usable {
            debug!(
                "no usable cached tree for {:?} (cache {:?}), recomputing",
                source,
                self.status(graph)
            );
            let tree = self.algorithm.compute_shortest_paths(graph, source).ok()?;
            self.cache = Some(CachedTree {
                tree,
                revision: graph.revision(),
            });
        }
        self.cache.as_ref().map(|cached| &cached.tree)
    }
}
