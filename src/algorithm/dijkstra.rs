use std::collections::HashMap;

use log::debug;

use crate::algorithm::traits::{ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::DistanceQueue;
use crate::graph::{EdgeWeight, Graph, VertexId};
use crate::{Error, Result};

/// How the next vertex to finalize is chosen on each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Take the unfinalized vertex with the globally smallest tentative
    /// distance, via a priority queue. Textbook Dijkstra; distances are
    /// exact for every reached vertex.
    #[default]
    GlobalMinimum,

    /// Consider only unfinalized vertices whose current predecessor is the
    /// vertex finalized in the previous round, and stop when that set is
    /// empty. Kept for parity with engines that walk the relaxation frontier
    /// this way: it can finalize a vertex at a detour price and can strand
    /// reachable vertices, so query results may be approximations.
    LastRelaxed,
}

/// Classic Dijkstra's algorithm over non-negative integer weights
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    /// Next-vertex selection rule
    policy: SelectionPolicy,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance with the default
    /// [`SelectionPolicy::GlobalMinimum`]
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Creates a new Dijkstra algorithm instance with the given policy
    pub fn with_policy(policy: SelectionPolicy) -> Self {
        Dijkstra { policy }
    }

    /// The selection policy this instance runs with
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Standard frontier: pop the globally cheapest entry, skipping entries
    /// superseded by a later, cheaper relaxation.
    fn run_global_minimum<V, W, G>(
        &self,
        graph: &G,
        order: &[&V],
        slots: &HashMap<&V, usize>,
        source_slot: usize,
    ) -> (Vec<W>, Vec<Option<usize>>)
    where
        V: VertexId,
        W: EdgeWeight,
        G: Graph<V, W>,
    {
        let n = order.len();
        let mut distances: Vec<W> = vec![W::max_value(); n];
        let mut previous: Vec<Option<usize>> = vec![None; n];
        distances[source_slot] = W::zero();

        let mut queue = DistanceQueue::new();
        queue.push(source_slot, W::zero());

        while let Some((slot, distance)) = queue.pop() {
            // Superseded queue entry, this vertex was already finalized closer
            if distance > distances[slot] {
                continue;
            }

            for (neighbor, weight) in graph.outgoing_edges(order[slot]) {
                let neighbor_slot = match slots.get(neighbor) {
                    Some(&found) => found,
                    None => continue,
                };
                let candidate = distance.saturating_add(weight);
                if candidate < distances[neighbor_slot] {
                    distances[neighbor_slot] = candidate;
                    previous[neighbor_slot] = Some(slot);
                    queue.push(neighbor_slot, candidate);
                }
            }
        }

        (distances, previous)
    }

    /// Narrowed frontier: each round relaxes out of the current vertex, then
    /// hands over to the cheapest unfinalized vertex among those whose
    /// predecessor is the current vertex.
    fn run_last_relaxed<V, W, G>(
        &self,
        graph: &G,
        order: &[&V],
        slots: &HashMap<&V, usize>,
        source_slot: usize,
    ) -> (Vec<W>, Vec<Option<usize>>)
    where
        V: VertexId,
        W: EdgeWeight,
        G: Graph<V, W>,
    {
        let n = order.len();
        let mut distances: Vec<W> = vec![W::max_value(); n];
        let mut previous: Vec<Option<usize>> = vec![None; n];
        distances[source_slot] = W::zero();

        let mut visited = vec![false; n];
        let mut current = source_slot;

        loop {
            visited[current] = true;

            for (neighbor, weight) in graph.outgoing_edges(order[current]) {
                let neighbor_slot = match slots.get(neighbor) {
                    Some(&found) => found,
                    None => continue,
                };
                if visited[neighbor_slot] {
                    continue;
                }
                let candidate = distances[current].saturating_add(weight);
                if candidate < distances[neighbor_slot] {
                    distances[neighbor_slot] = candidate;
                    previous[neighbor_slot] = Some(current);
                }
            }

            // Candidates are the unvisited vertices the current round (or an
            // earlier one) left pointing at `current`; cheapest wins, ties go
            // to the lowest slot. An empty set ends the run even when relaxed
            // vertices remain elsewhere.
            let mut next = None;
            for slot in 0..n {
                if visited[slot] || previous[slot] != Some(current) {
                    continue;
                }
                match next {
                    Some(best) if distances[slot] >= distances[best] => {}
                    _ => next = Some(slot),
                }
            }

            match next {
                Some(slot) => current = slot,
                None => break,
            }
        }

        (distances, previous)
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: VertexId,
    W: EdgeWeight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        match self.policy {
            SelectionPolicy::GlobalMinimum => "Dijkstra",
            SelectionPolicy::LastRelaxed => "Dijkstra (last-relaxed)",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathTree<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        // Dense slots in vertex insertion order; the slot index doubles as
        // the deterministic tie-break between equal distances.
        let order: Vec<&V> = graph.vertices().collect();
        let slots: HashMap<&V, usize> = order
            .iter()
            .enumerate()
            .map(|(slot, vertex)| (*vertex, slot))
            .collect();
        let source_slot = match slots.get(source) {
            Some(&found) => found,
            None => return Err(Error::SourceNotFound),
        };

        debug!(
            "{:?}: computing from {:?} over {} vertices and {} edges",
            self.policy,
            source,
            order.len(),
            graph.edge_count()
        );

        let (distances, previous) = match self.policy {
            SelectionPolicy::GlobalMinimum => {
                self.run_global_minimum(graph, &order, &slots, source_slot)
            }
            SelectionPolicy::LastRelaxed => {
                self.run_last_relaxed(graph, &order, &slots, source_slot)
            }
        };

        let mut tree = ShortestPathTree::new(source.clone());
        for (slot, &distance) in distances.iter().enumerate() {
            if distance < W::max_value() {
                let predecessor = previous[slot].map(|parent| order[parent].clone());
                tree.record(order[slot].clone(), distance, predecessor);
            }
        }
        Ok(tree)
    }
}
