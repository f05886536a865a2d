use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-queue of `(priority, slot)` pairs for shortest-path frontiers.
///
/// Entries pop in ascending priority order; equal priorities pop in slot
/// order, which makes frontier selection deterministic when slots follow
/// vertex insertion order. Superseded entries for a slot are not removed on
/// push; callers recognize and skip them on pop.
#[derive(Debug)]
pub struct DistanceQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, usize)>>,
}

impl<P> DistanceQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        DistanceQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued entries, superseded ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues a slot at the given priority
    pub fn push(&mut self, slot: usize, priority: P) {
        self.heap.push(Reverse((priority, slot)));
    }

    /// Removes and returns the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((priority, slot))| (slot, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.peek().map(|Reverse((priority, slot))| (*slot, *priority))
    }

    /// Clears the queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<P> Default for DistanceQueue<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        DistanceQueue::new()
    }
}
