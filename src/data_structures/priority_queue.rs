use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue used by the relaxation loop
///
/// Entries are ordered by priority, then by vertex, so two entries with equal
/// priority always pop smallest vertex first. That makes predecessor choices
/// reproducible from run to run.
#[derive(Debug, Clone)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
