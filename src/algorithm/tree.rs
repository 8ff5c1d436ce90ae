use num_traits::Float;
use std::fmt::Debug;

use crate::algorithm::NO_PREDECESSOR;

/// Result of a single-source search
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree<W> {
    /// Source vertex ID
    pub source: usize,

    /// Distances from source to each vertex, infinity when unreached
    pub distances: Vec<W>,

    /// Predecessor of each vertex in the tree, [`NO_PREDECESSOR`] for the
    /// source and for unreached vertices
    pub predecessors: Vec<i64>,
}

impl<W> ShortestPathTree<W>
where
    W: Float + Debug,
{
    /// Returns true if `vertex` was reached within the cutoff
    pub fn is_reached(&self, vertex: usize) -> bool {
        self.distances
            .get(vertex)
            .map_or(false, |d| d.is_finite())
    }

    /// Get the shortest path from source to target as a sequence of vertices
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        trace_path(self.source, &self.predecessors, target)
    }
}

/// Follows predecessor pointers from `target` back to `source`
///
/// Returns `None` when the target was not reached, when a pointer leaves the
/// row, or when the pointers loop without hitting the source.
pub(crate) fn trace_path(source: usize, predecessors: &[i64], target: usize) -> Option<Vec<usize>> {
    if target >= predecessors.len() {
        return None;
    }
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        let pred = predecessors[current];
        if pred == NO_PREDECESSOR || pred < 0 || pred as usize >= predecessors.len() {
            return None;
        }
        current = pred as usize;
        path.push(current);

        if path.len() > predecessors.len() {
            log::warn!("predecessor cycle while tracing path to {}", target);
            return None;
        }
    }

    path.reverse();
    Some(path)
}
