use num_traits::Float;
use std::fmt::Debug;

use crate::algorithm::tree::trace_path;
use crate::algorithm::NO_PREDECESSOR;

/// Row-major results of a batch: one distance row and optionally one
/// predecessor row per requested source
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathMatrix<W> {
    sources: Vec<usize>,
    num_vertices: usize,
    distances: Vec<W>,
    predecessors: Option<Vec<i64>>,
}

impl<W> ShortestPathMatrix<W>
where
    W: Float + Debug,
{
    pub(crate) fn from_parts(
        sources: Vec<usize>,
        num_vertices: usize,
        distances: Vec<W>,
        predecessors: Option<Vec<i64>>,
    ) -> Self {
        debug_assert_eq!(distances.len(), sources.len() * num_vertices);
        ShortestPathMatrix {
            sources,
            num_vertices,
            distances,
            predecessors,
        }
    }

    pub fn num_sources(&self) -> usize {
        self.sources.len()
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Source vertex of every row, in request order
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    /// Distances from the source of `row`
    ///
    /// # Panics
    /// If `row >= num_sources()`.
    pub fn distance_row(&self, row: usize) -> &[W] {
        let start = row * self.num_vertices;
        &self.distances[start..start + self.num_vertices]
    }

    /// Predecessors for the source of `row`, `None` when not tracked
    ///
    /// # Panics
    /// If `row >= num_sources()`.
    pub fn predecessor_row(&self, row: usize) -> Option<&[i64]> {
        let start = row * self.num_vertices;
        self.predecessors
            .as_ref()
            .map(|p| &p[start..start + self.num_vertices])
    }

    pub fn distance(&self, row: usize, vertex: usize) -> W {
        self.distance_row(row)[vertex]
    }

    /// Predecessor of `vertex` in the tree of `row`, if it has one
    pub fn predecessor(&self, row: usize, vertex: usize) -> Option<usize> {
        self.predecessor_row(row)
            .map(|p| p[vertex])
            .filter(|&p| p != NO_PREDECESSOR && p >= 0)
            .map(|p| p as usize)
    }

    /// Shortest path from the source of `row` to `target`
    ///
    /// `None` when the target was not reached or predecessors were not tracked.
    pub fn path_to(&self, row: usize, target: usize) -> Option<Vec<usize>> {
        let preds = self.predecessor_row(row)?;
        trace_path(self.sources[row], preds, target)
    }

    /// Full distance buffer, `num_sources * num_vertices` long
    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    /// Full predecessor buffer, `num_sources * num_vertices` long
    pub fn predecessors(&self) -> Option<&[i64]> {
        self.predecessors.as_deref()
    }

    /// Hands back the flat buffers
    pub fn into_parts(self) -> (Vec<W>, Option<Vec<i64>>) {
        (self.distances, self.predecessors)
    }
}
