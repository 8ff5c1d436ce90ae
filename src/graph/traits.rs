use num_traits::Float;
use std::fmt::Debug;

use crate::Result;

/// Trait representing a read-only weighted directed graph
///
/// Implementors must be safe to share between search workers; nothing in the
/// trait allows mutation once the graph is built.
pub trait Graph<W>: Debug + Sync
where
    W: Float + Debug,
{
    /// Iterator over `(destination, weight)` pairs leaving one vertex
    type Edges<'a>: Iterator<Item = (usize, W)>
    where
        Self: 'a;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    ///
    /// Fails with [`Error::OutOfRange`](crate::Error::OutOfRange) when the
    /// vertex is not part of the graph.
    fn outgoing_edges(&self, vertex: usize) -> Result<Self::Edges<'_>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}
