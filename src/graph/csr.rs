use num_traits::Float;
use std::fmt::Debug;
use std::iter::FusedIterator;
use std::slice;

use crate::graph::traits::Graph;
use crate::{Error, Result};

/// Read-only view over a directed graph in compressed sparse row layout
///
/// `row_offset[v]..row_offset[v + 1]` bounds the outgoing edges of `v` inside
/// `column` (destinations) and `weight`. The arrays are borrowed from the
/// caller and never mutated, so one view can be shared by any number of
/// concurrent searches.
#[derive(Debug, Clone, Copy)]
pub struct CsrGraph<'a, W> {
    num_vertices: usize,
    row_offset: &'a [usize],
    column: &'a [usize],
    weight: &'a [W],
}

impl<'a, W> CsrGraph<'a, W>
where
    W: Float + Debug,
{
    /// Creates a view after validating the whole layout
    ///
    /// Checks that `row_offset` starts at zero, never decreases and ends at
    /// the edge count, that `column` and `weight` have the same length, that
    /// every destination is a valid vertex and that every weight is a
    /// non-negative number.
    pub fn new(row_offset: &'a [usize], column: &'a [usize], weight: &'a [W]) -> Result<Self> {
        let graph = Self::new_unchecked(row_offset, column, weight);
        graph.validate()?;
        Ok(graph)
    }

    /// Creates a view without validating edges
    ///
    /// The caller promises the layout satisfies everything [`new`](Self::new)
    /// checks. Breaking that promise never causes undefined behaviour: bad
    /// offsets or destinations are reported as [`Error::MalformedGraph`] by
    /// the search that first touches them, and negative weights silently void
    /// the shortest-path guarantee.
    pub fn new_unchecked(row_offset: &'a [usize], column: &'a [usize], weight: &'a [W]) -> Self {
        CsrGraph {
            num_vertices: row_offset.len().saturating_sub(1),
            row_offset,
            column,
            weight,
        }
    }

    fn validate(&self) -> Result<()> {
        let offsets = self.row_offset;
        if offsets.is_empty() {
            return Err(Error::MalformedGraph(
                "row_offset must hold num_vertices + 1 entries".to_string(),
            ));
        }
        if offsets[0] != 0 {
            return Err(Error::MalformedGraph(format!(
                "row_offset must start at 0, found {}",
                offsets[0]
            )));
        }
        if let Some(v) = offsets.windows(2).position(|w| w[0] > w[1]) {
            return Err(Error::MalformedGraph(format!(
                "row_offset decreases at vertex {}",
                v
            )));
        }
        let last = offsets[offsets.len() - 1];
        if last != self.column.len() {
            return Err(Error::MalformedGraph(format!(
                "row_offset ends at {} but there are {} column entries",
                last,
                self.column.len()
            )));
        }
        if self.weight.len() != self.column.len() {
            return Err(Error::MalformedGraph(format!(
                "{} weights for {} column entries",
                self.weight.len(),
                self.column.len()
            )));
        }
        if let Some(edge) = self.column.iter().position(|&c| c >= self.num_vertices) {
            return Err(Error::MalformedGraph(format!(
                "edge {} points to vertex {} but the graph has {} vertices",
                edge, self.column[edge], self.num_vertices
            )));
        }
        for (edge, &w) in self.weight.iter().enumerate() {
            if w.is_nan() {
                return Err(Error::MalformedGraph(format!("edge {} has a NaN weight", edge)));
            }
            if w < W::zero() {
                return Err(Error::NegativeWeight {
                    edge,
                    weight: w.to_f64().unwrap_or(f64::NEG_INFINITY),
                });
            }
        }
        Ok(())
    }

    /// Number of vertices
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of edges
    pub fn num_edges(&self) -> usize {
        self.column.len()
    }

    /// Number of edges leaving `vertex`
    pub fn out_degree(&self, vertex: usize) -> Result<usize> {
        self.edge_range(vertex).map(|(start, end)| end - start)
    }

    /// Lazy iterator over the `(destination, weight)` pairs leaving `vertex`
    pub fn neighbors(&self, vertex: usize) -> Result<Neighbors<'a, W>> {
        let (start, end) = self.edge_range(vertex)?;
        match (self.column.get(start..end), self.weight.get(start..end)) {
            (Some(columns), Some(weights)) => Ok(Neighbors {
                columns: columns.iter(),
                weights: weights.iter(),
            }),
            _ => Err(Error::MalformedGraph(format!(
                "edge range {}..{} of vertex {} exceeds the edge arrays",
                start, end, vertex
            ))),
        }
    }

    fn edge_range(&self, vertex: usize) -> Result<(usize, usize)> {
        if vertex >= self.num_vertices {
            return Err(Error::OutOfRange {
                vertex,
                num_vertices: self.num_vertices,
            });
        }
        let start = self.row_offset[vertex];
        let end = self.row_offset[vertex + 1];
        if start > end {
            return Err(Error::MalformedGraph(format!(
                "row_offset decreases at vertex {}",
                vertex
            )));
        }
        Ok((start, end))
    }
}

impl<'a, W> Graph<W> for CsrGraph<'a, W>
where
    W: Float + Debug + Sync,
{
    type Edges<'b> = Neighbors<'b, W> where Self: 'b;

    fn vertex_count(&self) -> usize {
        self.num_vertices
    }

    fn edge_count(&self) -> usize {
        self.column.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Result<Self::Edges<'_>> {
        self.neighbors(vertex)
    }
}

/// Iterator over the outgoing edges of one vertex
#[derive(Debug, Clone)]
pub struct Neighbors<'a, W> {
    columns: slice::Iter<'a, usize>,
    weights: slice::Iter<'a, W>,
}

impl<'a, W: Copy> Iterator for Neighbors<'a, W> {
    type Item = (usize, W);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match (self.columns.next(), self.weights.next()) {
            (Some(&v), Some(&w)) => Some((v, w)),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.columns.size_hint()
    }
}

impl<'a, W: Copy> ExactSizeIterator for Neighbors<'a, W> {}

impl<'a, W: Copy> FusedIterator for Neighbors<'a, W> {}

/// Owned compressed sparse row storage
///
/// Used to assemble small graphs from edge lists for tests, demos and
/// benchmarks. Always validated, so [`view`](Self::view) never re-checks.
#[derive(Debug, Clone)]
pub struct CsrGraphBuf<W> {
    row_offset: Vec<usize>,
    column: Vec<usize>,
    weight: Vec<W>,
}

impl<W> CsrGraphBuf<W>
where
    W: Float + Debug,
{
    /// Takes ownership of already laid out arrays
    pub fn from_parts(row_offset: Vec<usize>, column: Vec<usize>, weight: Vec<W>) -> Result<Self> {
        CsrGraph::new(&row_offset, &column, &weight)?;
        Ok(CsrGraphBuf {
            row_offset,
            column,
            weight,
        })
    }

    /// Builds the layout from `(from, to, weight)` triples
    ///
    /// Edges of one vertex keep their input order.
    pub fn from_edges(num_vertices: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut row_offset = vec![0usize; num_vertices + 1];
        for &(from, _, _) in edges {
            if from >= num_vertices {
                return Err(Error::OutOfRange {
                    vertex: from,
                    num_vertices,
                });
            }
            row_offset[from + 1] += 1;
        }
        for v in 0..num_vertices {
            row_offset[v + 1] += row_offset[v];
        }

        let mut next = row_offset.clone();
        let mut column = vec![0usize; edges.len()];
        let mut weight = vec![W::zero(); edges.len()];
        for &(from, to, w) in edges {
            let slot = next[from];
            column[slot] = to;
            weight[slot] = w;
            next[from] += 1;
        }

        Self::from_parts(row_offset, column, weight)
    }

    /// Borrowed view for running searches
    pub fn view(&self) -> CsrGraph<'_, W> {
        CsrGraph::new_unchecked(&self.row_offset, &self.column, &self.weight)
    }

    pub fn row_offset(&self) -> &[usize] {
        &self.row_offset
    }

    pub fn column(&self) -> &[usize] {
        &self.column
    }

    pub fn weight(&self) -> &[W] {
        &self.weight
    }
}

impl<W> Graph<W> for CsrGraphBuf<W>
where
    W: Float + Debug + Sync,
{
    type Edges<'b> = Neighbors<'b, W> where Self: 'b;

    fn vertex_count(&self) -> usize {
        self.row_offset.len() - 1
    }

    fn edge_count(&self) -> usize {
        self.column.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Result<Self::Edges<'_>> {
        self.view().neighbors(vertex)
    }
}
