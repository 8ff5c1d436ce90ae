use log::warn;
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

use crate::algorithm::{SearchStats, ShortestPathTree, NO_PREDECESSOR};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion and an inclusive cutoff
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Compute shortest paths from a source vertex to all other vertices
    ///
    /// Pass `W::infinity()` as `cutoff` for an unbounded search.
    pub fn compute<W, G>(&self, graph: &G, source: usize, cutoff: W) -> Result<ShortestPathTree<W>>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut distances = vec![W::infinity(); n];
        let mut predecessors = vec![NO_PREDECESSOR; n];
        self.run_into(graph, source, cutoff, &mut distances, Some(predecessors.as_mut_slice()))?;

        Ok(ShortestPathTree {
            source,
            distances,
            predecessors,
        })
    }

    /// Runs one search, writing into caller-owned rows of length `vertex_count`
    ///
    /// Both rows are reset before the search starts. Argument errors are
    /// reported before anything is written. A destination outside the graph
    /// found while relaxing aborts the search with [`Error::MalformedGraph`],
    /// leaving the rows partially filled.
    ///
    /// Vertices whose shortest distance is exactly `cutoff` are included;
    /// anything strictly farther stays at infinity with no predecessor. A
    /// negative cutoff still sets the source to zero and stops there.
    pub fn run_into<W, G>(
        &self,
        graph: &G,
        source: usize,
        cutoff: W,
        distances: &mut [W],
        mut predecessors: Option<&mut [i64]>,
    ) -> Result<SearchStats>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::InvalidSource {
                vertex: source,
                num_vertices: n,
            });
        }
        if cutoff.is_nan() {
            return Err(Error::InvalidCutoff(cutoff.to_f64().unwrap_or(f64::NAN)));
        }
        if distances.len() != n {
            return Err(Error::BufferSize {
                expected: n,
                actual: distances.len(),
            });
        }
        if let Some(pred) = predecessors.as_deref() {
            if pred.len() != n {
                return Err(Error::BufferSize {
                    expected: n,
                    actual: pred.len(),
                });
            }
        }

        distances.fill(W::infinity());
        if let Some(pred) = predecessors.as_deref_mut() {
            pred.fill(NO_PREDECESSOR);
        }

        let mut stats = SearchStats::default();
        let mut queue = BinaryHeapWrapper::new();
        distances[source] = W::zero();
        queue.push(source, OrderedFloat(W::zero()));

        while let Some((u, OrderedFloat(d))) = queue.pop() {
            if d > distances[u] {
                stats.stale_pops += 1;
                continue;
            }
            // Everything left in the queue is at least d away
            if d > cutoff {
                break;
            }
            stats.settled += 1;

            for (v, weight) in graph.outgoing_edges(u)? {
                if v >= n {
                    warn!("edge {} -> {} leaves a graph of {} vertices", u, v, n);
                    return Err(Error::MalformedGraph(format!(
                        "edge from {} points to vertex {} but the graph has {} vertices",
                        u, v, n
                    )));
                }
                let new_dist = d + weight;
                if new_dist < distances[v] {
                    if new_dist > cutoff {
                        stats.cutoff_pruned += 1;
                        continue;
                    }
                    distances[v] = new_dist;
                    if let Some(pred) = predecessors.as_deref_mut() {
                        pred[v] = u as i64;
                    }
                    queue.push(v, OrderedFloat(new_dist));
                    stats.relaxed += 1;
                }
            }
        }

        Ok(stats)
    }
}
