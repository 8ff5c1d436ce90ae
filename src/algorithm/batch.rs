use log::{debug, trace};
use num_traits::Float;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::fmt::Debug;
use std::time::Instant;

use crate::algorithm::{Dijkstra, ShortestPathMatrix, NO_PREDECESSOR};
use crate::config::SolverConfig;
use crate::graph::Graph;
use crate::{Error, Result};

/// Runs one independent Dijkstra search per source and collects the rows
///
/// Each search writes only its own row of the output matrix, so workers
/// share nothing but the read-only graph. Rows are handed out one source at
/// a time through rayon's work stealing, which keeps workers busy when some
/// searches run much longer than others.
///
/// Results do not depend on the number of workers: every row is computed by
/// the same sequential search whatever thread runs it.
///
/// A `parallelism` above one builds a fresh rayon pool of that size on every
/// [`solve`](Self::solve) call; zero or negative reuses the global pool. The
/// configured value is capped at
/// [`MAX_PARALLELISM`](crate::config::MAX_PARALLELISM).
#[derive(Debug, Clone, Default)]
pub struct MultiSourceDijkstra {
    config: SolverConfig,
}

impl MultiSourceDijkstra {
    /// Unbounded searches on the host default number of threads
    pub fn new() -> Self {
        MultiSourceDijkstra::default()
    }

    pub fn with_config(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(MultiSourceDijkstra { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves every source in `sources`
    ///
    /// All sources are validated before any search starts. An empty source
    /// list is not an error and yields a matrix with zero rows. Duplicate
    /// sources get their own, identical rows.
    pub fn solve<W, G>(&self, graph: &G, sources: &[usize]) -> Result<ShortestPathMatrix<W>>
    where
        W: Float + Debug + Send + Sync,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        if let Some(&bad) = sources.iter().find(|&&s| s >= n) {
            return Err(Error::InvalidSource {
                vertex: bad,
                num_vertices: n,
            });
        }
        let cutoff: W = self.config.cutoff_as()?;
        let track = self.config.track_predecessors;

        if sources.is_empty() {
            debug!("empty source list, nothing to solve");
            let predecessors = if track { Some(Vec::new()) } else { None };
            return Ok(ShortestPathMatrix::from_parts(Vec::new(), n, Vec::new(), predecessors));
        }

        let cells = sources.len() * n;
        let mut distances = vec![W::infinity(); cells];
        let mut predecessors = if track {
            Some(vec![NO_PREDECESSOR; cells])
        } else {
            None
        };

        let start = Instant::now();
        let parallelism = self.config.parallelism;
        let threads = if parallelism == 1 {
            solve_rows_sequential(graph, sources, cutoff, &mut distances, predecessors.as_deref_mut())?;
            1
        } else if parallelism > 1 {
            let pool = ThreadPoolBuilder::new()
                .num_threads(parallelism as usize)
                .build()?;
            pool.install(|| {
                solve_rows_parallel(graph, sources, cutoff, &mut distances, predecessors.as_deref_mut())
            })?;
            pool.current_num_threads()
        } else {
            solve_rows_parallel(graph, sources, cutoff, &mut distances, predecessors.as_deref_mut())?;
            rayon::current_num_threads()
        };

        debug!(
            "solved {} sources over {} vertices and {} edges on {} threads in {:?}",
            sources.len(),
            n,
            graph.edge_count(),
            threads,
            start.elapsed()
        );

        Ok(ShortestPathMatrix::from_parts(
            sources.to_vec(),
            n,
            distances,
            predecessors,
        ))
    }
}

fn solve_row<W, G>(
    graph: &G,
    source: usize,
    cutoff: W,
    distances: &mut [W],
    predecessors: Option<&mut [i64]>,
) -> Result<()>
where
    W: Float + Debug,
    G: Graph<W>,
{
    let stats = Dijkstra::new().run_into(graph, source, cutoff, distances, predecessors)?;
    trace!("source {} finished: {:?}", source, stats);
    Ok(())
}

fn solve_rows_sequential<W, G>(
    graph: &G,
    sources: &[usize],
    cutoff: W,
    distances: &mut [W],
    predecessors: Option<&mut [i64]>,
) -> Result<()>
where
    W: Float + Debug,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    match predecessors {
        Some(preds) => distances
            .chunks_mut(n)
            .zip(preds.chunks_mut(n))
            .zip(sources)
            .try_for_each(|((dist, pred), &source)| solve_row(graph, source, cutoff, dist, Some(pred))),
        None => distances
            .chunks_mut(n)
            .zip(sources)
            .try_for_each(|(dist, &source)| solve_row(graph, source, cutoff, dist, None)),
    }
}

fn solve_rows_parallel<W, G>(
    graph: &G,
    sources: &[usize],
    cutoff: W,
    distances: &mut [W],
    predecessors: Option<&mut [i64]>,
) -> Result<()>
where
    W: Float + Debug + Send + Sync,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    match predecessors {
        Some(preds) => distances
            .par_chunks_mut(n)
            .zip(preds.par_chunks_mut(n))
            .zip(sources.par_iter())
            .with_max_len(1)
            .try_for_each(|((dist, pred), &source)| solve_row(graph, source, cutoff, dist, Some(pred))),
        None => distances
            .par_chunks_mut(n)
            .zip(sources.par_iter())
            .with_max_len(1)
            .try_for_each(|(dist, &source)| solve_row(graph, source, cutoff, dist, None)),
    }
}
