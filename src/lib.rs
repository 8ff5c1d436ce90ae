//! CSR Dijkstra - parallel multi-source shortest paths
//!
//! Runs one independent Dijkstra search per requested source over a read-only
//! compressed sparse row graph, writing distance and predecessor rows into a
//! pre-sized matrix. Searches are spread across a rayon pool and may be
//! bounded by a distance cutoff.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    batch::MultiSourceDijkstra, dijkstra::Dijkstra, matrix::ShortestPathMatrix,
    tree::ShortestPathTree, SearchStats, NO_PREDECESSOR,
};
pub use config::SolverConfig;
/// Re-export main types for convenient use
pub use graph::csr::{CsrGraph, CsrGraphBuf};

use num_traits::Float;
use std::fmt::Debug;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    #[error("Negative edge weight {weight} at edge {edge}")]
    NegativeWeight { edge: usize, weight: f64 },

    #[error("Vertex {vertex} out of range for graph with {num_vertices} vertices")]
    OutOfRange { vertex: usize, num_vertices: usize },

    #[error("Invalid source vertex {vertex} for graph with {num_vertices} vertices")]
    InvalidSource { vertex: usize, num_vertices: usize },

    #[error("Invalid cutoff: {0}")]
    InvalidCutoff(f64),

    #[error("Output buffer has length {actual}, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),

    #[error("Invalid solver configuration: {0}")]
    Config(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error::ThreadPool(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Solves shortest paths from every vertex in `sources` over the graph given
/// by the three compressed row arrays.
///
/// `cutoff` bounds the explored region (inclusive); pass `W::infinity()` for
/// an unbounded search. `parallelism <= 0` uses the host default concurrency.
/// The graph is fully validated before any search starts, so a failing call
/// never produces partial output.
pub fn solve<W>(
    row_offset: &[usize],
    column: &[usize],
    weight: &[W],
    sources: &[usize],
    cutoff: W,
    parallelism: i64,
) -> Result<ShortestPathMatrix<W>>
where
    W: Float + Debug + Send + Sync,
{
    let graph = CsrGraph::new(row_offset, column, weight)?;
    let config = SolverConfig::default()
        .with_parallelism(parallelism)
        .with_cutoff(cutoff.to_f64().unwrap_or(f64::NAN));
    MultiSourceDijkstra::with_config(config)?.solve(&graph, sources)
}
