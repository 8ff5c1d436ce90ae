pub mod batch;
pub mod dijkstra;
pub mod matrix;
pub mod tree;

pub use batch::MultiSourceDijkstra;
pub use dijkstra::Dijkstra;
pub use matrix::ShortestPathMatrix;
pub use tree::ShortestPathTree;

/// Predecessor value of the source itself and of every unreached vertex
pub const NO_PREDECESSOR: i64 = -9999;

/// Counters collected while one single-source search runs
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices popped with their final distance
    pub settled: usize,
    /// Successful relaxations (queue pushes after the source)
    pub relaxed: usize,
    /// Queue entries discarded because a shorter distance was already known
    pub stale_pops: usize,
    /// Improving relaxations dropped because they exceeded the cutoff
    pub cutoff_pruned: usize,
}
