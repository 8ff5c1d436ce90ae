use crate::graph::CsrGraphBuf;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a 2D grid graph with 4-connectivity and unit weights
pub fn grid_2d(width: usize, height: usize) -> CsrGraphBuf<f64> {
    let index = |x: usize, y: usize| y * width + x;
    let mut edges = Vec::with_capacity(4 * width * height);

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x > 0 {
                edges.push((current, index(x - 1, y), 1.0));
            }
            if x + 1 < width {
                edges.push((current, index(x + 1, y), 1.0));
            }
            if y > 0 {
                edges.push((current, index(x, y - 1), 1.0));
            }
            if y + 1 < height {
                edges.push((current, index(x, y + 1), 1.0));
            }
        }
    }

    CsrGraphBuf::from_edges(width * height, &edges)
        .unwrap_or_else(|e| unreachable!("grid edges are always in range: {}", e))
}

/// Generates a random directed graph with roughly `edges_per_vertex * n` edges
///
/// Weights are drawn uniformly from `[1, 100)`. The same seed always yields
/// the same graph.
pub fn random_graph(n: usize, edges_per_vertex: f64, seed: u64) -> CsrGraphBuf<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = if n == 0 {
        0
    } else {
        (edges_per_vertex * n as f64) as usize
    };

    let mut edges = Vec::with_capacity(num_edges);
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            edges.push((u, v, rng.gen_range(1.0..100.0)));
        }
    }

    CsrGraphBuf::from_edges(n, &edges)
        .unwrap_or_else(|e| unreachable!("random edges are always in range: {}", e))
}
