use chrono::{DateTime, Utc};
use csr_dijkstra::graph::generators::random_graph;
use csr_dijkstra::graph::{CsrGraphBuf, Graph};
use csr_dijkstra::{MultiSourceDijkstra, ShortestPathMatrix, SolverConfig};
use serde::Serialize;
use std::time::{Duration, Instant};

/// One row of the summary table
#[derive(Debug, Serialize)]
struct BenchmarkRow {
    vertices: usize,
    edges: usize,
    sources: usize,
    sequential_ms: f64,
    parallel_ms: f64,
    threads: usize,
    speedup: f64,
    identical: bool,
}

#[derive(Debug, Serialize)]
struct BenchmarkReport {
    generated_at: DateTime<Utc>,
    edge_factor: f64,
    cutoff: Option<f64>,
    rows: Vec<BenchmarkRow>,
}

// Runs one batch and reports how long it took
fn run_batch(
    label: &str,
    config: SolverConfig,
    graph: &CsrGraphBuf<f64>,
    sources: &[usize],
) -> csr_dijkstra::Result<(ShortestPathMatrix<f64>, Duration)> {
    println!("Running {} on graph with {} vertices...", label, graph.vertex_count());

    let solver = MultiSourceDijkstra::with_config(config)?;
    let start = Instant::now();
    let result = solver.solve(graph, sources)?;
    let duration = start.elapsed();

    let reachable = result.distances().iter().filter(|d| d.is_finite()).count();
    println!("  - Reached {} (source, vertex) pairs in {:?}", reachable, duration);

    Ok((result, duration))
}

fn main() -> csr_dijkstra::Result<()> {
    env_logger::init();
    let json = std::env::args().any(|arg| arg == "--json");

    let graph_sizes = [1_000, 10_000, 50_000, 100_000];
    let edge_factor = 4.0;
    let num_sources = 64;
    let cutoff = Some(500.0);

    println!("=====================================================");
    println!("Benchmark: sequential vs parallel multi-source Dijkstra");
    println!("Edge factor: {} edges per vertex, {} sources", edge_factor, num_sources);
    println!("=====================================================");

    let mut rows = Vec::new();
    for (i, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = random_graph(size, edge_factor, i as u64);
        let sources: Vec<usize> = (0..num_sources).map(|s| (s * 7919) % size).collect();

        let mut config = SolverConfig::default();
        config.cutoff = cutoff;

        let (sequential, sequential_time) =
            run_batch("sequential", config.clone().with_parallelism(1), &graph, &sources)?;
        let (parallel, parallel_time) =
            run_batch("parallel", config.with_parallelism(0), &graph, &sources)?;

        let identical = sequential == parallel;
        if !identical {
            println!("  ! results differ between sequential and parallel runs");
        }

        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64();
        println!("Speedup - parallel vs sequential: {:.2}x", speedup);

        rows.push(BenchmarkRow {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            sources: sources.len(),
            sequential_ms: sequential_time.as_secs_f64() * 1e3,
            parallel_ms: parallel_time.as_secs_f64() * 1e3,
            threads: rayon::current_num_threads(),
            speedup,
            identical,
        });
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<15} | {:<15} | {:<8} | {:<10}",
        "Vertices", "Edges", "Sequential (ms)", "Parallel (ms)", "Threads", "SpeedUp"
    );
    println!("-----------------------------------------------------");
    for row in &rows {
        println!(
            "{:<10} | {:<10} | {:<15.2} | {:<15.2} | {:<8} | {:<10.2}",
            row.vertices, row.edges, row.sequential_ms, row.parallel_ms, row.threads, row.speedup
        );
    }

    if json {
        let report = BenchmarkReport {
            generated_at: Utc::now(),
            edge_factor,
            cutoff,
            rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
