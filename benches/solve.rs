//! Batch solve throughput for different thread counts and cutoffs
//!
//! ```bash
//! cargo bench --bench solve
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use csr_dijkstra::graph::generators::random_graph;
use csr_dijkstra::{MultiSourceDijkstra, SolverConfig};

const SEED: u64 = 42;

fn bench_thread_counts(c: &mut Criterion) {
    let graph = random_graph(20_000, 4.0, SEED);
    let sources: Vec<usize> = (0..128).map(|i| (i * 151) % 20_000).collect();

    let mut group = c.benchmark_group("solve_threads");
    group.throughput(Throughput::Elements(sources.len() as u64));
    for &threads in &[1i64, 2, 4, 0] {
        let solver =
            MultiSourceDijkstra::with_config(SolverConfig::default().with_parallelism(threads)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, _| {
            b.iter(|| solver.solve(black_box(&graph), black_box(&sources)).unwrap())
        });
    }
    group.finish();
}

fn bench_cutoffs(c: &mut Criterion) {
    let graph = random_graph(20_000, 4.0, SEED);
    let sources: Vec<usize> = (0..64).collect();

    let mut group = c.benchmark_group("solve_cutoff");
    for &cutoff in &[50.0, 200.0, f64::INFINITY] {
        let config = SolverConfig::default().with_cutoff(cutoff);
        let solver = MultiSourceDijkstra::with_config(config).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(cutoff), &cutoff, |b, _| {
            b.iter(|| solver.solve(black_box(&graph), black_box(&sources)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_thread_counts, bench_cutoffs);
criterion_main!(benches);
