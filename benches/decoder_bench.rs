//! Criterion benchmarks for the dominating-set decoder.
//!
//! Uses synthetic random graphs of increasing size to measure the cost of
//! a single decode and of a full population evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use domset_rk::decoder::{evaluate_batch, DecoderConfig, MdsDecoder};
use domset_rk::graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ===========================================================================
// Instances: random graphs with average degree ~8
// ===========================================================================

fn random_graph(n: usize, rng: &mut StdRng) -> Graph {
    let edges: Vec<(usize, usize)> = (0..n * 4)
        .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
        .collect();
    Graph::from_edges(n, &edges).expect("endpoints are in range")
}

fn random_keys(n: usize, rng: &mut StdRng) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(0.0..1.0)).collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("mds_decode");

    for &n in &[100usize, 1_000, 10_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = random_graph(n, &mut rng);
        let keys = random_keys(n, &mut rng);
        let decoder = MdsDecoder::new(&graph, DecoderConfig::default())
            .expect("default config is valid");
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let solution = decoder.decode(black_box(keys));
                black_box(solution)
            })
        });
    }
    group.finish();
}

fn bench_population(c: &mut Criterion) {
    let mut group = c.benchmark_group("mds_population");
    group.sample_size(10);

    let n = 2_000;
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(n, &mut rng);
    let population: Vec<Vec<f64>> = (0..100).map(|_| random_keys(n, &mut rng)).collect();
    let decoder =
        MdsDecoder::new(&graph, DecoderConfig::default()).expect("default config is valid");

    for &parallel in &[false, true] {
        group.bench_with_input(
            BenchmarkId::new("parallel", parallel),
            &population,
            |b, population| {
                b.iter(|| {
                    let solutions = evaluate_batch(&decoder, black_box(population), parallel);
                    black_box(solutions)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_population);
criterion_main!(benches);
