use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphgen::{GraphView, RandomEngine, UndirectedGraph};

fn bench_add_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_edges");
    // Sparse requests take the rejection path, the near-saturation request
    // exercises complement enumeration.
    for (vertices, edges) in [(1_000, 5_000), (1_000, 100_000), (1_000, 480_000)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{vertices}v_{edges}e")),
            &(vertices, edges),
            |b, &(vertices, edges)| {
                b.iter(|| {
                    let mut rng = RandomEngine::new(1);
                    let mut graph = UndirectedGraph::new(vertices);
                    graph.add_edges(&mut rng, edges).unwrap();
                    black_box(graph.edge_count())
                })
            },
        );
    }
    group.finish();
}

fn bench_connect(c: &mut Criterion) {
    let mut group = c.benchmark_group("connect");
    for vertices in [1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(vertices),
            &vertices,
            |b, &vertices| {
                b.iter(|| {
                    let mut rng = RandomEngine::new(1);
                    let mut graph = UndirectedGraph::new(vertices);
                    graph.add_edges(&mut rng, vertices / 2).unwrap();
                    graph.connect(&mut rng);
                    black_box(graph.edge_count())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_add_edges, bench_connect);
criterion_main!(benches);
