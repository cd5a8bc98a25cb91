//! Criterion benchmarks for undirected-graph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use undirected_graph::{Attributes, Graph};

/// Build a random graph with roughly `edges_per_node` edges per node.
fn make_graph(node_count: u64, edges_per_node: usize) -> Graph<u64, u32> {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::with_capacity(node_count as usize, node_count as usize * edges_per_node);

    for i in 0..node_count {
        graph.add_node(i, Attributes::new());
    }
    for i in 0..node_count {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..node_count);
            graph.add_edge(i, target, Some(rng.gen_range(0..100)));
        }
    }
    graph
}

fn bench_add_edge(c: &mut Criterion) {
    let mut graph = make_graph(10_000, 3);

    c.bench_function("add_edge_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let a = rng.gen_range(0..10_000u64);
            let z = rng.gen_range(0..10_000u64);
            graph.add_edge(a, z, None);
        })
    });
}

fn bench_has_edge(c: &mut Criterion) {
    let graph = make_graph(100_000, 3);

    c.bench_function("has_edge_100k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let a = rng.gen_range(0..100_000u64);
            let z = rng.gen_range(0..100_000u64);
            graph.has_edge(&a, &z)
        })
    });
}

fn bench_remove_and_restore_node(c: &mut Criterion) {
    let mut graph = make_graph(10_000, 5);

    c.bench_function("remove_restore_node_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let node = rng.gen_range(0..10_000u64);
            let neighbors: Vec<u64> = graph.neighbors(&node).copied().collect();
            graph.remove_node(&node);
            for n in neighbors {
                graph.add_edge(node, n, None);
            }
        })
    });
}

fn bench_enumerate_edges(c: &mut Criterion) {
    let graph = make_graph(100_000, 3);

    c.bench_function("enumerate_edges_100k", |b| {
        b.iter(|| graph.number_of_edges())
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_has_edge,
    bench_remove_and_restore_node,
    bench_enumerate_edges,
);
criterion_main!(benches);
