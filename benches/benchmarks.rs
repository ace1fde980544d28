//! Criterion benchmarks for kind-graph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use kind_graph::Graph;

const KINDS: [&str; 3] = ["Road", "Rail", "Air"];

/// Build a graph with random edges between `node_count` nodes.
fn make_graph(node_count: usize, edges_per_node: usize) -> (Graph, Vec<String>) {
    let mut rng = rand::thread_rng();
    let names: Vec<String> = (0..node_count).map(|i| format!("node_{}", i)).collect();

    let mut graph = Graph::new();
    for name in &names {
        graph.add_node(name).unwrap();
    }
    for i in 0..node_count {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..node_count);
            if target != i {
                let kind = KINDS[rng.gen_range(0..KINDS.len())];
                graph.add_edge(&names[i], &names[target], kind).unwrap();
            }
        }
    }
    (graph, names)
}

fn bench_add_edge(c: &mut Criterion) {
    let (graph, names) = make_graph(1_000, 5);
    c.bench_function("add_edge_1k", |b| {
        let mut rng = rand::thread_rng();
        let mut graph = graph.clone();
        b.iter(|| {
            let a = &names[rng.gen_range(0..names.len())];
            let z = &names[rng.gen_range(0..names.len())];
            let _ = graph.add_edge(a, z, "Road");
        })
    });
}

fn bench_has_edge(c: &mut Criterion) {
    let (graph, names) = make_graph(1_000, 5);
    c.bench_function("has_edge_1k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let a = &names[rng.gen_range(0..names.len())];
            let z = &names[rng.gen_range(0..names.len())];
            graph.has_edge(a, z, "Rail")
        })
    });
}

fn bench_remove_node(c: &mut Criterion) {
    let (graph, names) = make_graph(1_000, 5);
    c.bench_function("remove_node_1k", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| g.remove_node(&names[500]),
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_print(c: &mut Criterion) {
    let (graph, _) = make_graph(1_000, 5);
    c.bench_function("render_1k", |b| b.iter(|| graph.to_string()));
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_has_edge,
    bench_remove_node,
    bench_print
);
criterion_main!(benches);
