use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stratum::{traverse_bfs, traverse_dfs, Direction, UnweightedGraph};

/// Complete binary tree over `0..size`, edges pointing away from the root.
fn binary_tree(size: usize) -> UnweightedGraph<usize> {
    let mut graph = UnweightedGraph::with_capacity(size);
    for i in 0..size {
        graph.add(i);
    }
    for i in 1..size {
        graph.connect(&((i - 1) / 2), &i, Direction::OneWay);
    }
    graph
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Graph Build");
    for size in [64usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("binary_tree", size), &size, |b, &size| {
            b.iter(|| black_box(binary_tree(size)));
        });
    }
    group.finish();
}

fn bench_graph_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("Graph Traversal");
    for size in [64usize, 256, 1024] {
        let graph = binary_tree(size);
        group.bench_with_input(BenchmarkId::new("bfs", size), &graph, |b, graph| {
            b.iter(|| black_box(traverse_bfs(graph, |x| *x)));
        });
        group.bench_with_input(BenchmarkId::new("dfs", size), &graph, |b, graph| {
            b.iter(|| black_box(traverse_dfs(graph, |x| *x)));
        });
    }
    group.finish();
}

fn bench_graph_remove(c: &mut Criterion) {
    let size = 512;

    c.bench_function("item_graph_remove_middle", |b| {
        b.iter_batched(
            || binary_tree(size),
            |mut graph| black_box(graph.remove(&(size / 2))),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_graph_build, bench_graph_traversal, bench_graph_remove);
criterion_main!(benches);
