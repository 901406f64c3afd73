//! Benchmarks for the graph algorithms on random sparse graphs.
//!
//! Measures:
//! - Traversal (DFS reachability, BFS paths)
//! - Structure queries (connected components, Kosaraju SCC, topological order)
//! - Spanning trees (lazy Prim vs eager Prim vs Kruskal)
//! - Shortest paths (Dijkstra vs acyclic relaxation on a DAG)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graphkit_core::graph::{BreadthFirstPaths, DepthFirstSearch, Direction, Graph, WeightedEdge};
use graphkit_core::mst::MstAlgorithm;
use graphkit_core::paths::{AcyclicPaths, DijkstraPaths};
use graphkit_core::structure::{ConnectedComponents, KosarajuScc, Topological};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const EDGES_PER_VERTEX: usize = 4;

/// Random graph with `EDGES_PER_VERTEX * n` edges and weights in `[0, 1)`.
fn random_graph(n: usize, direction: Direction, seed: u64) -> Graph<WeightedEdge> {
    let mut rng = StdRng::seed_from_u64(seed);
    let edges = (0..EDGES_PER_VERTEX * n).map(|_| {
        (
            rng.gen_range(0..n),
            rng.gen_range(0..n),
            rng.gen::<f64>(),
        )
    });
    Graph::from_edges(n, direction, edges).unwrap()
}

/// Random DAG: every edge points from a lower to a higher index.
fn random_dag(n: usize, seed: u64) -> Graph<WeightedEdge> {
    let mut rng = StdRng::seed_from_u64(seed);
    let edges = (0..EDGES_PER_VERTEX * n)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n), rng.gen::<f64>()))
        .filter(|(v, w, _)| v != w)
        .map(|(v, w, weight)| (v.min(w), v.max(w), weight));
    Graph::from_edges(n, Direction::Directed, edges).unwrap()
}

// =============================================================================
// Traversal
// =============================================================================

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for n in SIZES {
        let graph = random_graph(n, Direction::Undirected, 42);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("dfs", n), &graph, |b, g| {
            b.iter(|| black_box(DepthFirstSearch::new(g, 0).unwrap().count()));
        });
        group.bench_with_input(BenchmarkId::new("bfs", n), &graph, |b, g| {
            b.iter(|| black_box(BreadthFirstPaths::new(g, 0).unwrap()));
        });
    }

    group.finish();
}

// =============================================================================
// Structure
// =============================================================================

fn bench_structure(c: &mut Criterion) {
    let mut group = c.benchmark_group("structure");

    for n in SIZES {
        let undirected = random_graph(n, Direction::Undirected, 7);
        let directed = random_graph(n, Direction::Directed, 7);
        let dag = random_dag(n, 7);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("components", n), &undirected, |b, g| {
            b.iter(|| black_box(ConnectedComponents::new(g).count()));
        });
        group.bench_with_input(BenchmarkId::new("kosaraju_scc", n), &directed, |b, g| {
            b.iter(|| black_box(KosarajuScc::new(g).unwrap().count()));
        });
        group.bench_with_input(BenchmarkId::new("topological", n), &dag, |b, g| {
            b.iter(|| black_box(Topological::new(g).unwrap().is_dag()));
        });
    }

    group.finish();
}

// =============================================================================
// Spanning trees
// =============================================================================

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");
    group.sample_size(20);

    for n in SIZES {
        let graph = random_graph(n, Direction::Undirected, 1234);
        group.throughput(Throughput::Elements((EDGES_PER_VERTEX * n) as u64));

        for algorithm in MstAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.to_string(), n),
                &graph,
                |b, g| {
                    b.iter(|| black_box(algorithm.compute(g).unwrap()));
                },
            );
        }
    }

    group.finish();
}

// =============================================================================
// Shortest paths
// =============================================================================

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    group.sample_size(20);

    for n in SIZES {
        let dag = random_dag(n, 99);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("dijkstra_dag", n), &dag, |b, g| {
            b.iter(|| black_box(DijkstraPaths::new(g, 0).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("acyclic_dag", n), &dag, |b, g| {
            b.iter(|| black_box(AcyclicPaths::shortest(g, 0).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_traversal,
    bench_structure,
    bench_mst,
    bench_shortest_paths
);
criterion_main!(benches);
