//! Tests for the minimum spanning tree algorithms.

use super::*;
use crate::error::Error;
use crate::graph::{Direction, GraphEdge};

/// tinyEWG: 8 vertices, 16 edges, MST weight 1.81.
fn build_tiny_ewg() -> Graph<WeightedEdge> {
    let edges = [
        (4, 5, 0.35),
        (4, 7, 0.37),
        (5, 7, 0.28),
        (0, 7, 0.16),
        (1, 5, 0.32),
        (0, 4, 0.38),
        (2, 3, 0.17),
        (1, 7, 0.19),
        (0, 2, 0.26),
        (1, 2, 0.36),
        (1, 3, 0.29),
        (2, 7, 0.34),
        (6, 2, 0.40),
        (3, 6, 0.52),
        (6, 0, 0.58),
        (6, 4, 0.93),
    ];
    Graph::from_edges(8, Direction::Undirected, edges).unwrap()
}

/// Six connected vertices plus four isolated ones.
fn build_forest_graph() -> Graph<WeightedEdge> {
    let edges = [
        (0, 1, 7.0),
        (1, 2, 4.0),
        (1, 3, 4.0),
        (1, 4, 11.0),
        (2, 5, 5.0),
        (3, 4, 6.0),
        (3, 5, 3.0),
        (4, 5, 13.0),
    ];
    Graph::from_edges(10, Direction::Undirected, edges).unwrap()
}

/// `(min, max)` endpoints of every tree edge, sorted.
fn normalized(edges: &[WeightedEdge]) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = edges
        .iter()
        .map(|e| (e.source().min(e.target()), e.source().max(e.target())))
        .collect();
    pairs.sort_unstable();
    pairs
}

#[test]
fn test_all_algorithms_agree_on_tiny_ewg() {
    let graph = build_tiny_ewg();
    for algorithm in MstAlgorithm::ALL {
        let mst = algorithm.compute(&graph).unwrap();
        assert_eq!(mst.algorithm(), algorithm);
        assert!((mst.weight() - 1.81).abs() < 1e-9, "{algorithm}: {}", mst.weight());
        assert_eq!(mst.edges().len(), 7);
        assert_eq!(mst.tree_count(), 1);
        assert!(mst.is_spanning_tree());
        assert_eq!(
            normalized(mst.edges()),
            vec![(0, 2), (0, 7), (1, 7), (2, 3), (2, 6), (4, 5), (5, 7)]
        );
    }
}

#[test]
fn test_forest_on_disconnected_graph() {
    let graph = build_forest_graph();
    for algorithm in MstAlgorithm::ALL {
        let mst = algorithm.compute(&graph).unwrap();
        assert_eq!(mst.weight(), 24.0, "{algorithm}");
        assert_eq!(mst.tree_count(), 5);
        assert!(!mst.is_spanning_tree());
        assert_eq!(
            normalized(mst.edges()),
            vec![(0, 1), (1, 2), (1, 3), (3, 4), (3, 5)]
        );
    }
}

#[test]
fn test_lazy_prim_edges_in_growth_order() {
    let mst = LazyPrimMst::new(&build_tiny_ewg()).unwrap();
    let order: Vec<(usize, usize)> = mst
        .edges()
        .iter()
        .map(|e| (e.source(), e.target()))
        .collect();
    assert_eq!(order, vec![(0, 7), (7, 1), (0, 2), (2, 3), (7, 5), (5, 4), (2, 6)]);
}

#[test]
fn test_lazy_prim_queue_keeps_stale_edges() {
    let graph = build_tiny_ewg();
    let mst = LazyPrimMst::new(&graph).unwrap();
    assert!(
        mst.max_queue_len() > mst.edges().len(),
        "peak {} vs {} tree edges",
        mst.max_queue_len(),
        mst.edges().len()
    );
    assert!(mst.max_queue_len() <= graph.edge_count());
}

#[test]
fn test_prim_queue_bounded_by_vertex_count() {
    let graph = build_tiny_ewg();
    let mst = PrimMst::new(&graph).unwrap();
    assert!(mst.max_queue_len() >= 1);
    assert!(mst.max_queue_len() <= graph.vertex_count());

    let dense: Graph<WeightedEdge> = Graph::from_edges(
        5,
        Direction::Undirected,
        (0..5_usize).flat_map(|v| ((v + 1)..5).map(move |w| (v, w, (v * 5 + w) as f64))),
    )
    .unwrap();
    let eager = PrimMst::new(&dense).unwrap();
    let lazy = LazyPrimMst::new(&dense).unwrap();
    assert!(eager.max_queue_len() <= dense.vertex_count());
    assert!(lazy.max_queue_len() > eager.max_queue_len());
}

#[test]
fn test_prim_edges_in_growth_order() {
    let mst = PrimMst::new(&build_tiny_ewg()).unwrap();
    let order: Vec<(usize, usize)> = mst
        .edges()
        .iter()
        .map(|e| (e.source(), e.target()))
        .collect();
    assert_eq!(order, vec![(0, 7), (7, 1), (0, 2), (2, 3), (7, 5), (5, 4), (2, 6)]);
}

#[test]
fn test_kruskal_edges_in_weight_order() {
    let mst = KruskalMst::new(&build_tiny_ewg()).unwrap();
    let weights: Vec<f64> = mst.edges().iter().map(GraphEdge::weight).collect();
    assert_eq!(weights, vec![0.16, 0.17, 0.19, 0.26, 0.28, 0.35, 0.40]);
}

#[test]
fn test_parallel_edges_and_self_loops_are_ignored() {
    let graph: Graph<WeightedEdge> = Graph::from_edges(
        3,
        Direction::Undirected,
        [(0, 0, 0.1), (0, 1, 2.0), (0, 1, 1.0), (1, 2, 3.0), (2, 2, 0.5)],
    )
    .unwrap();
    for algorithm in MstAlgorithm::ALL {
        let mst = algorithm.compute(&graph).unwrap();
        assert_eq!(mst.weight(), 4.0, "{algorithm}");
        assert_eq!(mst.edges().len(), 2);
    }
}

#[test]
fn test_empty_graph() {
    let graph: Graph<WeightedEdge> = Graph::undirected(0);
    for algorithm in MstAlgorithm::ALL {
        let mst = algorithm.compute(&graph).unwrap();
        assert_eq!(mst.weight(), 0.0);
        assert_eq!(mst.tree_count(), 0);
        assert!(mst.edges().is_empty());
    }
}

#[test]
fn test_rejects_directed_graph() {
    let graph: Graph<WeightedEdge> =
        Graph::from_edges(2, Direction::Directed, [(0, 1, 1.0)]).unwrap();
    for algorithm in MstAlgorithm::ALL {
        let err = algorithm.compute(&graph).err().unwrap();
        assert!(matches!(err, Error::DirectionMismatch { .. }));
    }
}

#[test]
fn test_summary_serializes() {
    let mst = MstAlgorithm::Prim.compute(&build_forest_graph()).unwrap();
    let summary = mst.summary();
    assert_eq!(summary.algorithm, MstAlgorithm::Prim);
    assert_eq!(summary.tree_count, 5);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["algorithm"], "prim");
    assert_eq!(json["weight"], 24.0);
    assert_eq!(json["edges"].as_array().unwrap().len(), 5);
}

#[test]
fn test_algorithm_display() {
    assert_eq!(MstAlgorithm::LazyPrim.to_string(), "lazy-prim");
    assert_eq!(MstAlgorithm::Kruskal.to_string(), "kruskal");
    assert_eq!(MstAlgorithm::default(), MstAlgorithm::LazyPrim);
}
