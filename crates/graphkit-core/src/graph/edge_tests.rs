//! Tests for edge value types.

use super::edge::{Edge, GraphEdge, WeightedEdge};
use crate::error::Error;

#[test]
fn test_edge_other_endpoint() {
    let edge = Edge::new(2, 9);
    assert_eq!(edge.either(), 2);
    assert_eq!(edge.other(2).unwrap(), 9);
    assert_eq!(edge.other(9).unwrap(), 2);
}

#[test]
fn test_edge_other_rejects_non_endpoint() {
    let edge = Edge::new(2, 9);
    let err = edge.other(4).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidEdge {
            vertex: 4,
            from: 2,
            to: 9
        }
    ));
}

#[test]
fn test_self_loop_other_is_itself() {
    let edge = Edge::new(5, 5);
    assert!(edge.is_self_loop());
    assert_eq!(edge.other(5).unwrap(), 5);
}

#[test]
fn test_edge_reversed() {
    let edge = WeightedEdge::new(1, 3, 0.25);
    let back = edge.reversed();
    assert_eq!(back.source(), 3);
    assert_eq!(back.target(), 1);
    assert!((back.weight() - 0.25).abs() < f64::EPSILON);
}

#[test]
fn test_weighted_edge_equality_tolerates_rounding() {
    let a = WeightedEdge::new(0, 1, 0.3);
    let b = WeightedEdge::new(0, 1, 0.1 + 0.2);
    let c = WeightedEdge::new(0, 1, 0.3002);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_weighted_edge_equality_requires_same_endpoints() {
    let a = WeightedEdge::new(0, 1, 0.5);
    let b = WeightedEdge::new(1, 0, 0.5);
    assert_ne!(a, b);
}

#[test]
fn test_weighted_edge_orders_by_weight_only() {
    let light = WeightedEdge::new(7, 8, 0.16);
    let heavy = WeightedEdge::new(0, 1, 0.93);
    assert!(light < heavy);
    assert!(heavy > light);
    assert_eq!(
        light.cmp_weight(&heavy),
        std::cmp::Ordering::Less
    );
}

#[test]
fn test_unweighted_edge_has_unit_weight() {
    assert!((Edge::new(0, 1).weight() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_edge_display() {
    assert_eq!(Edge::new(4, 5).to_string(), "4-5");
    assert_eq!(WeightedEdge::new(4, 5, 0.35).to_string(), "4-5 0.35000");
}

#[test]
fn test_edge_from_tuples() {
    let edge: Edge = (3, 4).into();
    assert_eq!(edge, Edge::new(3, 4));
    let weighted: WeightedEdge = (3, 4, 1.5).into();
    assert_eq!(weighted, WeightedEdge::new(3, 4, 1.5));
}

#[test]
fn test_weighted_edge_serialize_deserialize() {
    let edge = WeightedEdge::new(6, 2, 0.4);
    let json = serde_json::to_string(&edge).unwrap();
    let parsed: WeightedEdge = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, edge);
}
