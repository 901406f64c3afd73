//! Tests for error codes and messages.

use crate::error::Error;
use crate::graph::Direction;

#[test]
fn test_error_display_carries_code() {
    let err = Error::VertexOutOfRange {
        vertex: 12,
        vertex_count: 10,
    };
    assert_eq!(
        err.to_string(),
        "[GRAPH-001] Vertex 12 out of range for graph with 10 vertices"
    );
    assert_eq!(err.code(), "GRAPH-001");
}

#[test]
fn test_direction_mismatch_message() {
    let err = Error::DirectionMismatch {
        expected: Direction::Directed,
        found: Direction::Undirected,
    };
    assert_eq!(
        err.to_string(),
        "[GRAPH-003] Expected directed graph, found undirected graph"
    );
}

#[test]
fn test_error_codes_are_distinct() {
    let errors = [
        Error::VertexOutOfRange {
            vertex: 0,
            vertex_count: 0,
        },
        Error::InvalidEdge {
            vertex: 3,
            from: 1,
            to: 2,
        },
        Error::DirectionMismatch {
            expected: Direction::Directed,
            found: Direction::Undirected,
        },
        Error::NotADag { cycle: vec![0, 1, 0] },
        Error::NegativeWeight {
            from: 0,
            to: 1,
            weight: -1.0,
        },
        Error::parse(1, "bad"),
        Error::UnknownJob {
            job: 4,
            job_count: 2,
        },
    ];
    let mut codes: Vec<&str> = errors.iter().map(Error::code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn test_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.is_recoverable());
}

#[test]
fn test_precondition_errors_not_recoverable() {
    assert!(!Error::NotADag { cycle: vec![] }.is_recoverable());
    assert!(Error::parse(3, "expected 2 tokens").is_recoverable());
}
