//! Error types for graphkit.
//!
//! Every fallible operation in the crate returns [`Result`]. Each variant
//! carries a stable code (`GRAPH-XXX`) so callers and logs can match on it
//! without parsing messages.

use thiserror::Error;

use crate::graph::Direction;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building graphs or running algorithms on them.
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex index outside `[0, vertex_count)`.
    #[error("[GRAPH-001] Vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// `other(x)` called with a vertex that is not an endpoint of the edge.
    #[error("[GRAPH-002] Vertex {vertex} is not an endpoint of edge {from}-{to}")]
    InvalidEdge {
        /// The vertex passed to `other`.
        vertex: usize,
        /// Edge tail.
        from: usize,
        /// Edge head.
        to: usize,
    },

    /// The algorithm needs the other direction policy.
    #[error("[GRAPH-003] Expected {expected} graph, found {found} graph")]
    DirectionMismatch {
        /// Policy the algorithm requires.
        expected: Direction,
        /// Policy of the graph that was passed.
        found: Direction,
    },

    /// Acyclic relaxation was requested on a graph that has a directed cycle.
    #[error("[GRAPH-004] Graph has a directed cycle: {cycle:?}")]
    NotADag {
        /// One cycle found in the graph, first vertex repeated last.
        cycle: Vec<usize>,
    },

    /// Dijkstra input contains an edge with negative weight.
    #[error("[GRAPH-005] Edge {from}->{to} has negative weight {weight}")]
    NegativeWeight {
        /// Edge tail.
        from: usize,
        /// Edge head.
        to: usize,
        /// The negative weight.
        weight: f64,
    },

    /// Malformed text input.
    #[error("[GRAPH-006] Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A job lists a successor that does not exist.
    #[error("[GRAPH-007] Job {job} out of range for schedule with {job_count} jobs")]
    UnknownJob {
        /// The offending successor index.
        job: usize,
        /// Number of jobs in the schedule.
        job_count: usize,
    },

    /// IO error.
    #[error("[GRAPH-008] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("[GRAPH-009] JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code (e.g. `"GRAPH-001"`).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::VertexOutOfRange { .. } => "GRAPH-001",
            Self::InvalidEdge { .. } => "GRAPH-002",
            Self::DirectionMismatch { .. } => "GRAPH-003",
            Self::NotADag { .. } => "GRAPH-004",
            Self::NegativeWeight { .. } => "GRAPH-005",
            Self::Parse { .. } => "GRAPH-006",
            Self::UnknownJob { .. } => "GRAPH-007",
            Self::Io(_) => "GRAPH-008",
            Self::Json(_) => "GRAPH-009",
        }
    }

    /// Returns true if retrying with corrected input can succeed.
    ///
    /// Precondition violations on an already-built graph are not recoverable;
    /// input problems (files, text) are.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Io(_) | Self::Json(_))
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
