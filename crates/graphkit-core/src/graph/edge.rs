//! Edge value types.
//!
//! Edges are small `Copy` values naming two vertex indices. A [`WeightedEdge`]
//! adds an `f64` weight; its equality tolerates rounding (see [`WEIGHT_EPSILON`])
//! and its ordering looks at the weight only.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tolerance used when comparing edge weights for equality.
pub const WEIGHT_EPSILON: f64 = 1e-4;

/// Common interface of the edge types stored in a [`Graph`](super::Graph).
///
/// Adjacency lists always hold edges oriented away from the vertex that owns
/// the list, so `source()` of an entry in `adjacent(v)` is `v`.
pub trait GraphEdge: Copy + fmt::Debug {
    /// Tail vertex.
    fn source(&self) -> usize;

    /// Head vertex.
    fn target(&self) -> usize;

    /// The same connection with its endpoints swapped.
    #[must_use]
    fn reversed(&self) -> Self;

    /// Edge weight; `1.0` for unweighted edges.
    fn weight(&self) -> f64;

    /// Either endpoint (the tail).
    fn either(&self) -> usize {
        self.source()
    }

    /// The endpoint opposite to `vertex`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidEdge` if `vertex` is not an endpoint.
    fn other(&self, vertex: usize) -> Result<usize> {
        let (v, w) = (self.source(), self.target());
        if vertex == v {
            Ok(w)
        } else if vertex == w {
            Ok(v)
        } else {
            Err(Error::InvalidEdge {
                vertex,
                from: v,
                to: w,
            })
        }
    }

    /// Returns true if both endpoints are the same vertex.
    fn is_self_loop(&self) -> bool {
        self.source() == self.target()
    }
}

/// An unweighted connection between two vertices.
///
/// # Example
///
/// ```rust
/// use graphkit_core::graph::{Edge, GraphEdge};
///
/// let edge = Edge::new(3, 7);
/// assert_eq!(edge.other(3).unwrap(), 7);
/// assert!(edge.other(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    v: usize,
    w: usize,
}

impl Edge {
    /// Creates an edge `v-w` (or `v->w` in a directed graph).
    #[must_use]
    pub const fn new(v: usize, w: usize) -> Self {
        Self { v, w }
    }
}

impl GraphEdge for Edge {
    fn source(&self) -> usize {
        self.v
    }

    fn target(&self) -> usize {
        self.w
    }

    fn reversed(&self) -> Self {
        Self::new(self.w, self.v)
    }

    fn weight(&self) -> f64 {
        1.0
    }
}

impl From<(usize, usize)> for Edge {
    fn from((v, w): (usize, usize)) -> Self {
        Self::new(v, w)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.v, self.w)
    }
}

/// A connection between two vertices carrying an `f64` weight.
///
/// Two weighted edges are equal when their endpoints match and their weights
/// differ by less than [`WEIGHT_EPSILON`]. Ordering compares weights only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeightedEdge {
    v: usize,
    w: usize,
    weight: f64,
}

impl WeightedEdge {
    /// Creates a weighted edge.
    #[must_use]
    pub const fn new(v: usize, w: usize, weight: f64) -> Self {
        Self { v, w, weight }
    }

    /// Total order on weights (`f64::total_cmp`), used by the heaps.
    #[must_use]
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl GraphEdge for WeightedEdge {
    fn source(&self) -> usize {
        self.v
    }

    fn target(&self) -> usize {
        self.w
    }

    fn reversed(&self) -> Self {
        Self::new(self.w, self.v, self.weight)
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialEq for WeightedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v && self.w == other.w && (self.weight - other.weight).abs() < WEIGHT_EPSILON
    }
}

impl PartialOrd for WeightedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.weight.partial_cmp(&other.weight)
    }
}

impl From<(usize, usize, f64)> for WeightedEdge {
    fn from((v, w, weight): (usize, usize, f64)) -> Self {
        Self::new(v, w, weight)
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, self.weight)
    }
}
