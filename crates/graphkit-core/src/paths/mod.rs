//! Single-source paths in edge-weighted graphs.
//!
//! - [`DijkstraPaths`]: shortest paths with non-negative weights, directed or
//!   undirected
//! - [`AcyclicPaths`]: shortest or longest paths in a DAG, any weights,
//!   relaxing vertices in topological order
//!
//! Both answer queries through [`WeightedPaths`].
//!
//! # Example
//!
//! ```rust
//! use graphkit_core::graph::{Direction, Graph, WeightedEdge};
//! use graphkit_core::paths::{DijkstraPaths, WeightedPaths};
//!
//! let graph: Graph<WeightedEdge> = Graph::from_edges(
//!     3,
//!     Direction::Directed,
//!     [(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0)],
//! )
//! .unwrap();
//!
//! let paths = DijkstraPaths::new(&graph, 0).unwrap();
//! assert_eq!(paths.dist_to(1), 3.0);
//! assert_eq!(paths.path_to(1).len(), 2);
//! ```

mod acyclic;
mod dijkstra;
mod relax;


use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::WeightedEdge;

pub use acyclic::AcyclicPaths;
pub use dijkstra::DijkstraPaths;

/// Whether relaxation minimizes or maximizes path weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMode {
    /// Minimize; unreached vertices sit at `+inf`.
    #[default]
    Shortest,
    /// Maximize; unreached vertices sit at `-inf`.
    Longest,
}

impl PathMode {
    /// Distance of a vertex no path has reached.
    #[must_use]
    pub const fn unreached(self) -> f64 {
        match self {
            Self::Shortest => f64::INFINITY,
            Self::Longest => f64::NEG_INFINITY,
        }
    }

    /// Returns true if `candidate` strictly beats `current`.
    #[must_use]
    pub fn improves(self, candidate: f64, current: f64) -> bool {
        match self {
            Self::Shortest => candidate < current,
            Self::Longest => candidate > current,
        }
    }
}

impl fmt::Display for PathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shortest => "shortest",
            Self::Longest => "longest",
        })
    }
}

/// Queries answered by a single-source weighted path engine.
pub trait WeightedPaths {
    /// The source vertex.
    fn source(&self) -> usize;

    /// Shortest or longest.
    fn mode(&self) -> PathMode;

    /// Weight of the best path to `v`, or [`PathMode::unreached`] if none.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a vertex.
    fn dist_to(&self, v: usize) -> f64;

    /// Returns true if `v` is reachable. Vertices outside the graph are not.
    fn has_path_to(&self, v: usize) -> bool;

    /// Edges of the best path from the source to `v`; empty if unreachable.
    fn path_to(&self, v: usize) -> Vec<WeightedEdge>;

    /// Serializable answer for `target`.
    fn summary(&self, target: usize) -> PathSummary {
        let reachable = self.has_path_to(target);
        PathSummary {
            source: self.source(),
            target,
            mode: self.mode(),
            distance: reachable.then(|| self.dist_to(target)),
            edges: self.path_to(target),
        }
    }
}

/// Serializable path query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSummary {
    /// Source vertex.
    pub source: usize,
    /// Target vertex.
    pub target: usize,
    /// Shortest or longest.
    pub mode: PathMode,
    /// Path weight, `None` if the target is unreachable.
    pub distance: Option<f64>,
    /// Path edges from source to target.
    pub edges: Vec<WeightedEdge>,
}
