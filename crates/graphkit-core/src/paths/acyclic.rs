//! Paths in directed acyclic graphs.

use crate::error::{Error, Result};
use crate::graph::{Direction, Graph, WeightedEdge};
use crate::structure::Topological;

use super::relax::Relaxation;
use super::{PathMode, WeightedPaths};

/// Shortest or longest paths from one source in an edge-weighted DAG.
///
/// Relaxes every vertex's edges once, in topological order. Weights may be
/// negative.
///
/// # Example
///
/// ```rust
/// use graphkit_core::graph::{Direction, Graph, WeightedEdge};
/// use graphkit_core::paths::{AcyclicPaths, WeightedPaths};
///
/// let graph: Graph<WeightedEdge> = Graph::from_edges(
///     3,
///     Direction::Directed,
///     [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)],
/// )
/// .unwrap();
///
/// assert_eq!(AcyclicPaths::shortest(&graph, 0).unwrap().dist_to(2), 2.0);
/// assert_eq!(AcyclicPaths::longest(&graph, 0).unwrap().dist_to(2), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct AcyclicPaths {
    relaxation: Relaxation,
}

impl AcyclicPaths {
    /// Minimum-weight paths from `source`.
    ///
    /// # Errors
    ///
    /// See [`AcyclicPaths::new`].
    pub fn shortest(graph: &Graph<WeightedEdge>, source: usize) -> Result<Self> {
        Self::new(graph, source, PathMode::Shortest)
    }

    /// Maximum-weight paths from `source`.
    ///
    /// # Errors
    ///
    /// See [`AcyclicPaths::new`].
    pub fn longest(graph: &Graph<WeightedEdge>, source: usize) -> Result<Self> {
        Self::new(graph, source, PathMode::Longest)
    }

    /// Paths from `source` in the given mode.
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectionMismatch` for undirected graphs,
    /// `Error::VertexOutOfRange` for an invalid source and `Error::NotADag`
    /// if the graph has a directed cycle.
    pub fn new(graph: &Graph<WeightedEdge>, source: usize, mode: PathMode) -> Result<Self> {
        graph.require(Direction::Directed)?;
        graph.validate_vertex(source)?;
        let order = Topological::new(graph)?
            .into_result()
            .map_err(|cycle| Error::NotADag { cycle })?;

        let mut relaxation = Relaxation::new(graph.vertex_count(), source, mode);
        for v in order {
            for edge in graph.adjacent(v) {
                relaxation.relax(edge);
            }
        }
        Ok(Self { relaxation })
    }
}

impl WeightedPaths for AcyclicPaths {
    fn source(&self) -> usize {
        self.relaxation.source()
    }

    fn mode(&self) -> PathMode {
        self.relaxation.mode()
    }

    fn dist_to(&self, v: usize) -> f64 {
        self.relaxation.dist_to(v)
    }

    fn has_path_to(&self, v: usize) -> bool {
        self.relaxation.has_path_to(v)
    }

    fn path_to(&self, v: usize) -> Vec<WeightedEdge> {
        self.relaxation.path_to(v)
    }
}
