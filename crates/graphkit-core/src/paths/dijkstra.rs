//! Dijkstra's algorithm.

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphEdge, WeightedEdge};
use crate::index_pq::IndexMinPq;

use super::relax::Relaxation;
use super::{PathMode, WeightedPaths};

/// Shortest paths from one source in a graph with non-negative weights.
///
/// Vertices leave an indexed priority queue in order of distance; each
/// improved distance lowers the head's key. Undirected graphs are handled
/// through their symmetric adjacency lists.
#[derive(Debug, Clone)]
pub struct DijkstraPaths {
    relaxation: Relaxation,
}

impl DijkstraPaths {
    /// Computes the shortest path tree from `source`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfRange` for an invalid source and
    /// `Error::NegativeWeight` for the first edge with a negative weight.
    pub fn new(graph: &Graph<WeightedEdge>, source: usize) -> Result<Self> {
        graph.validate_vertex(source)?;
        if let Some(edge) = graph.edges().into_iter().find(|e| e.weight() < 0.0) {
            return Err(Error::NegativeWeight {
                from: edge.source(),
                to: edge.target(),
                weight: edge.weight(),
            });
        }

        let n = graph.vertex_count();
        let mut relaxation = Relaxation::new(n, source, PathMode::Shortest);
        let mut queue = IndexMinPq::new(n);
        queue.push(source, 0.0);
        while let Some(v) = queue.pop() {
            for edge in graph.adjacent(v) {
                if relaxation.relax(edge) {
                    let w = edge.target();
                    queue.push(w, relaxation.dist_to(w));
                }
            }
        }

        debug!(
            source,
            reached = (0..n).filter(|&v| relaxation.has_path_to(v)).count(),
            "Dijkstra finished"
        );
        Ok(Self { relaxation })
    }
}

impl WeightedPaths for DijkstraPaths {
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
