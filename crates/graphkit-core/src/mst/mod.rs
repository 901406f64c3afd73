//! Minimum spanning trees of edge-weighted undirected graphs.
//!
//! Three interchangeable algorithms implement [`SpanningTree`]:
//!
//! - [`LazyPrimMst`]: Prim with a heap of crossing edges, stale entries skipped
//! - [`PrimMst`]: eager Prim keeping one queue entry per vertex
//! - [`KruskalMst`]: edges in weight order, union-find to reject cycles
//!
//! On a disconnected graph each computes a minimum spanning forest, one tree
//! per connected component, and reports it through
//! [`SpanningTree::tree_count`].
//!
//! # Example
//!
//! ```rust
//! use graphkit_core::graph::{Direction, Graph, WeightedEdge};
//! use graphkit_core::mst::{MstAlgorithm, SpanningTree};
//!
//! let graph: Graph<WeightedEdge> = Graph::from_edges(
//!     3,
//!     Direction::Undirected,
//!     [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0)],
//! )
//! .unwrap();
//!
//! let mst = MstAlgorithm::Kruskal.compute(&graph).unwrap();
//! assert_eq!(mst.weight(), 3.0);
//! assert_eq!(mst.tree_count(), 1);
//! ```

mod kruskal;
mod lazy_prim;
mod prim;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::graph::{Graph, GraphEdge, WeightedEdge};

pub use kruskal::KruskalMst;
pub use lazy_prim::LazyPrimMst;
pub use prim::PrimMst;

/// Result of a minimum spanning tree computation.
pub trait SpanningTree {
    /// Algorithm that produced the tree.
    fn algorithm(&self) -> MstAlgorithm;

    /// Tree edges in the order they were added.
    fn edges(&self) -> &[WeightedEdge];

    /// Sum of the tree edge weights.
    fn weight(&self) -> f64;

    /// Number of trees in the forest: one per connected component, isolated
    /// vertices included. `0` for a graph without vertices.
    fn tree_count(&self) -> usize;

    /// Returns true if the input was connected.
    fn is_spanning_tree(&self) -> bool {
        self.tree_count() <= 1
    }

    /// Serializable summary.
    fn summary(&self) -> MstSummary {
        MstSummary {
            algorithm: self.algorithm(),
            weight: self.weight(),
            tree_count: self.tree_count(),
            edges: self.edges().to_vec(),
        }
    }
}

/// Serializable form of a [`SpanningTree`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstSummary {
    /// Algorithm used.
    pub algorithm: MstAlgorithm,
    /// Total weight.
    pub weight: f64,
    /// Number of trees in the forest.
    pub tree_count: usize,
    /// Tree edges.
    pub edges: Vec<WeightedEdge>,
}

/// Selects an MST algorithm at run time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MstAlgorithm {
    /// [`LazyPrimMst`].
    #[default]
    LazyPrim,
    /// [`PrimMst`].
    Prim,
    /// [`KruskalMst`].
    Kruskal,
}

impl MstAlgorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Self; 3] = [Self::LazyPrim, Self::Prim, Self::Kruskal];

    /// Runs the selected algorithm.
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectionMismatch` if `graph` is directed.
    pub fn compute(self, graph: &Graph<WeightedEdge>) -> Result<Box<dyn SpanningTree>> {
        Ok(match self {
            Self::LazyPrim => Box::new(LazyPrimMst::new(graph)?),
            Self::Prim => Box::new(PrimMst::new(graph)?),
            Self::Kruskal => Box::new(KruskalMst::new(graph)?),
        })
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LazyPrim => "lazy-prim",
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        })
    }
}

/// Edges ordered so that `BinaryHeap` pops the lightest first.
#[derive(Debug, Clone, Copy)]
struct ByMinWeight(WeightedEdge);

impl PartialEq for ByMinWeight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByMinWeight {}

impl PartialOrd for ByMinWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByMinWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp_weight(&self.0)
    }
}

/// Edges, weight and tree count shared by every algorithm.
#[derive(Debug, Clone, Default)]
struct Forest {
    edges: Vec<WeightedEdge>,
    weight: f64,
    tree_count: usize,
}

impl Forest {
    fn push(&mut self, edge: WeightedEdge) {
        self.weight += edge.weight();
        self.edges.push(edge);
    }

    fn log(&self, algorithm: MstAlgorithm) {
        if self.tree_count > 1 {
            warn!(
                %algorithm,
                trees = self.tree_count,
                "Graph is disconnected, computed a minimum spanning forest"
            );
        }
        debug!(
            %algorithm,
            edges = self.edges.len(),
            weight = self.weight,
            "Minimum spanning tree computed"
        );
    }
}

macro_rules! impl_spanning_tree {
    ($ty:ty, $algorithm:expr) => {
        impl SpanningTree for $ty {
            fn algorithm(&self) -> MstAlgorithm {
                $algorithm
            }

            fn edges(&self) -> &[WeightedEdge] {
                &self.forest.edges
            }

            fn weight(&self) -> f64 {
                self.forest.weight
            }

            fn tree_count(&self) -> usize {
                self.forest.tree_count
            }
        }
    };
}

impl_spanning_tree!(LazyPrimMst, MstAlgorithm::LazyPrim);
impl_spanning_tree!(PrimMst, MstAlgorithm::Prim);
impl_spanning_tree!(KruskalMst, MstAlgorithm::Kruskal);
