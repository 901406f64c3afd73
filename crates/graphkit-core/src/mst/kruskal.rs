//! Kruskal.

use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::{Direction, Graph, GraphEdge, WeightedEdge};
use crate::structure::ConnectedComponents;
use crate::union_find::UnionFind;

use super::{ByMinWeight, Forest, MstAlgorithm};

/// Kruskal's algorithm: consider edges from lightest to heaviest and keep
/// each one that joins two different trees.
///
/// Stops as soon as the forest has `V - components` edges.
#[derive(Debug, Clone)]
pub struct KruskalMst {
    pub(super) forest: Forest,
}

impl KruskalMst {
    /// Computes the minimum spanning forest.
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectionMismatch` if `graph` is directed.
    pub fn new(graph: &Graph<WeightedEdge>) -> Result<Self> {
        graph.require(Direction::Undirected)?;
        let n = graph.vertex_count();
        let tree_count = ConnectedComponents::new(graph).count();
        let target = n - tree_count;

        let mut queue: BinaryHeap<ByMinWeight> =
            graph.edges().into_iter().map(ByMinWeight).collect();
        let mut sets = UnionFind::new(n);
        let mut forest = Forest {
            tree_count,
            ..Forest::default()
        };

        while forest.edges.len() < target {
            let Some(ByMinWeight(edge)) = queue.pop() else {
                break;
            };
            if sets.union(edge.source(), edge.target()) {
                forest.push(edge);
            }
        }

        forest.log(MstAlgorithm::Kruskal);
        Ok(Self { forest })
    }
}
