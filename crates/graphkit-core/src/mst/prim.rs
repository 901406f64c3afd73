//! Eager Prim.

use crate::error::Result;
use crate::graph::{Direction, Graph, GraphEdge, WeightedEdge};
use crate::index_pq::IndexMinPq;

use super::{Forest, MstAlgorithm};

/// Prim's algorithm keeping, for each vertex outside the tree, only the
/// lightest edge connecting it to the tree.
///
/// The queue is indexed by vertex and never holds more than `V` entries;
/// a lighter connecting edge lowers the vertex's key in place.
#[derive(Debug, Clone)]
pub struct PrimMst {
    pub(super) forest: Forest,
    max_queue_len: usize,
}

struct PrimState<'a> {
    graph: &'a Graph<WeightedEdge>,
    marked: Vec<bool>,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<WeightedEdge>>,
    queue: IndexMinPq<f64>,
    max_queue_len: usize,
}

impl PrimState<'_> {
    fn scan(&mut self, v: usize) {
        self.marked[v] = true;
        for edge in self.graph.adjacent(v) {
            let w = edge.target();
            if self.marked[w] {
                continue;
            }
            if edge.weight() < self.dist_to[w] {
                self.dist_to[w] = edge.weight();
                self.edge_to[w] = Some(*edge);
                self.queue.push(w, edge.weight());
            }
        }
        self.max_queue_len = self.max_queue_len.max(self.queue.len());
    }
}

impl PrimMst {
    /// Grows a tree from the lowest unvisited vertex of every component.
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectionMismatch` if `graph` is directed.
    pub fn new(graph: &Graph<WeightedEdge>) -> Result<Self> {
        graph.require(Direction::Undirected)?;
        let n = graph.vertex_count();
        let mut state = PrimState {
            graph,
            marked: vec![false; n],
            dist_to: vec![f64::INFINITY; n],
            edge_to: vec![None; n],
            queue: IndexMinPq::new(n),
            max_queue_len: 0,
        };
        let mut forest = Forest::default();

        for root in 0..n {
            if state.marked[root] {
                continue;
            }
            forest.tree_count += 1;
            state.dist_to[root] = 0.0;
            state.queue.push(root, 0.0);
            while let Some(v) = state.queue.pop() {
                if let Some(edge) = state.edge_to[v] {
                    forest.push(edge);
                }
                state.scan(v);
            }
        }

        forest.log(MstAlgorithm::Prim);
        Ok(Self {
            forest,
            max_queue_len: state.max_queue_len,
        })
    }

    /// Largest number of vertices queued at once; at most `V`.
    #[must_use]
    pub fn max_queue_len(&self) -> usize {
        self.max_queue_len
    }
}
