//! Lazy Prim.

use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::{Direction, Graph, GraphEdge, WeightedEdge};

use super::{ByMinWeight, Forest, MstAlgorithm};

/// Prim's algorithm with a heap of every edge leaving the tree.
///
/// Edges whose endpoints both joined the tree after they were queued stay
/// in the heap and are discarded when popped, so the heap can hold up to
/// `E` entries. [`max_queue_len`](Self::max_queue_len) reports the peak.
#[derive(Debug, Clone)]
pub struct LazyPrimMst {
    pub(super) forest: Forest,
    max_queue_len: usize,
}

struct LazyPrimState<'a> {
    graph: &'a Graph<WeightedEdge>,
    marked: Vec<bool>,
    queue: BinaryHeap<ByMinWeight>,
    max_queue_len: usize,
}

impl LazyPrimState<'_> {
    fn visit(&mut self, v: usize) {
        self.marked[v] = true;
        for edge in self.graph.adjacent(v) {
            if !self.marked[edge.target()] {
                self.queue.push(ByMinWeight(*edge));
            }
        }
        self.max_queue_len = self.max_queue_len.max(self.queue.len());
    }
}

impl LazyPrimMst {
    /// Grows a tree from the lowest unvisited vertex of every component.
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectionMismatch` if `graph` is directed.
    pub fn new(graph: &Graph<WeightedEdge>) -> Result<Self> {
        graph.require(Direction::Undirected)?;
        let mut state = LazyPrimState {
            graph,
            marked: vec![false; graph.vertex_count()],
            queue: BinaryHeap::new(),
            max_queue_len: 0,
        };
        let mut forest = Forest::default();

        for root in 0..graph.vertex_count() {
            if state.marked[root] {
                continue;
            }
            forest.tree_count += 1;
            state.visit(root);
            while let Some(ByMinWeight(edge)) = state.queue.pop() {
                let (v, w) = (edge.source(), edge.target());
                if state.marked[v] && state.marked[w] {
                    continue;
                }
                forest.push(edge);
                if !state.marked[v] {
                    state.visit(v);
                }
                if !state.marked[w] {
                    state.visit(w);
                }
            }
        }

        forest.log(MstAlgorithm::LazyPrim);
        Ok(Self {
            forest,
            max_queue_len: state.max_queue_len,
        })
    }

    /// Largest number of edges queued at once.
    #[must_use]
    pub fn max_queue_len(&self) -> usize {
        self.max_queue_len
    }
}
