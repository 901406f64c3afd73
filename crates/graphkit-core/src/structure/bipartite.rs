//! Two-colouring of undirected graphs.

use std::ops::ControlFlow;

use crate::error::Result;
use crate::graph::{close_cycle, walk, Direction, Graph, GraphEdge, Visitor};

/// Bipartiteness check by depth-first two-colouring.
///
/// Each newly visited vertex gets the colour opposite to its parent; the
/// search stops at the first edge joining two vertices of the same colour.
#[derive(Debug, Clone)]
pub struct Bipartite {
    color: Vec<bool>,
    odd_cycle: Option<Vec<usize>>,
}

struct TwoColorer {
    color: Vec<bool>,
    edge_to: Vec<Option<usize>>,
    odd_cycle: Option<Vec<usize>>,
}

impl<E: GraphEdge> Visitor<E> for TwoColorer {
    fn tree_edge(&mut self, edge: &E) {
        let (v, w) = (edge.source(), edge.target());
        self.color[w] = !self.color[v];
        self.edge_to[w] = Some(v);
    }

    fn non_tree_edge(&mut self, edge: &E) -> ControlFlow<()> {
        let (v, w) = (edge.source(), edge.target());
        if self.color[v] == self.color[w] {
            self.odd_cycle = Some(close_cycle(&self.edge_to, v, w));
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

impl Bipartite {
    /// Two-colours the graph.
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectionMismatch` for directed graphs.
    pub fn new<E: GraphEdge>(graph: &Graph<E>) -> Result<Self> {
        graph.require(Direction::Undirected)?;
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut colorer = TwoColorer {
            color: vec![false; n],
            edge_to: vec![None; n],
            odd_cycle: None,
        };
        for v in 0..n {
            if !marked[v] && walk(graph, v, &mut marked, &mut colorer).is_break() {
                break;
            }
        }
        Ok(Self {
            color: colorer.color,
            odd_cycle: colorer.odd_cycle,
        })
    }

    /// Returns true if no edge joins two vertices of the same colour.
    #[must_use]
    pub fn is_bipartite(&self) -> bool {
        self.odd_cycle.is_none()
    }

    /// Side of `v` in the bipartition, `None` if the graph is not bipartite.
    #[must_use]
    pub fn color(&self, v: usize) -> Option<bool> {
        self.is_bipartite().then(|| self.color[v])
    }

    /// An odd-length cycle witnessing non-bipartiteness.
    #[must_use]
    pub fn odd_cycle(&self) -> Option<&[usize]> {
        self.odd_cycle.as_deref()
    }
}
