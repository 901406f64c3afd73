//! Cycle detection for undirected and directed graphs.

use std::ops::ControlFlow;

use crate::error::Result;
use crate::graph::{close_cycle, walk, Direction, Graph, GraphEdge, Visitor};

/// Finds a cycle in an undirected graph.
///
/// A marked neighbour other than the vertex's parent closes a cycle. The
/// edge back to the parent is skipped once only, so parallel edges and
/// self-loops count as cycles.
#[derive(Debug, Clone)]
pub struct Cycle {
    cycle: Option<Vec<usize>>,
}

struct UndirectedCycleFinder {
    edge_to: Vec<Option<usize>>,
    parent_skipped: Vec<bool>,
    cycle: Option<Vec<usize>>,
}

impl<E: GraphEdge> Visitor<E> for UndirectedCycleFinder {
    fn tree_edge(&mut self, edge: &E) {
        self.edge_to[edge.target()] = Some(edge.source());
    }

    fn non_tree_edge(&mut self, edge: &E) -> ControlFlow<()> {
        let (v, w) = (edge.source(), edge.target());
        if self.edge_to[v] == Some(w) && !self.parent_skipped[v] {
            self.parent_skipped[v] = true;
            return ControlFlow::Continue(());
        }
        self.cycle = Some(close_cycle(&self.edge_to, v, w));
        ControlFlow::Break(())
    }
}

impl Cycle {
    /// Searches every component for a cycle.
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectionMismatch` for directed graphs; use
    /// [`DirectedCycle`] there.
    pub fn new<E: GraphEdge>(graph: &Graph<E>) -> Result<Self> {
        graph.require(Direction::Undirected)?;
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut finder = UndirectedCycleFinder {
            edge_to: vec![None; n],
            parent_skipped: vec![false; n],
            cycle: None,
        };
        for v in 0..n {
            if !marked[v] && walk(graph, v, &mut marked, &mut finder).is_break() {
                break;
            }
        }
        Ok(Self {
            cycle: finder.cycle,
        })
    }

    /// Returns true if the graph has a cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// One cycle as a closed walk (first vertex repeated last).
    #[must_use]
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}

/// Finds a directed cycle.
///
/// Tracks which vertices are on the active search path; an edge into one
/// of them is a back edge and closes a cycle. Edges into vertices that are
/// merely marked are not.
#[derive(Debug, Clone)]
pub struct DirectedCycle {
    cycle: Option<Vec<usize>>,
}

struct DirectedCycleFinder {
    edge_to: Vec<Option<usize>>,
    on_stack: Vec<bool>,
    cycle: Option<Vec<usize>>,
}

impl<E: GraphEdge> Visitor<E> for DirectedCycleFinder {
    fn discover(&mut self, v: usize) {
        self.on_stack[v] = true;
    }

    fn tree_edge(&mut self, edge: &E) {
        self.edge_to[edge.target()] = Some(edge.source());
    }

    fn non_tree_edge(&mut self, edge: &E) -> ControlFlow<()> {
        let (v, w) = (edge.source(), edge.target());
        if self.on_stack[w] {
            self.cycle = Some(close_cycle(&self.edge_to, v, w));
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    fn finish(&mut self, v: usize) {
        self.on_stack[v] = false;
    }
}

impl DirectedCycle {
    /// Searches the whole digraph for a cycle.
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectionMismatch` for undirected graphs.
    pub fn new<E: GraphEdge>(graph: &Graph<E>) -> Result<Self> {
        graph.require(Direction::Directed)?;
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut finder = DirectedCycleFinder {
            edge_to: vec![None; n],
            on_stack: vec![false; n],
            cycle: None,
        };
        for v in 0..n {
            if !marked[v] && walk(graph, v, &mut marked, &mut finder).is_break() {
                break;
            }
        }
        Ok(Self {
            cycle: finder.cycle,
        })
    }

    /// Returns true if the digraph has a directed cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// One directed cycle, first vertex repeated last.
    #[must_use]
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }

    pub(crate) fn into_cycle(self) -> Option<Vec<usize>> {
        self.cycle
    }
}
