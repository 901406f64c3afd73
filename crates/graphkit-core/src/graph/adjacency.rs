//! Adjacency-list graph container.
//!
//! A [`Graph`] owns one edge list per vertex and a [`Direction`] policy that
//! governs insertion. The vertex count is fixed at construction; edges are
//! only ever appended, so `adjacent(v)` always yields edges in insertion
//! order. Traversal order, and therefore every printed path, follows from it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::direction::Direction;
use super::edge::{Edge, GraphEdge};

/// Adjacency-list graph over vertices `0..vertex_count`.
///
/// # Example
///
/// ```rust
/// use graphkit_core::graph::Graph;
///
/// let mut graph: Graph = Graph::undirected(4);
/// graph.add_edge((0, 1)).unwrap();
/// graph.add_edge((1, 2)).unwrap();
/// graph.add_edge((2, 2)).unwrap(); // self-loop
///
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.degree(2), 3);
/// assert_eq!(graph.self_loop_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<E = Edge> {
    direction: Direction,
    adj: Vec<Vec<E>>,
    in_degree: Vec<usize>,
    edge_count: usize,
}

/// Derived degree statistics of a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of logical edges.
    pub edge_count: usize,
    /// Direction policy.
    pub direction: Direction,
    /// Largest (out-)degree.
    pub max_degree: usize,
    /// `factor * E / V`.
    pub avg_degree: f64,
    /// Number of self-loops.
    pub self_loops: usize,
}

/// Serializable form of a graph: vertex count, policy and edge list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot<E> {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Direction policy.
    pub direction: Direction,
    /// Logical edges in enumeration order.
    pub edges: Vec<E>,
}

impl<E: GraphEdge> Graph<E> {
    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize, direction: Direction) -> Self {
        Self {
            direction,
            adj: vec![Vec::new(); vertex_count],
            in_degree: vec![0; vertex_count],
            edge_count: 0,
        }
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected(vertex_count: usize) -> Self {
        Self::new(vertex_count, Direction::Undirected)
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed(vertex_count: usize) -> Self {
        Self::new(vertex_count, Direction::Directed)
    }

    /// Builds a graph from an edge iterator.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfRange` on the first edge with a bad endpoint.
    pub fn from_edges<I, T>(vertex_count: usize, direction: Direction, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<E>,
    {
        let mut graph = Self::new(vertex_count, direction);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Adds an edge according to the direction policy.
    ///
    /// The edge count grows by exactly one, whatever the policy.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfRange` if either endpoint is not a vertex;
    /// the graph is left unchanged.
    pub fn add_edge(&mut self, edge: impl Into<E>) -> Result<()> {
        let edge = edge.into();
        self.validate_vertex(edge.source())?;
        self.validate_vertex(edge.target())?;
        self.direction.insert(&mut self.adj, edge);
        self.in_degree[edge.target()] += 1;
        if self.direction == Direction::Undirected {
            self.in_degree[edge.source()] += 1;
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Checks that `vertex` is in `[0, vertex_count)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfRange` otherwise.
    pub fn validate_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.adj.len() {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                vertex_count: self.adj.len(),
            })
        }
    }

    /// Fails with `DirectionMismatch` unless the graph uses `expected`.
    pub(crate) fn require(&self, expected: Direction) -> Result<()> {
        if self.direction == expected {
            Ok(())
        } else {
            Err(Error::DirectionMismatch {
                expected,
                found: self.direction,
            })
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of logical edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The direction policy chosen at construction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns true for directed graphs.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.direction.is_directed()
    }

    /// Edges leaving `v`, in insertion order.
    ///
    /// Panics if `v` is not a vertex.
    #[must_use]
    pub fn adjacent(&self, v: usize) -> &[E] {
        &self.adj[v]
    }

    /// Number of adjacency entries of `v` (out-degree when directed).
    ///
    /// An undirected self-loop contributes 2.
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Number of edges pointing into `v`; equals `degree(v)` when undirected.
    #[must_use]
    pub fn in_degree(&self, v: usize) -> usize {
        self.in_degree[v]
    }

    /// Largest degree over all vertices, 0 for an empty graph.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.adj.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Average degree: `2E/V` undirected, `E/V` directed, 0 without vertices.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Vertex and edge counts fit in f64 mantissa in practice
    pub fn avg_degree(&self) -> f64 {
        if self.adj.is_empty() {
            return 0.0;
        }
        (self.direction.factor() * self.edge_count) as f64 / self.adj.len() as f64
    }

    /// Number of self-loops.
    #[must_use]
    pub fn self_loop_count(&self) -> usize {
        let entries = self
            .adj
            .iter()
            .flatten()
            .filter(|edge| edge.is_self_loop())
            .count();
        entries / self.direction.factor()
    }

    /// Every logical edge exactly once, in adjacency order.
    #[must_use]
    pub fn edges(&self) -> Vec<E> {
        self.direction.distinct_edges(&self.adj)
    }

    /// A new graph with every directed edge inverted.
    ///
    /// Undirected graphs come back unchanged.
    #[must_use]
    pub fn reverse(&self) -> Self {
        if self.direction == Direction::Undirected {
            return self.clone();
        }
        let mut reversed = Self::new(self.vertex_count(), self.direction);
        for edge in self.adj.iter().flatten() {
            reversed.direction.insert(&mut reversed.adj, edge.reversed());
            reversed.in_degree[edge.source()] += 1;
        }
        reversed.edge_count = self.edge_count;
        reversed
    }

    /// The same edges under the undirected policy.
    ///
    /// Each directed edge `v->w` becomes `v-w`, so the edge count is kept and
    /// antiparallel pairs turn into parallel edges.
    #[must_use]
    pub fn to_undirected(&self) -> Self {
        if self.direction == Direction::Undirected {
            return self.clone();
        }
        let mut undirected = Self::new(self.vertex_count(), Direction::Undirected);
        for edge in self.adj.iter().flatten() {
            undirected.direction.insert(&mut undirected.adj, *edge);
            undirected.in_degree[edge.source()] += 1;
            undirected.in_degree[edge.target()] += 1;
        }
        undirected.edge_count = self.edge_count;
        undirected
    }

    /// Degree statistics.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count,
            direction: self.direction,
            max_degree: self.max_degree(),
            avg_degree: self.avg_degree(),
            self_loops: self.self_loop_count(),
        }
    }

    /// Serializable copy of the graph.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot<E> {
        GraphSnapshot {
            vertex_count: self.vertex_count(),
            direction: self.direction,
            edges: self.edges(),
        }
    }
}

impl<E: GraphEdge> TryFrom<GraphSnapshot<E>> for Graph<E> {
    type Error = Error;

    fn try_from(snapshot: GraphSnapshot<E>) -> Result<Self> {
        Self::from_edges(snapshot.vertex_count, snapshot.direction, snapshot.edges)
    }
}

impl<E: GraphEdge> fmt::Display for Graph<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.vertex_count(),
            self.edge_count
        )?;
        for (v, list) in self.adj.iter().enumerate() {
            write!(f, "{v}:")?;
            for edge in list {
                write!(f, " {}", edge.target())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
