//! Traversal engines: depth-first and breadth-first search, paths, orderings.
//!
//! Depth-first search runs on an explicit stack of `(vertex, next adjacency
//! position)` frames. It visits vertices in exactly the order the recursive
//! formulation would, without being bounded by the call stack.

use std::collections::VecDeque;
use std::ops::ControlFlow;

use crate::error::Result;

use super::adjacency::Graph;
use super::edge::GraphEdge;

/// Callbacks fired by [`walk`] while it explores the graph.
pub(crate) trait Visitor<E> {
    /// `v` is marked and pushed.
    fn discover(&mut self, _v: usize) {}

    /// `edge` leads to an unmarked vertex; fired before `discover(edge.target())`.
    fn tree_edge(&mut self, _edge: &E) {}

    /// `edge` leads to an already marked vertex. `Break` stops the walk.
    fn non_tree_edge(&mut self, _edge: &E) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Every edge of `v` has been examined and `v` is popped.
    fn finish(&mut self, _v: usize) {}
}

impl<E> Visitor<E> for () {}

/// Depth-first walk from `start` over unmarked vertices.
///
/// `start` must be unmarked. Returns `Break` if the visitor stopped the walk.
pub(crate) fn walk<E, V>(
    graph: &Graph<E>,
    start: usize,
    marked: &mut [bool],
    visitor: &mut V,
) -> ControlFlow<()>
where
    E: GraphEdge,
    V: Visitor<E>,
{
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    marked[start] = true;
    visitor.discover(start);

    while let Some(frame) = stack.last_mut() {
        let (v, position) = *frame;
        if let Some(edge) = graph.adjacent(v).get(position) {
            frame.1 += 1;
            let w = edge.target();
            if marked[w] {
                visitor.non_tree_edge(edge)?;
            } else {
                marked[w] = true;
                visitor.tree_edge(edge);
                visitor.discover(w);
                stack.push((w, 0));
            }
        } else {
            stack.pop();
            visitor.finish(v);
        }
    }
    ControlFlow::Continue(())
}

/// Closed walk `w -> ... -> v -> w` reconstructed from parent links.
///
/// `w` must be an ancestor of (or equal to) `v` in the search tree.
pub(crate) fn close_cycle(edge_to: &[Option<usize>], v: usize, w: usize) -> Vec<usize> {
    let mut cycle = Vec::new();
    let mut x = v;
    while x != w {
        cycle.push(x);
        match edge_to[x] {
            Some(parent) => x = parent,
            None => break,
        }
    }
    cycle.push(w);
    cycle.reverse();
    cycle.push(w);
    cycle
}

/// Records the parent of every vertex discovered through a tree edge.
struct ParentRecorder<'a> {
    edge_to: &'a mut [Option<usize>],
}

impl<E: GraphEdge> Visitor<E> for ParentRecorder<'_> {
    fn tree_edge(&mut self, edge: &E) {
        self.edge_to[edge.target()] = Some(edge.source());
    }
}

/// Vertex path queries shared by the DFS and BFS path engines.
pub trait Paths {
    /// Returns true if `v` was reached. Vertices outside the graph were not.
    fn has_path_to(&self, v: usize) -> bool;

    /// Vertices from a source to `v`, both included; empty if `v` was not reached.
    fn path_to(&self, v: usize) -> Vec<usize>;
}

fn trace_path(marked: &[bool], edge_to: &[Option<usize>], v: usize) -> Vec<usize> {
    if !marked.get(v).copied().unwrap_or(false) {
        return Vec::new();
    }
    let mut path = vec![v];
    let mut x = v;
    while let Some(parent) = edge_to[x] {
        path.push(parent);
        x = parent;
    }
    path.reverse();
    path
}

fn validate_sources<E: GraphEdge>(graph: &Graph<E>, sources: &[usize]) -> Result<()> {
    sources
        .iter()
        .try_for_each(|&source| graph.validate_vertex(source))
}

/// Reachability from one or more sources.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    marked: Vec<bool>,
    count: usize,
}

impl DepthFirstSearch {
    /// Marks every vertex reachable from `source`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfRange` if `source` is not a vertex.
    pub fn new<E: GraphEdge>(graph: &Graph<E>, source: usize) -> Result<Self> {
        Self::from_sources(graph, &[source])
    }

    /// Marks every vertex reachable from any of `sources`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfRange` on the first invalid source.
    pub fn from_sources<E: GraphEdge>(graph: &Graph<E>, sources: &[usize]) -> Result<Self> {
        validate_sources(graph, sources)?;
        Ok(Self::search(graph, sources))
    }

    /// `sources` must already be valid vertices.
    pub(crate) fn search<E: GraphEdge>(graph: &Graph<E>, sources: &[usize]) -> Self {
        let mut marked = vec![false; graph.vertex_count()];
        for &source in sources {
            if !marked[source] {
                let _ = walk(graph, source, &mut marked, &mut ());
            }
        }
        let count = marked.iter().filter(|&&m| m).count();
        Self { marked, count }
    }

    /// Returns true if `v` is reachable.
    #[must_use]
    pub fn marked(&self, v: usize) -> bool {
        self.marked[v]
    }

    /// Number of reachable vertices, sources included.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Depth-first search tree from a single source.
///
/// # Example
///
/// ```rust
/// use graphkit_core::graph::{DepthFirstPaths, Graph, Paths};
///
/// let graph: Graph = Graph::from_edges(
///     4,
///     graphkit_core::graph::Direction::Undirected,
///     [(0, 1), (1, 2), (0, 2)],
/// )
/// .unwrap();
/// let paths = DepthFirstPaths::new(&graph, 0).unwrap();
///
/// assert_eq!(paths.path_to(2), vec![0, 1, 2]);
/// assert!(!paths.has_path_to(3));
/// assert!(paths.path_to(3).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct DepthFirstPaths {
    source: usize,
    marked: Vec<bool>,
    edge_to: Vec<Option<usize>>,
}

impl DepthFirstPaths {
    /// Runs depth-first search from `source`, recording first-visit parents.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfRange` if `source` is not a vertex.
    pub fn new<E: GraphEdge>(graph: &Graph<E>, source: usize) -> Result<Self> {
        graph.validate_vertex(source)?;
        let mut marked = vec![false; graph.vertex_count()];
        let mut edge_to = vec![None; graph.vertex_count()];
        let _ = walk(
            graph,
            source,
            &mut marked,
            &mut ParentRecorder {
                edge_to: &mut edge_to,
            },
        );
        Ok(Self {
            source,
            marked,
            edge_to,
        })
    }

    /// The search source.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }
}

impl Paths for DepthFirstPaths {
    fn has_path_to(&self, v: usize) -> bool {
        self.marked.get(v).copied().unwrap_or(false)
    }

    fn path_to(&self, v: usize) -> Vec<usize> {
        trace_path(&self.marked, &self.edge_to, v)
    }
}

/// Breadth-first search tree: paths with the fewest edges.
///
/// Vertices are marked when they are enqueued, so each one enters the
/// queue at most once.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    marked: Vec<bool>,
    edge_to: Vec<Option<usize>>,
    dist_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    /// Runs breadth-first search from `source`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfRange` if `source` is not a vertex.
    pub fn new<E: GraphEdge>(graph: &Graph<E>, source: usize) -> Result<Self> {
        Self::from_sources(graph, &[source])
    }

    /// Runs breadth-first search from all `sources` at once; every path
    /// starts at the nearest source.
    pub fn from_sources<E: GraphEdge>(graph: &Graph<E>, sources: &[usize]) -> Result<Self> {
        validate_sources(graph, sources)?;
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut edge_to = vec![None; n];
        let mut dist_to = vec![None; n];
        let mut queue = VecDeque::new();

        for &source in sources {
            if !marked[source] {
                marked[source] = true;
                dist_to[source] = Some(0);
                queue.push_back(source);
            }
        }

        while let Some(v) = queue.pop_front() {
            let next = dist_to[v].map_or(0, |d: usize| d + 1);
            for edge in graph.adjacent(v) {
                let w = edge.target();
                if !marked[w] {
                    marked[w] = true;
                    edge_to[w] = Some(v);
                    dist_to[w] = Some(next);
                    queue.push_back(w);
                }
            }
        }

        Ok(Self {
            marked,
            edge_to,
            dist_to,
        })
    }

    /// Number of edges on the shortest path to `v`, `None` if unreached.
    #[must_use]
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.dist_to[v]
    }
}

impl Paths for BreadthFirstPaths {
    fn has_path_to(&self, v: usize) -> bool {
        self.marked.get(v).copied().unwrap_or(false)
    }

    fn path_to(&self, v: usize) -> Vec<usize> {
        trace_path(&self.marked, &self.edge_to, v)
    }
}

/// Preorder, postorder and reverse postorder of a full depth-first search.
///
/// Unvisited vertices are used as new roots in index order. On a DAG the
/// reverse postorder is a topological order.
#[derive(Debug, Clone)]
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
    reverse_post: Vec<usize>,
    pre_rank: Vec<usize>,
    post_rank: Vec<usize>,
}

struct OrderRecorder {
    pre: Vec<usize>,
    post: Vec<usize>,
}

impl<E: GraphEdge> Visitor<E> for OrderRecorder {
    fn discover(&mut self, v: usize) {
        self.pre.push(v);
    }

    fn finish(&mut self, v: usize) {
        self.post.push(v);
    }
}

impl DepthFirstOrder {
    /// Runs depth-first search over every vertex.
    #[must_use]
    pub fn new<E: GraphEdge>(graph: &Graph<E>) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut recorder = OrderRecorder {
            pre: Vec::with_capacity(n),
            post: Vec::with_capacity(n),
        };
        for v in 0..n {
            if !marked[v] {
                let _ = walk(graph, v, &mut marked, &mut recorder);
            }
        }

        let mut pre_rank = vec![0; n];
        for (rank, &v) in recorder.pre.iter().enumerate() {
            pre_rank[v] = rank;
        }
        let mut post_rank = vec![0; n];
        for (rank, &v) in recorder.post.iter().enumerate() {
            post_rank[v] = rank;
        }
        let reverse_post = recorder.post.iter().rev().copied().collect();

        Self {
            pre: recorder.pre,
            post: recorder.post,
            reverse_post,
            pre_rank,
            post_rank,
        }
    }

    /// Vertices in the order they were first visited.
    #[must_use]
    pub fn pre(&self) -> &[usize] {
        &self.pre
    }

    /// Vertices in the order their visit completed.
    #[must_use]
    pub fn post(&self) -> &[usize] {
        &self.post
    }

    /// Postorder reversed.
    #[must_use]
    pub fn reverse_post(&self) -> &[usize] {
        &self.reverse_post
    }

    /// Position of `v` in preorder.
    #[must_use]
    pub fn pre_rank(&self, v: usize) -> usize {
        self.pre_rank[v]
    }

    /// Position of `v` in postorder.
    #[must_use]
    pub fn post_rank(&self, v: usize) -> usize {
        self.post_rank[v]
    }
}
