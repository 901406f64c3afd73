//! Graph representation, text loading and traversal engines.
//!
//! Vertices are plain indices in `[0, vertex_count)`; all per-vertex state
//! lives in dense vectors indexed by vertex id.
//!
//! # Example
//!
//! ```rust
//! use graphkit_core::graph::{BreadthFirstPaths, Graph, Paths};
//!
//! let mut graph: Graph = Graph::undirected(6);
//! for (v, w) in [(0, 5), (2, 4), (2, 3), (1, 2), (0, 1), (3, 4), (3, 5), (0, 2)] {
//!     graph.add_edge((v, w)).unwrap();
//! }
//!
//! let bfs = BreadthFirstPaths::new(&graph, 0).unwrap();
//! assert_eq!(bfs.path_to(4), vec![0, 2, 4]);
//! assert_eq!(bfs.dist_to(3), Some(2));
//! ```

mod adjacency;
mod direction;
mod edge;
pub mod io;
mod symbol;
pub mod traversal;

#[cfg(test)]
mod edge_tests;

pub use adjacency::{Graph, GraphSnapshot, GraphStats};
pub use direction::Direction;
pub use edge::{Edge, GraphEdge, WeightedEdge, WEIGHT_EPSILON};
pub use io::{
    read_edge_list, read_weighted_edge_list, write_edge_list, write_weighted_edge_list,
    EdgeListOptions, DEFAULT_MAX_VERTICES,
};
pub use symbol::SymbolGraph;
pub use traversal::{BreadthFirstPaths, DepthFirstOrder, DepthFirstPaths, DepthFirstSearch, Paths};

pub(crate) use traversal::{close_cycle, walk, Visitor};
