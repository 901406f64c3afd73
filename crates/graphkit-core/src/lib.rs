//! # graphkit core
//!
//! In-memory graph algorithms over dense integer vertex ids.
//!
//! A [`Graph`](graph::Graph) is an adjacency-list container whose direction
//! policy is fixed at construction. Every algorithm is a query object that
//! does its work in the constructor and then answers questions about the
//! result in constant or output-proportional time.
//!
//! ## Features
//!
//! - **Traversal**: depth-first and breadth-first search, paths, pre/post orders
//! - **Structure**: connected and strongly connected components, cycles,
//!   bipartiteness, topological order, transitive closure
//! - **Spanning trees**: lazy Prim, eager Prim and Kruskal
//! - **Paths**: Dijkstra and acyclic shortest/longest paths
//! - **Scheduling**: critical path method over precedence-constrained jobs
//! - **Text input**: edge lists, weighted edge lists and symbol graphs
//!
//! ## Quick Start
//!
//! ```rust
//! use graphkit_core::graph::{read_weighted_edge_list, Direction, EdgeListOptions};
//! use graphkit_core::mst::{MstAlgorithm, SpanningTree};
//! use graphkit_core::paths::{DijkstraPaths, WeightedPaths};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let input = "0 1 0.5\n1 2 0.25\n0 2 1.0\n";
//!     let graph = read_weighted_edge_list(input.as_bytes(), &EdgeListOptions::default())?;
//!
//!     let mst = MstAlgorithm::Prim.compute(&graph)?;
//!     assert_eq!(mst.weight(), 0.75);
//!
//!     let paths = DijkstraPaths::new(&graph, 0)?;
//!     assert_eq!(paths.dist_to(2), 0.75);
//!     assert_eq!(graph.direction(), Direction::Undirected);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::cast_precision_loss,
        clippy::manual_assert
    )
)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod cpm;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;
pub mod index_pq;
pub mod mst;
pub mod paths;
pub mod structure;
pub mod union_find;

pub use config::{ConfigError, GraphkitConfig};
pub use error::{Error, Result};
