//! Direction policy: how a graph stores and enumerates its edges.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::edge::GraphEdge;

/// Edge direction policy, chosen once when a graph is constructed.
///
/// The policy decides three things:
/// - how an inserted edge lands in the adjacency lists,
/// - how to enumerate each logical edge exactly once,
/// - the degree factor (2 for undirected, 1 for directed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `v-w` is stored in both `adj[v]` and `adj[w]`.
    #[default]
    Undirected,
    /// `v->w` is stored in `adj[v]` only.
    Directed,
}

impl Direction {
    /// Number of adjacency entries one logical edge produces.
    #[must_use]
    pub const fn factor(self) -> usize {
        match self {
            Self::Undirected => 2,
            Self::Directed => 1,
        }
    }

    /// Returns true for [`Direction::Directed`].
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }

    /// Appends `edge` to the adjacency lists.
    ///
    /// Endpoints must already be validated. Undirected edges are stored as
    /// `edge` under the tail and `edge.reversed()` under the head, so a
    /// self-loop shows up twice in the same list.
    pub(crate) fn insert<E: GraphEdge>(self, adj: &mut [Vec<E>], edge: E) {
        adj[edge.source()].push(edge);
        if self == Self::Undirected {
            adj[edge.target()].push(edge.reversed());
        }
    }

    /// Every logical edge once, in adjacency order.
    pub(crate) fn distinct_edges<E: GraphEdge>(self, adj: &[Vec<E>]) -> Vec<E> {
        match self {
            Self::Directed => adj.iter().flatten().copied().collect(),
            Self::Undirected => {
                let mut edges = Vec::new();
                for (v, list) in adj.iter().enumerate() {
                    // Both copies of a self-loop sit in the same list; keep every other one.
                    let mut loop_copies = 0usize;
                    for edge in list {
                        let w = edge.target();
                        if w > v {
                            edges.push(*edge);
                        } else if w == v {
                            if loop_copies % 2 == 0 {
                                edges.push(*edge);
                            }
                            loop_copies += 1;
                        }
                    }
                }
                edges
            }
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undirected => write!(f, "undirected"),
            Self::Directed => write!(f, "directed"),
        }
    }
}
