//! All-pairs reachability.

use tracing::debug;

use crate::graph::{DepthFirstSearch, Graph, GraphEdge};

/// Reachability between every pair of vertices.
///
/// Stores one depth-first search per vertex, so memory is quadratic in the
/// vertex count. Intended for small and medium graphs.
#[derive(Debug, Clone)]
pub struct TransitiveClosure {
    all: Vec<DepthFirstSearch>,
}

impl TransitiveClosure {
    /// Runs a search from every vertex.
    #[must_use]
    pub fn new<E: GraphEdge>(graph: &Graph<E>) -> Self {
        let all: Vec<_> = (0..graph.vertex_count())
            .map(|v| DepthFirstSearch::search(graph, &[v]))
            .collect();
        debug!(vertices = all.len(), "Transitive closure computed");
        Self { all }
    }

    /// Returns true if there is a path from `v` to `w`.
    ///
    /// Every vertex reaches itself.
    #[must_use]
    pub fn reachable(&self, v: usize, w: usize) -> bool {
        self.all[v].marked(w)
    }

    /// Number of vertices reachable from `v`, `v` included.
    #[must_use]
    pub fn reach_count(&self, v: usize) -> usize {
        self.all[v].count()
    }
}
