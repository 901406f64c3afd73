//! Strongly connected components (Kosaraju-Sharir).

use tracing::debug;

use crate::error::Result;
use crate::graph::{walk, DepthFirstOrder, Direction, Graph, GraphEdge};

use super::components::{group, ComponentLabeler};

/// Strongly connected components of a digraph.
///
/// Runs a depth-first order on the reversed graph, then labels components
/// with searches on the original graph started in reverse postorder of the
/// reversed graph. Every vertex is labelled exactly once.
///
/// # Example
///
/// ```rust
/// use graphkit_core::graph::{Direction, Graph};
/// use graphkit_core::structure::KosarajuScc;
///
/// let graph: Graph = Graph::from_edges(4, Direction::Directed, [(0, 1), (1, 0), (1, 2)]).unwrap();
/// let scc = KosarajuScc::new(&graph).unwrap();
///
/// assert_eq!(scc.count(), 3);
/// assert!(scc.strongly_connected(0, 1));
/// assert!(!scc.strongly_connected(1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct KosarajuScc {
    id: Vec<usize>,
    size: Vec<usize>,
}

impl KosarajuScc {
    /// Computes the components.
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectionMismatch` for undirected graphs, where
    /// [`ConnectedComponents`](super::ConnectedComponents) applies.
    pub fn new<E: GraphEdge>(graph: &Graph<E>) -> Result<Self> {
        graph.require(Direction::Directed)?;
        let n = graph.vertex_count();
        let order = DepthFirstOrder::new(&graph.reverse());

        let mut marked = vec![false; n];
        let mut id = vec![0; n];
        let mut size = Vec::new();
        for &v in order.reverse_post() {
            if marked[v] {
                continue;
            }
            let mut labeler = ComponentLabeler {
                id: &mut id,
                current: size.len(),
                size: 0,
            };
            let _ = walk(graph, v, &mut marked, &mut labeler);
            size.push(labeler.size);
        }

        debug!(
            vertices = n,
            components = size.len(),
            "Strongly connected components computed"
        );
        Ok(Self { id, size })
    }

    /// Number of strongly connected components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.size.len()
    }

    /// Component id of `v`.
    #[must_use]
    pub fn id(&self, v: usize) -> usize {
        self.id[v]
    }

    /// Number of vertices in component `id`.
    #[must_use]
    pub fn size(&self, id: usize) -> usize {
        self.size[id]
    }

    /// Returns true if `v` and `w` reach each other.
    #[must_use]
    pub fn strongly_connected(&self, v: usize, w: usize) -> bool {
        self.id[v] == self.id[w]
    }

    /// Vertices of every component, indexed by component id.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<usize>> {
        group(&self.id, self.count())
    }
}
