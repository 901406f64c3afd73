//! Topological ordering of directed acyclic graphs.

use tracing::warn;

use crate::error::Result;
use crate::graph::{DepthFirstOrder, Direction, Graph, GraphEdge};

use super::cycle::DirectedCycle;

/// Topological order of a digraph, if it has one.
///
/// The order is the reverse postorder of a depth-first search, so every
/// edge goes from an earlier vertex to a later one. A digraph with a cycle
/// has no order; the cycle found is kept instead.
///
/// # Example
///
/// ```rust
/// use graphkit_core::graph::{Direction, Graph};
/// use graphkit_core::structure::Topological;
///
/// let graph: Graph = Graph::from_edges(3, Direction::Directed, [(2, 1), (1, 0)]).unwrap();
/// let topo = Topological::new(&graph).unwrap();
///
/// assert_eq!(topo.order(), Some(&[2, 1, 0][..]));
/// assert_eq!(topo.rank(0), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Topological {
    order: Option<Vec<usize>>,
    rank: Vec<usize>,
    cycle: Option<Vec<usize>>,
}

impl Topological {
    /// Checks for a cycle, then orders the vertices.
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectionMismatch` for undirected graphs.
    pub fn new<E: GraphEdge>(graph: &Graph<E>) -> Result<Self> {
        graph.require(Direction::Directed)?;
        if let Some(cycle) = DirectedCycle::new(graph)?.into_cycle() {
            warn!(?cycle, "Digraph has a cycle, no topological order exists");
            return Ok(Self {
                order: None,
                rank: Vec::new(),
                cycle: Some(cycle),
            });
        }

        let order = DepthFirstOrder::new(graph).reverse_post().to_vec();
        let mut rank = vec![0; order.len()];
        for (position, &v) in order.iter().enumerate() {
            rank[v] = position;
        }
        Ok(Self {
            order: Some(order),
            rank,
            cycle: None,
        })
    }

    /// Returns true if the digraph is acyclic.
    #[must_use]
    pub fn is_dag(&self) -> bool {
        self.order.is_some()
    }

    /// Vertices in topological order.
    #[must_use]
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Position of `v` in the order.
    #[must_use]
    pub fn rank(&self, v: usize) -> Option<usize> {
        self.order.as_ref().map(|_| self.rank[v])
    }

    /// The cycle that prevents an order.
    #[must_use]
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }

    pub(crate) fn into_result(self) -> std::result::Result<Vec<usize>, Vec<usize>> {
        match (self.order, self.cycle) {
            (Some(order), _) => Ok(order),
            (None, cycle) => Err(cycle.unwrap_or_default()),
        }
    }
}
