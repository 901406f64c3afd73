//! Connected components (weak connectivity).

use crate::graph::{walk, Graph, GraphEdge, Visitor};

/// Assigns the current component id to every vertex a walk discovers.
pub(super) struct ComponentLabeler<'a> {
    pub(super) id: &'a mut [usize],
    pub(super) current: usize,
    pub(super) size: usize,
}

impl<E: GraphEdge> Visitor<E> for ComponentLabeler<'_> {
    fn discover(&mut self, v: usize) {
        self.id[v] = self.current;
        self.size += 1;
    }
}

/// Groups vertices by component id, each group in vertex order.
pub(super) fn group(id: &[usize], count: usize) -> Vec<Vec<usize>> {
    let mut groups = vec![Vec::new(); count];
    for (v, &component) in id.iter().enumerate() {
        groups[component].push(v);
    }
    groups
}

/// Connected components of a graph.
///
/// Edge direction is ignored: a directed graph is walked as if every edge
/// went both ways. Component ids are assigned in order of the smallest
/// vertex of each component.
///
/// # Example
///
/// ```rust
/// use graphkit_core::graph::{Direction, Graph};
/// use graphkit_core::structure::ConnectedComponents;
///
/// let graph: Graph = Graph::from_edges(5, Direction::Undirected, [(0, 1), (3, 4)]).unwrap();
/// let cc = ConnectedComponents::new(&graph);
///
/// assert_eq!(cc.count(), 3);
/// assert!(cc.connected(3, 4));
/// assert!(!cc.connected(1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    id: Vec<usize>,
    size: Vec<usize>,
}

impl ConnectedComponents {
    /// Labels every vertex with its component id.
    #[must_use]
    pub fn new<E: GraphEdge>(graph: &Graph<E>) -> Self {
        if graph.is_directed() {
            Self::label(&graph.to_undirected())
        } else {
            Self::label(graph)
        }
    }

    fn label<E: GraphEdge>(graph: &Graph<E>) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut id = vec![0; n];
        let mut size = Vec::new();
        for v in 0..n {
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
        Self { id, size }
    }

    /// Number of components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.size.len()
    }

    /// Component id of `v`, in `[0, count)`.
    #[must_use]
    pub fn id(&self, v: usize) -> usize {
        self.id[v]
    }

    /// Number of vertices in component `id`.
    #[must_use]
    pub fn size(&self, id: usize) -> usize {
        self.size[id]
    }

    /// Returns true if `v` and `w` are in the same component.
    #[must_use]
    pub fn connected(&self, v: usize, w: usize) -> bool {
        self.id[v] == self.id[w]
    }

    /// Vertices of every component, indexed by component id.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<usize>> {
        group(&self.id, self.count())
    }
}
