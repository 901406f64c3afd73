//! Edge relaxation shared by the weighted path engines.

use crate::graph::{GraphEdge, WeightedEdge};

use super::PathMode;

/// Best-known distances and the edges that achieved them.
#[derive(Debug, Clone)]
pub(super) struct Relaxation {
    mode: PathMode,
    source: usize,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<WeightedEdge>>,
}

impl Relaxation {
    /// Every vertex unreached except `source`, which sits at distance 0.
    pub(super) fn new(vertex_count: usize, source: usize, mode: PathMode) -> Self {
        let mut dist_to = vec![mode.unreached(); vertex_count];
        dist_to[source] = 0.0;
        Self {
            mode,
            source,
            dist_to,
            edge_to: vec![None; vertex_count],
        }
    }

    /// Takes `edge` if it strictly improves the distance to its head.
    pub(super) fn relax(&mut self, edge: &WeightedEdge) -> bool {
        let (v, w) = (edge.source(), edge.target());
        let candidate = self.dist_to[v] + edge.weight();
        if !self.mode.improves(candidate, self.dist_to[w]) {
            return false;
        }
        self.dist_to[w] = candidate;
        self.edge_to[w] = Some(*edge);
        true
    }

    pub(super) fn mode(&self) -> PathMode {
        self.mode
    }

    pub(super) fn source(&self) -> usize {
        self.source
    }

    pub(super) fn dist_to(&self, v: usize) -> f64 {
        self.dist_to[v]
    }

    pub(super) fn has_path_to(&self, v: usize) -> bool {
        self.dist_to.get(v).is_some_and(|d| d.is_finite())
    }

    /// Edges from the source to `v`; empty when `v` is the source or unreached.
    pub(super) fn path_to(&self, v: usize) -> Vec<WeightedEdge> {
        if !self.has_path_to(v) {
            return Vec::new();
        }
        let mut path = Vec::new();
        let mut x = v;
        while let Some(edge) = self.edge_to[x] {
            path.push(edge);
            x = edge.source();
        }
        path.reverse();
        path
    }
}
