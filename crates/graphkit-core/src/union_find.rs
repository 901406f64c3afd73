//! Disjoint sets over `0..n` (weighted quick-union with path compression).

/// Union-find structure used by Kruskal's algorithm.
///
/// The smaller tree is linked under the larger one, and `find` points every
/// vertex on the search path straight at the root.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of disjoint sets.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `p`.
    pub fn find(&mut self, p: usize) -> usize {
        let mut root = p;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut x = p;
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    /// Returns true if `p` and `q` are in the same set.
    pub fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Merges the sets of `p` and `q`. Returns false if they were already one set.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let (root_p, root_q) = (self.find(p), self.find(q));
        if root_p == root_q {
            return false;
        }
        let (small, large) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_merges_sets() {
        let mut uf = UnionFind::new(10);
        assert_eq!(uf.count(), 10);
        for (p, q) in [(4, 3), (3, 8), (6, 5), (9, 4), (2, 1), (5, 0), (7, 2), (6, 1)] {
            assert!(uf.union(p, q));
        }
        assert_eq!(uf.count(), 2);
        assert!(uf.connected(8, 9));
        assert!(uf.connected(0, 7));
        assert!(!uf.connected(0, 9));
    }

    #[test]
    fn test_union_of_connected_is_noop() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 1));
        assert!(!uf.union(1, 0));
        assert!(!uf.union(2, 2));
        assert_eq!(uf.count(), 2);
        assert_eq!(uf.len(), 3);
    }

    #[test]
    fn test_find_compresses_long_chain() {
        let mut uf = UnionFind::new(1000);
        for v in 1..1000 {
            uf.union(0, v);
        }
        let root = uf.find(999);
        assert!((0..1000).all(|v| uf.find(v) == root));
        assert_eq!(uf.count(), 1);
    }

    #[test]
    fn test_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.count(), 0);
    }
}
