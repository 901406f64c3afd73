//! Indexed minimum priority queue.
//!
//! A binary heap over indices `0..capacity`, each carrying a key. Besides
//! push and pop it supports changing the key of an index already queued,
//! which eager Prim and Dijkstra use for decrease-key.

/// Min-heap of indices ordered by key.
///
/// Keys only need `PartialOrd`; incomparable keys (NaN) never sift past each
/// other. Indices at or beyond the capacity panic.
///
/// # Example
///
/// ```rust
/// use graphkit_core::index_pq::IndexMinPq;
///
/// let mut pq = IndexMinPq::new(4);
/// pq.push(2, 0.5);
/// pq.push(0, 0.9);
/// pq.push(2, 1.5); // increase key
///
/// assert_eq!(pq.pop(), Some(0));
/// assert_eq!(pq.pop(), Some(2));
/// assert!(pq.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct IndexMinPq<K> {
    heap: Vec<(usize, K)>,
    position: Vec<Option<usize>>,
}

impl<K: PartialOrd + Copy> IndexMinPq<K> {
    /// Creates an empty queue accepting indices `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
        }
    }

    /// Largest index plus one.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    /// Number of queued indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true if `index` is queued.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.position[index].is_some()
    }

    /// Key of a queued index.
    #[must_use]
    pub fn key_of(&self, index: usize) -> Option<K> {
        self.position[index].map(|p| self.heap[p].1)
    }

    /// Queues `index` with `key`, or changes its key if already queued.
    ///
    /// The new key may be smaller or larger than the old one.
    pub fn push(&mut self, index: usize, key: K) {
        if let Some(p) = self.position[index] {
            self.heap[p].1 = key;
            let p = self.sift_up(p);
            self.sift_down(p);
        } else {
            self.heap.push((index, key));
            let last = self.heap.len() - 1;
            self.position[index] = Some(last);
            self.sift_up(last);
        }
    }

    /// Index with the smallest key and that key.
    #[must_use]
    pub fn peek(&self) -> Option<(usize, K)> {
        self.heap.first().copied()
    }

    /// Removes and returns the index with the smallest key.
    pub fn pop(&mut self) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let (index, _) = self.heap.pop()?;
        self.position[index] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(index)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].1 < self.heap[b].1
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a].0] = Some(a);
        self.position[self.heap[b].0] = Some(b);
    }

    fn sift_up(&mut self, mut p: usize) -> usize {
        while p > 0 {
            let parent = (p - 1) / 2;
            if !self.less(p, parent) {
                break;
            }
            self.swap(p, parent);
            p = parent;
        }
        p
    }

    fn sift_down(&mut self, mut p: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * p + 1;
            if left >= len {
                break;
            }
            let mut child = left;
            if left + 1 < len && self.less(left + 1, left) {
                child = left + 1;
            }
            if !self.less(child, p) {
                break;
            }
            self.swap(p, child);
            p = child;
        }
    }
}
