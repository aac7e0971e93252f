//! Weighted disjoint-set forest.
//!
//! Maintains a partition of the elements `0..n` and answers
//! connectivity queries in near-constant amortized time.
//!
//! # Algorithm
//!
//! **Union by size** links the root of the smaller tree under the root of
//! the larger one, which bounds tree height by `log2(n)`. **Path
//! compression** during `find` then points every visited node straight at
//! its root. Together they give amortized O(α(n)) per operation, where α
//! is the inverse Ackermann function (α(n) ≤ 4 for any realistic `n`).
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm"
//! - Sedgewick & Wayne (2011), *Algorithms* 4th ed., §1.5 (weighted quick-union)

/// Disjoint-set forest with union by size and path compression.
///
/// # Examples
/// ```
/// use percolation::collections::UnionFind;
///
/// let mut uf = UnionFind::new(6);
/// uf.union(0, 1);
/// uf.union(4, 5);
/// assert!(uf.connected(1, 0));
/// assert!(!uf.connected(1, 4));
///
/// uf.union(1, 5);
/// assert!(uf.connected(0, 4));
/// assert_eq!(uf.component_count(), 3); // {0,1,4,5} {2} {3}
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n-1}`.
    ///
    /// # Complexity
    /// O(n)
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Finds the root of the tree containing `x`, compressing the path.
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `true` if a merge happened, `false` if they already shared
    /// a set. Calling it again on a connected pair is a no-op.
    ///
    /// # Panics
    /// Panics if `x >= len()` or `y >= len()`.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        let (small, large) = if self.size[root_x] < self.size[root_y] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.components -= 1;
        true
    }

    /// Returns `true` if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Returns the number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the number of elements in the set containing `x`.
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}
