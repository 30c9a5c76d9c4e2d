//! Union-Find (disjoint set) over line indices
//!
//! The labeling pass only needs two primitives: `find` (which set holds a
//! line) and `union` (merge two sets). Union by size plus path compression
//! keeps the total cost near-linear in the number of operations.

/// Disjoint-set structure partitioning the line indices `0..n`
///
/// Every index starts as a singleton set. Sets are only ever merged, never
/// split, so the partition always covers all indices.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Parent pointer per index; a root points to itself
    parent: Vec<usize>,
    /// Set size per root; stale for non-root indices
    size: Vec<u32>,
}

impl UnionFind {
    /// Create a partition of `n` singleton sets
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Get the number of indices in the partition
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if the partition is empty
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Get the root of the set holding `x`
    ///
    /// Compresses the walked path so repeated lookups stay cheap.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets holding `a` and `b`
    ///
    /// The larger set absorbs the smaller; ties go to `a`'s root. Returns
    /// the surviving root. Merging a set with itself is a no-op.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return root_a;
        }
        let (winner, loser) = if self.size[root_a] >= self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[loser] = winner;
        self.size[winner] += self.size[loser];
        winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.len(), 4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn test_union_merges() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        assert_eq!(uf.find(0), uf.find(1));
        assert_ne!(uf.find(0), uf.find(2));
    }

    #[test]
    fn test_union_is_transitive() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        uf.union(3, 4);
        uf.union(1, 3);
        let root = uf.find(0);
        assert_eq!(uf.find(4), root);
        assert_eq!(uf.find(3), root);
        assert_ne!(uf.find(2), root);
    }

    #[test]
    fn test_union_by_size() {
        let mut uf = UnionFind::new(4);
        let big = uf.union(0, 1);
        // The two-element set absorbs the singleton
        assert_eq!(uf.union(big, 2), big);
        assert_eq!(uf.union(3, big), big);
    }

    #[test]
    fn test_self_union_is_noop() {
        let mut uf = UnionFind::new(2);
        assert_eq!(uf.union(0, 0), 0);
        assert_ne!(uf.find(0), uf.find(1));
    }

    #[test]
    fn test_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
    }
}
