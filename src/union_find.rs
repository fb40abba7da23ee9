/// Disjoint-set forest over `0..n` with path compression, union by rank and
/// per-set sizes. `size` is only meaningful at roots.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    size: Vec<usize>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `x`; every visited node is re-pointed at it.
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

    /// Merge the sets of `x` and `y`. Returns the surviving root, or `None`
    /// when both already share a set.
    pub fn union(&mut self, x: usize, y: usize) -> Option<usize> {
        let mut rx = self.find(x);
        let mut ry = self.find(y);
        if rx == ry {
            return None;
        }
        if self.rank[rx] < self.rank[ry] {
            std::mem::swap(&mut rx, &mut ry);
        }
        self.parent[ry] = rx;
        self.size[rx] += self.size[ry];
        if self.rank[rx] == self.rank[ry] {
            self.rank[rx] += 1;
        }
        Some(rx)
    }

    pub fn size_of(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_start_disjoint() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.len(), 4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
            assert_eq!(uf.size_of(i), 1);
        }
        assert!(!uf.connected(0, 3));
    }

    #[test]
    fn union_tracks_sizes_at_the_root() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1).is_some());
        assert!(uf.union(2, 3).is_some());
        let root = uf.union(1, 3).expect("disjoint sets merge");
        assert_eq!(uf.find(0), root);
        assert_eq!(uf.size_of(2), 4);
        assert_eq!(uf.size_of(4), 1);
        assert!(uf.union(0, 2).is_none());
    }

    #[test]
    fn deep_chains_compress() {
        let n = 10_000;
        let mut uf = UnionFind::new(n);
        for i in 1..n {
            uf.union(i - 1, i);
        }
        let root = uf.find(n - 1);
        assert_eq!(uf.size_of(0), n);
        assert!((0..n).all(|i| uf.find(i) == root));
    }
}
