//! Merge hierarchy built from a spanning tree.
//!
//! Edges are replayed in ascending weight order through a [`UnionFind`]. Every
//! merge of two components allocates a synthetic cluster id (`n_points`,
//! `n_points + 1`, ...) and records one child entry per side. Cluster records
//! live in a flat arena indexed by `id - n_points`; a child always has a
//! smaller id than its parent.

use super::mst::MstEdge;
use crate::union_find::UnionFind;
use serde::Serialize;

/// Merge density of an edge: `1 / weight`, infinite for zero-length edges.
#[inline]
pub fn lambda_from_weight(weight: f64) -> f64 {
    if weight > 0.0 {
        1.0 / weight
    } else {
        f64::INFINITY
    }
}

/// One side of a merge event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRecord {
    pub parent: usize,
    pub child: usize,
    pub child_size: usize,
    pub lambda: f64,
}

#[derive(Clone, Debug)]
struct ClusterNode {
    children: [usize; 2],
    size: usize,
    lambda: f64,
}

#[derive(Clone, Debug)]
pub struct CondensedTree {
    n_points: usize,
    records: Vec<MergeRecord>,
    nodes: Vec<ClusterNode>,
}

impl CondensedTree {
    pub fn build(edges: &[MstEdge], n_points: usize) -> Self {
        let mut sorted = edges.to_vec();
        sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut uf = UnionFind::new(n_points);
        let mut cluster_labels: Vec<usize> = (0..n_points).collect();
        let mut records = Vec::with_capacity(2 * n_points.saturating_sub(1));
        let mut nodes: Vec<ClusterNode> = Vec::with_capacity(n_points.saturating_sub(1));

        for edge in &sorted {
            let root_u = uf.find(edge.u);
            let root_v = uf.find(edge.v);
            if root_u == root_v {
                continue;
            }
            let size_u = uf.size_of(root_u);
            let size_v = uf.size_of(root_v);
            let lambda = lambda_from_weight(edge.weight);
            let id = n_points + nodes.len();
            let child_u = cluster_labels[root_u];
            let child_v = cluster_labels[root_v];

            records.push(MergeRecord {
                parent: id,
                child: child_u,
                child_size: size_u,
                lambda,
            });
            records.push(MergeRecord {
                parent: id,
                child: child_v,
                child_size: size_v,
                lambda,
            });
            nodes.push(ClusterNode {
                children: [child_u, child_v],
                size: size_u + size_v,
                lambda,
            });

            if let Some(root) = uf.union(root_u, root_v) {
                cluster_labels[root] = id;
            }
        }

        Self {
            n_points,
            records,
            nodes,
        }
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Number of synthetic clusters (merge events).
    pub fn n_clusters(&self) -> usize {
        self.nodes.len()
    }

    pub fn records(&self) -> &[MergeRecord] {
        &self.records
    }

    /// Last merge, i.e. the highest synthetic id.
    pub fn root(&self) -> Option<usize> {
        self.nodes.len().checked_sub(1).map(|k| self.n_points + k)
    }

    #[inline]
    pub fn is_leaf(&self, id: usize) -> bool {
        id < self.n_points
    }

    pub fn size(&self, id: usize) -> usize {
        if self.is_leaf(id) {
            1
        } else {
            self.nodes[id - self.n_points].size
        }
    }

    /// Lambda of the merge that created `id`; leaves have none.
    pub fn lambda(&self, id: usize) -> Option<f64> {
        if self.is_leaf(id) {
            None
        } else {
            Some(self.nodes[id - self.n_points].lambda)
        }
    }

    pub fn children(&self, id: usize) -> &[usize] {
        if self.is_leaf(id) {
            &[]
        } else {
            &self.nodes[id - self.n_points].children
        }
    }

    /// Original point indices covered by `id`, ascending.
    pub fn points_of(&self, id: usize) -> Vec<usize> {
        let mut points = Vec::with_capacity(self.size(id));
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            if self.is_leaf(node) {
                points.push(node);
            } else {
                stack.extend_from_slice(self.children(node));
            }
        }
        points.sort_unstable();
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_edges() -> Vec<MstEdge> {
        vec![
            MstEdge { u: 0, v: 1, weight: 1.0 },
            MstEdge { u: 1, v: 2, weight: 4.0 },
            MstEdge { u: 2, v: 3, weight: 0.5 },
        ]
    }

    #[test]
    fn merges_in_ascending_weight_order() {
        let tree = CondensedTree::build(&chain_edges(), 4);
        assert_eq!(tree.n_clusters(), 3);
        assert_eq!(tree.records().len(), 6);
        assert_eq!(tree.root(), Some(6));

        // 2-3 merges first (w = 0.5), then 0-1, then the two pairs.
        assert_eq!(tree.children(4), &[2, 3]);
        assert_eq!(tree.lambda(4), Some(2.0));
        assert_eq!(tree.children(5), &[0, 1]);
        assert_eq!(tree.children(6), &[5, 4]);
        assert_eq!(tree.size(6), 4);
        assert_eq!(tree.lambda(6), Some(0.25));
        assert_eq!(tree.points_of(6), vec![0, 1, 2, 3]);
    }

    #[test]
    fn records_carry_child_sizes() {
        let tree = CondensedTree::build(&chain_edges(), 4);
        let root_records: Vec<_> = tree.records().iter().filter(|r| r.parent == 6).collect();
        assert_eq!(root_records.len(), 2);
        assert!(root_records.iter().all(|r| r.child_size == 2));
    }

    #[test]
    fn zero_weight_gives_infinite_lambda() {
        let edges = vec![MstEdge { u: 0, v: 1, weight: 0.0 }];
        let tree = CondensedTree::build(&edges, 2);
        assert_eq!(tree.lambda(2), Some(f64::INFINITY));
        assert!(tree.lambda(0).is_none());
    }

    #[test]
    fn no_edges_no_clusters() {
        let tree = CondensedTree::build(&[], 1);
        assert_eq!(tree.n_clusters(), 0);
        assert_eq!(tree.root(), None);
    }
}
