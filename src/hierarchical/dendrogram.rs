//! Agglomerative merge sequence.
//!
//! Uses the generic Lance–Williams scheme on a dense working matrix with a
//! cached nearest neighbour per active cluster. Cluster ids follow the usual
//! linkage-matrix convention: points are `0..n`, merge `m` creates `n + m`.

use super::linkage::Linkage;
use crate::distance::DistanceMatrix;
use crate::types::PointSet;
use crate::union_find::UnionFind;
use nalgebra::DMatrix;
use serde::Serialize;

/// One agglomeration step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Merge {
    pub left: usize,
    pub right: usize,
    pub height: f64,
    pub size: usize,
}

#[derive(Clone, Debug)]
pub struct Dendrogram {
    n_points: usize,
    merges: Vec<Merge>,
}

impl Dendrogram {
    pub fn build(points: &PointSet, linkage: Linkage) -> Self {
        let n = points.len();
        let mut dist = DistanceMatrix::euclidean(points).into_matrix();
        let mut active = vec![true; n];
        let mut size = vec![1usize; n];
        let mut ids: Vec<usize> = (0..n).collect();
        let mut nearest: Vec<(usize, f64)> =
            (0..n).map(|i| nearest_active(&dist, &active, i)).collect();
        let mut merges = Vec::with_capacity(n.saturating_sub(1));

        for step in 0..n.saturating_sub(1) {
            let mut best: Option<usize> = None;
            for i in 0..n {
                if !active[i] {
                    continue;
                }
                match best {
                    Some(b) if nearest[i].1 >= nearest[b].1 => {}
                    _ => best = Some(i),
                }
            }
            let Some(first) = best else {
                break;
            };
            let (partner, height) = nearest[first];
            let (a, b) = (first.min(partner), first.max(partner));

            merges.push(Merge {
                left: ids[a].min(ids[b]),
                right: ids[a].max(ids[b]),
                height,
                size: size[a] + size[b],
            });

            let (n_a, n_b) = (size[a] as f64, size[b] as f64);
            for k in 0..n {
                if !active[k] || k == a || k == b {
                    continue;
                }
                let updated =
                    linkage.update(dist[(k, a)], dist[(k, b)], height, n_a, n_b, size[k] as f64);
                dist[(k, a)] = updated;
                dist[(a, k)] = updated;
            }
            active[b] = false;
            size[a] += size[b];
            ids[a] = n + step;

            nearest[a] = nearest_active(&dist, &active, a);
            for k in 0..n {
                if !active[k] || k == a {
                    continue;
                }
                if nearest[k].0 == a || nearest[k].0 == b {
                    nearest[k] = nearest_active(&dist, &active, k);
                } else if dist[(k, a)] < nearest[k].1 {
                    nearest[k] = (a, dist[(k, a)]);
                }
            }
        }

        Self {
            n_points: n,
            merges,
        }
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    /// Flat labels with exactly `k` clusters (`k` clamped to `1..=n`): the
    /// first `n - k` merges are applied. Labels follow first appearance by
    /// point index.
    pub fn cut(&self, k: usize) -> Vec<usize> {
        let n = self.n_points;
        if n == 0 {
            return Vec::new();
        }
        let k = k.clamp(1, n);
        let mut uf = UnionFind::new(n);
        // Representative point of every cluster id.
        let mut rep: Vec<usize> = (0..n).collect();
        for merge in self.merges.iter().take(n - k) {
            let (l, r) = (rep[merge.left], rep[merge.right]);
            uf.union(l, r);
            rep.push(l);
        }

        let mut root_label: Vec<Option<usize>> = vec![None; n];
        let mut next = 0;
        (0..n)
            .map(|p| {
                let root = uf.find(p);
                *root_label[root].get_or_insert_with(|| {
                    next += 1;
                    next - 1
                })
            })
            .collect()
    }
}

/// Closest active cluster to `i` (lowest index on ties), even at infinite
/// distance. Returns `(i, inf)` only when `i` is the only active cluster.
fn nearest_active(dist: &DMatrix<f64>, active: &[bool], i: usize) -> (usize, f64) {
    let mut best = (i, f64::INFINITY);
    for j in 0..active.len() {
        if j != i && active[j] && (best.0 == i || dist[(i, j)] < best.1) {
            best = (j, dist[(i, j)]);
        }
    }
    best
}
