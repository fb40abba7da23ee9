//! Dense pairwise distances and the density transforms built on them.
//!
//! - [`DistanceMatrix::euclidean`]: symmetric `n×n` Euclidean distances.
//! - [`DistanceMatrix::core_distances`]: distance to the `min_samples`-th
//!   neighbour, counting the point itself at rank 0.
//! - [`DistanceMatrix::mutual_reachability`]:
//!   `M[i][j] = max(core[i], core[j], D[i][j])`.
//!
//! Matrices are owned by the clustering call that builds them; memory is
//! `O(n²)` per call.

use crate::types::PointSet;
use nalgebra::DMatrix;

/// Symmetric matrix of non-negative distances with a zero diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    data: DMatrix<f64>,
}

impl DistanceMatrix {
    pub fn euclidean(points: &PointSet) -> Self {
        let n = points.len();
        let mut data = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in (i + 1)..n {
                let delta = points[i] - points[j];
                let d = delta.x.hypot(delta.y);
                data[(i, j)] = d;
                data[(j, i)] = d;
            }
        }
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[(i, j)]
    }

    pub fn into_matrix(self) -> DMatrix<f64> {
        self.data
    }

    #[cfg(test)]
    pub(crate) fn from_matrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    /// Entry `min_samples` of each ascending-sorted row (rank 0 is the point
    /// itself). Out-of-range ranks clamp to the farthest neighbour.
    pub fn core_distances(&self, min_samples: usize) -> Vec<f64> {
        let n = self.len();
        let mut row: Vec<f64> = Vec::with_capacity(n);
        (0..n)
            .map(|i| {
                row.clear();
                row.extend(self.data.row(i).iter().copied());
                row.sort_by(|a, b| a.total_cmp(b));
                row[min_samples.min(n - 1)]
            })
            .collect()
    }

    /// Mutual-reachability graph for the given core distances. The diagonal
    /// stays zero since the graph has no self-loops.
    pub fn mutual_reachability(&self, core: &[f64]) -> DistanceMatrix {
        let n = self.len();
        debug_assert_eq!(core.len(), n);
        let data = DMatrix::from_fn(n, n, |i, j| {
            if i == j {
                0.0
            } else {
                self.data[(i, j)].max(core[i]).max(core[j])
            }
        });
        DistanceMatrix { data }
    }
}
