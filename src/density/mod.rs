//! Density clustering over the mutual-reachability graph.
//!
//! Pipeline per call:
//! 1. Euclidean [`DistanceMatrix`] over the group.
//! 2. Core distances at rank `min_samples`.
//! 3. Mutual-reachability graph.
//! 4. Prim MST from vertex 0 ([`mst`]).
//! 5. Merge hierarchy via union-find ([`condensed`]).
//! 6. Excess-of-mass selection and labelling ([`extract`]).
//!
//! Groups of 0, 1 or 2 points short-circuit to fixed answers. When nothing
//! survives selection the whole group becomes one cluster.

pub mod condensed;
pub mod extract;
pub mod mst;

pub use condensed::{lambda_from_weight, CondensedTree, MergeRecord};
pub use extract::{assign_labels, cluster_stabilities, select_clusters, SelectedCluster};
pub use mst::{prim_mst, MstEdge};

use crate::diagnostics::DensityStage;
use crate::distance::DistanceMatrix;
use crate::error::ClusterError;
use crate::types::{ClusterAssignment, PointSet};
use log::debug;
use std::time::Instant;

/// Knobs of the density clusterer. Both values are clamped per group size at
/// run time, never rejected for being too large.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityParams {
    /// Smallest selectable cluster (>= 2).
    pub min_cluster_size: usize,
    /// Neighbour rank used for core distances (>= 1). `None` follows
    /// `min_cluster_size`.
    pub min_samples: Option<usize>,
}

impl Default for DensityParams {
    fn default() -> Self {
        Self {
            min_cluster_size: 5,
            min_samples: None,
        }
    }
}

impl DensityParams {
    /// Effective `(min_cluster_size, min_samples)` for a group of `n` points.
    pub fn resolve_for(&self, n: usize) -> (usize, usize) {
        let min_cluster_size = self.min_cluster_size.min(n / 2).max(2);
        let min_samples = self
            .min_samples
            .unwrap_or(self.min_cluster_size)
            .min(n.saturating_sub(1))
            .max(1);
        (min_cluster_size, min_samples)
    }

    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.min_cluster_size < 2 {
            return Err(ClusterError::invalid_parameter(format!(
                "min_cluster_size must be >= 2, got {}",
                self.min_cluster_size
            )));
        }
        if self.min_samples == Some(0) {
            return Err(ClusterError::invalid_parameter(
                "min_samples must be >= 1 when set, got 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct DensityClusterer {
    params: DensityParams,
}

impl DensityClusterer {
    pub fn new(params: DensityParams) -> Self {
        Self { params }
    }

    /// Cluster one group and report what the selection decided.
    pub fn cluster(&self, points: &PointSet) -> (ClusterAssignment, DensityStage) {
        let start = Instant::now();
        let n = points.len();
        let (min_cluster_size, min_samples) = self.params.resolve_for(n);
        let mut stage = DensityStage::new(n, min_cluster_size, min_samples);

        let assignment = match n {
            0 => ClusterAssignment::default(),
            1 | 2 => ClusterAssignment::single(n),
            _ => self.cluster_hierarchy(points, &mut stage),
        };

        stage.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        (assignment, stage)
    }

    fn cluster_hierarchy(&self, points: &PointSet, stage: &mut DensityStage) -> ClusterAssignment {
        let n = points.len();
        let mreach = {
            let distances = DistanceMatrix::euclidean(points);
            let core = distances.core_distances(stage.min_samples);
            distances.mutual_reachability(&core)
        };
        let edges = prim_mst(&mreach);
        drop(mreach);
        stage.mst_weight = edges.iter().map(|e| e.weight).sum();

        let tree = CondensedTree::build(&edges, n);
        stage.synthetic_clusters = tree.n_clusters();

        let stabilities = cluster_stabilities(&tree);
        let selected = select_clusters(&tree, &stabilities, stage.min_cluster_size);
        if selected.is_empty() {
            debug!(
                "DensityClusterer::cluster no cluster of >= {} points survived selection ({} points) -> single cluster",
                stage.min_cluster_size, n
            );
            stage.fallback_single = true;
            return ClusterAssignment::single(n);
        }

        let labels = assign_labels(&tree, &selected);
        stage.selected = selected;
        ClusterAssignment::contiguous(&labels)
    }
}
