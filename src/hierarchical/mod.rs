//! Agglomerative clustering with an elbow-selected cut.
//!
//! Modules
//! - [`linkage`] – ward / complete / average / single and their
//!   Lance–Williams updates.
//! - [`dendrogram`] – merge sequence and flat cuts.
//! - [`elbow`] – WSS curve and bend detection.
//!
//! Groups of at most three points are a single cluster; there is no
//! structure to choose between.

pub mod dendrogram;
pub mod elbow;
pub mod linkage;

pub use dendrogram::{Dendrogram, Merge};
pub use elbow::{select_elbow, within_cluster_ss, ElbowChoice};
pub use linkage::Linkage;

use crate::diagnostics::HierarchicalStage;
use crate::error::ClusterError;
use crate::types::{ClusterAssignment, PointSet};
use log::debug;
use std::time::Instant;

/// Groups below this size are never split.
pub const MIN_SPLITTABLE_POINTS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct HierarchicalParams {
    /// Largest cluster count considered by the elbow search (>= 1).
    pub max_k: usize,
    pub linkage: Linkage,
}

impl Default for HierarchicalParams {
    fn default() -> Self {
        Self {
            max_k: 7,
            linkage: Linkage::Ward,
        }
    }
}

impl HierarchicalParams {
    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.max_k == 0 {
            return Err(ClusterError::invalid_parameter("max_k must be >= 1, got 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct HierarchicalClusterer {
    params: HierarchicalParams,
}

impl HierarchicalClusterer {
    pub fn new(params: HierarchicalParams) -> Self {
        Self { params }
    }

    pub fn cluster(&self, points: &PointSet) -> (ClusterAssignment, HierarchicalStage) {
        let start = Instant::now();
        let n = points.len();
        let mut stage = HierarchicalStage::new(n, self.params.linkage);

        let assignment = if n == 0 {
            ClusterAssignment::default()
        } else if n < MIN_SPLITTABLE_POINTS {
            stage.selected_k = 1;
            ClusterAssignment::single(n)
        } else {
            self.cluster_dendrogram(points, &mut stage)
        };

        stage.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        (assignment, stage)
    }

    fn cluster_dendrogram(&self, points: &PointSet, stage: &mut HierarchicalStage) -> ClusterAssignment {
        let n = points.len();
        let dendro = Dendrogram::build(points, self.params.linkage);
        let candidates = self.params.max_k.clamp(1, n);

        let wss: Vec<f64> = (1..=candidates)
            .map(|k| within_cluster_ss(points, &dendro.cut(k)))
            .collect();
        let choice = select_elbow(&wss, n);
        debug!(
            "HierarchicalClusterer::cluster {} points, {} linkage, wss={:?} -> k={}",
            n, self.params.linkage, wss, choice.k
        );

        let labels = dendro.cut(choice.k);
        stage.candidates = candidates;
        stage.wss = wss;
        stage.angle_changes = choice.angle_changes;
        stage.selected_k = choice.k;
        stage.merge_heights = dendro.merges().iter().map(|m| m.height).collect();

        ClusterAssignment {
            labels,
            n_clusters: choice.k,
        }
    }
}
