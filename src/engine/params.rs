//! Parameter types for the two-path clustering engine.

use crate::density::DensityParams;
use crate::error::ClusterError;
use crate::hierarchical::HierarchicalParams;
use crate::transform::Transform;
use serde::{Deserialize, Serialize};

/// Clustering path applied to both direction groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterMethod {
    /// Agglomerative clustering with an elbow-selected cluster count.
    #[default]
    Hierarchical,
    /// Mutual-reachability MST with excess-of-mass selection.
    #[serde(alias = "hdbscan")]
    Density,
}

impl ClusterMethod {
    pub fn name(&self) -> &'static str {
        match self {
            ClusterMethod::Hierarchical => "hierarchical",
            ClusterMethod::Density => "density",
        }
    }
}

/// Engine-wide parameters. Only the block matching `method` is consulted
/// during a run, but both are validated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineParams {
    pub method: ClusterMethod,
    pub hierarchical: HierarchicalParams,
    pub density: DensityParams,
    /// Replace coordinates by their base-2 logarithm before splitting.
    pub log2: bool,
    /// Cluster the two direction groups concurrently.
    pub parallel: bool,
}

impl EngineParams {
    pub fn hierarchical(max_k: usize) -> Self {
        Self {
            method: ClusterMethod::Hierarchical,
            hierarchical: HierarchicalParams {
                max_k,
                ..HierarchicalParams::default()
            },
            ..Self::default()
        }
    }

    pub fn density(min_cluster_size: usize, min_samples: Option<usize>) -> Self {
        Self {
            method: ClusterMethod::Density,
            density: DensityParams {
                min_cluster_size,
                min_samples,
            },
            ..Self::default()
        }
    }

    pub fn transform(&self) -> Transform {
        if self.log2 {
            Transform::Log2
        } else {
            Transform::Identity
        }
    }

    pub fn validate(&self) -> Result<(), ClusterError> {
        self.hierarchical.validate()?;
        self.density.validate()
    }
}
