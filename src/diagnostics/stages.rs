use crate::density::SelectedCluster;
use crate::hierarchical::Linkage;
use serde::Serialize;

/// Trace of one hierarchical clustering call.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicalStage {
    pub elapsed_ms: f64,
    pub points: usize,
    pub linkage: Linkage,
    /// Number of cuts evaluated (`min(max_k, n)`), 0 when not searched.
    pub candidates: usize,
    /// WSS per candidate, index `k - 1`.
    pub wss: Vec<f64>,
    pub angle_changes: Vec<f64>,
    pub selected_k: usize,
    pub merge_heights: Vec<f64>,
}

impl HierarchicalStage {
    pub fn new(points: usize, linkage: Linkage) -> Self {
        Self {
            elapsed_ms: 0.0,
            points,
            linkage,
            candidates: 0,
            wss: Vec::new(),
            angle_changes: Vec::new(),
            selected_k: 0,
            merge_heights: Vec::new(),
        }
    }
}

/// Trace of one density clustering call.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityStage {
    pub elapsed_ms: f64,
    pub points: usize,
    /// Values after clamping to the group size.
    pub min_cluster_size: usize,
    pub min_samples: usize,
    pub mst_weight: f64,
    pub synthetic_clusters: usize,
    pub selected: Vec<SelectedCluster>,
    /// Set when nothing survived selection and the group became one cluster.
    pub fallback_single: bool,
}

impl DensityStage {
    pub fn new(points: usize, min_cluster_size: usize, min_samples: usize) -> Self {
        Self {
            elapsed_ms: 0.0,
            points,
            min_cluster_size,
            min_samples,
            mst_weight: 0.0,
            synthetic_clusters: 0,
            selected: Vec::new(),
            fallback_single: false,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum MethodStage {
    Hierarchical(HierarchicalStage),
    Density(DensityStage),
}

impl MethodStage {
    pub fn elapsed_ms(&self) -> f64 {
        match self {
            MethodStage::Hierarchical(stage) => stage.elapsed_ms,
            MethodStage::Density(stage) => stage.elapsed_ms,
        }
    }
}
