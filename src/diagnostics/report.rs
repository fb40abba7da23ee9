use super::stages::MethodStage;
use super::timing::TimingBreakdown;
use crate::engine::ClusterMethod;
use crate::split::Direction;
use crate::transform::Transform;
use serde::Serialize;

/// Result of [`ClusterEngine::run`](crate::ClusterEngine::run).
///
/// `labels[i]` belongs to input point `source_indices[i]`. Without a
/// filtering transform both vectors cover the whole input in order.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusteringReport {
    pub input: InputDescriptor,
    pub labels: Vec<usize>,
    pub source_indices: Vec<usize>,
    pub groups: Vec<GroupReport>,
    pub total_clusters: usize,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub points: usize,
    pub clustered: usize,
    pub excluded: usize,
    pub transform: Transform,
    pub method: ClusterMethod,
}

/// Outcome for one direction group.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupReport {
    pub direction: Direction,
    pub size: usize,
    pub n_clusters: usize,
    /// Added to the group's local labels in the merged label vector.
    pub label_offset: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<MethodStage>,
}

impl ClusteringReport {
    pub fn group(&self, direction: Direction) -> Option<&GroupReport> {
        self.groups.iter().find(|g| g.direction == direction)
    }

    /// Label of input point `input_index`, `None` if the transform dropped it.
    pub fn label_of(&self, input_index: usize) -> Option<usize> {
        self.source_indices
            .iter()
            .position(|&idx| idx == input_index)
            .map(|pos| self.labels[pos])
    }

    pub fn print_text_summary(&self) {
        println!("Clustering summary");
        println!(
            "  input: {} points ({} clustered, {} excluded)",
            self.input.points, self.input.clustered, self.input.excluded
        );
        println!("  method: {}", self.input.method.name());
        println!("  transform: {:?}", self.input.transform);
        for group in &self.groups {
            println!(
                "  {} group: {} points -> {} clusters (label offset {})",
                group.direction.name(),
                group.size,
                group.n_clusters,
                group.label_offset
            );
            match &group.stage {
                Some(MethodStage::Hierarchical(stage)) => {
                    let wss: Vec<String> = stage.wss.iter().map(|v| format!("{v:.3}")).collect();
                    println!(
                        "    {} linkage, k={} of {} candidates, wss=[{}]",
                        stage.linkage,
                        stage.selected_k,
                        stage.candidates,
                        wss.join(", ")
                    );
                }
                Some(MethodStage::Density(stage)) => {
                    println!(
                        "    min_cluster_size={} min_samples={} mst_weight={:.3} selected={}{}",
                        stage.min_cluster_size,
                        stage.min_samples,
                        stage.mst_weight,
                        stage.selected.len(),
                        if stage.fallback_single {
                            " (single-cluster fallback)"
                        } else {
                            ""
                        }
                    );
                }
                None => {}
            }
        }
        println!("  total clusters: {}", self.total_clusters);
        println!("  latency_ms: {:.3}", self.timings.total_ms);
        for stage in &self.timings.stages {
            println!("    {:<18} {:>9.3} ms", stage.label, stage.elapsed_ms);
        }
    }
}
