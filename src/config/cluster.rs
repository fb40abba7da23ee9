use crate::density::DensityParams;
use crate::engine::{ClusterMethod, EngineParams};
use crate::hierarchical::{HierarchicalParams, Linkage};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report destination; JSON goes to stdout when unset.
    pub json_out: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Partial engine parameters; unset fields keep the library defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    pub method: Option<ClusterMethod>,
    pub max_k: Option<usize>,
    pub linkage: Option<Linkage>,
    pub min_cluster_size: Option<usize>,
    pub min_samples: Option<usize>,
    pub log2: Option<bool>,
    pub parallel: Option<bool>,
}

impl ParamsConfig {
    pub fn resolve(&self) -> EngineParams {
        let defaults = EngineParams::default();
        let hierarchical = HierarchicalParams {
            max_k: self.max_k.unwrap_or(defaults.hierarchical.max_k),
            linkage: self.linkage.unwrap_or(defaults.hierarchical.linkage),
        };
        let density = DensityParams {
            min_cluster_size: self
                .min_cluster_size
                .unwrap_or(defaults.density.min_cluster_size),
            min_samples: self.min_samples.or(defaults.density.min_samples),
        };
        EngineParams {
            method: self.method.unwrap_or(defaults.method),
            hierarchical,
            density,
            log2: self.log2.unwrap_or(defaults.log2),
            parallel: self.parallel.unwrap_or(defaults.parallel),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClusterToolConfig {
    /// JSON file holding `[[x, y], ...]`.
    pub input: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: ParamsConfig,
}

pub fn load_config(path: &Path) -> Result<ClusterToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<ClusterToolConfig, String> {
    serde_json::from_str(data).map_err(|e| e.to_string())
}
