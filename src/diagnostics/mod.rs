//! Diagnostics data model returned by the clustering engine.
//!
//! [`ClusteringReport`] is the main entry point: the merged labels, one
//! [`GroupReport`] per direction with the trace of the clusterer that ran on
//! it, and a [`TimingBreakdown`] of the run.

pub mod report;
pub mod stages;
pub mod timing;

pub use report::{ClusteringReport, GroupReport, InputDescriptor};
pub use stages::{DensityStage, HierarchicalStage, MethodStage};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
