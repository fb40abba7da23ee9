#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod io;
pub mod split;
pub mod transform;
pub mod types;

// Clustering internals, public for tools and tests.
pub mod density;
pub mod distance;
pub mod hierarchical;
pub mod union_find;

// --- High-level re-exports -------------------------------------------------

pub use crate::engine::{ClusterEngine, ClusterMethod, EngineParams};
pub use crate::error::ClusterError;
pub use crate::types::{ClusterAssignment, PointSet};

pub use crate::density::{DensityClusterer, DensityParams};
pub use crate::hierarchical::{HierarchicalClusterer, HierarchicalParams, Linkage};
pub use crate::split::{split_by_direction, Direction, DirectionSplit};

pub use crate::diagnostics::{ClusteringReport, GroupReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use pair_cluster::prelude::*;
///
/// # fn main() -> Result<(), ClusterError> {
/// let points = PointSet::from_pairs([(1.0, 2.0), (1.0, 3.0), (10.0, 11.0), (10.0, 12.0)]);
/// let engine = ClusterEngine::new(EngineParams::density(2, Some(1)))?;
/// let report = engine.run(&points)?;
/// println!("clusters={} labels={:?}", report.total_clusters, report.labels);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{
        ClusterEngine, ClusterError, ClusterMethod, ClusteringReport, EngineParams, Linkage,
        PointSet,
    };
}
