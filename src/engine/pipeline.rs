//! Split, cluster and merge.
//!
//! Stages
//! - Validate: reject non-finite coordinates, and coordinates too large to
//!   square once transformed.
//! - Transform: optional log2 with exclusion of non-positive pairs.
//! - Split: partition by the sign of `y - x`.
//! - Cluster: run the configured method on each non-empty group, optionally
//!   in parallel.
//! - Merge: shift negative-group labels past the positive ones and count the
//!   distinct labels.

use super::params::{ClusterMethod, EngineParams};
use crate::density::DensityClusterer;
use crate::diagnostics::{
    elapsed_ms, ClusteringReport, GroupReport, InputDescriptor, MethodStage, TimingBreakdown,
};
use crate::error::ClusterError;
use crate::hierarchical::HierarchicalClusterer;
use crate::split::{split_by_direction, Direction};
use crate::types::{ClusterAssignment, PointSet, MAX_ABS_COORDINATE};
use log::debug;
use std::collections::BTreeSet;
use std::time::Instant;

/// Runs the direction split and one clustering method per group.
#[derive(Clone, Debug)]
pub struct ClusterEngine {
    params: EngineParams,
}

struct GroupOutcome {
    assignment: ClusterAssignment,
    stage: MethodStage,
}

impl ClusterEngine {
    /// Create an engine after validating `params`.
    pub fn new(params: EngineParams) -> Result<Self, ClusterError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Cluster `points` and return labels against the caller's indices.
    pub fn run(&self, points: &PointSet) -> Result<ClusteringReport, ClusterError> {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        if let Some(index) = points.first_non_finite() {
            let p = points[index];
            return Err(ClusterError::NonFiniteCoordinate {
                index,
                x: p.x,
                y: p.y,
            });
        }

        let transform = self.params.transform();
        let stage_start = Instant::now();
        let prepared = transform.apply(points);
        timings.record("transform", stage_start);
        if prepared.is_empty() && !points.is_empty() {
            return Err(ClusterError::EmptyAfterTransform {
                excluded: prepared.excluded,
            });
        }
        if let Some(pos) = prepared.points.first_out_of_range(MAX_ABS_COORDINATE) {
            let index = prepared.source_indices[pos];
            let p = points[index];
            return Err(ClusterError::CoordinateOutOfRange {
                index,
                x: p.x,
                y: p.y,
                limit: MAX_ABS_COORDINATE,
            });
        }
        debug!(
            "ClusterEngine::run points={} clustered={} excluded={} method={} parallel={}",
            points.len(),
            prepared.len(),
            prepared.excluded,
            self.params.method.name(),
            self.params.parallel
        );

        let stage_start = Instant::now();
        let split = split_by_direction(&prepared.points);
        let positive = prepared.points.subset(split.indices(Direction::Positive));
        let negative = prepared.points.subset(split.indices(Direction::Negative));
        timings.record("split", stage_start);
        debug!(
            "ClusterEngine::run split positive={} negative={}",
            positive.len(),
            negative.len()
        );

        let stage_start = Instant::now();
        let (pos_outcome, neg_outcome) = if self.params.parallel {
            rayon::join(
                || self.cluster_group(&positive),
                || self.cluster_group(&negative),
            )
        } else {
            (self.cluster_group(&positive), self.cluster_group(&negative))
        };
        timings.record("cluster", stage_start);

        let stage_start = Instant::now();
        let mut labels = vec![0usize; prepared.len()];
        let mut groups = Vec::with_capacity(2);
        let mut offset = 0usize;
        for (direction, outcome) in [
            (Direction::Positive, pos_outcome),
            (Direction::Negative, neg_outcome),
        ] {
            let indices = split.indices(direction);
            let Some(GroupOutcome { assignment, stage }) = outcome else {
                groups.push(GroupReport {
                    direction,
                    size: 0,
                    n_clusters: 0,
                    label_offset: offset,
                    stage: None,
                });
                continue;
            };
            for (&idx, &label) in indices.iter().zip(&assignment.labels) {
                labels[idx] = label + offset;
            }
            timings.push(format!("cluster.{}", direction.name()), stage.elapsed_ms());
            debug!(
                "ClusterEngine::run {} group: {} points -> {} clusters (offset {})",
                direction.name(),
                indices.len(),
                assignment.n_clusters,
                offset
            );
            groups.push(GroupReport {
                direction,
                size: indices.len(),
                n_clusters: assignment.n_clusters,
                label_offset: offset,
                stage: Some(stage),
            });
            offset += assignment.max_label().map_or(0, |max| max + 1);
        }
        let total_clusters = labels.iter().collect::<BTreeSet<_>>().len();
        timings.record("merge", stage_start);
        timings.total_ms = elapsed_ms(total_start);

        Ok(ClusteringReport {
            input: InputDescriptor {
                points: points.len(),
                clustered: prepared.len(),
                excluded: prepared.excluded,
                transform,
                method: self.params.method,
            },
            labels,
            source_indices: prepared.source_indices,
            groups,
            total_clusters,
            timings,
        })
    }

    fn cluster_group(&self, points: &PointSet) -> Option<GroupOutcome> {
        if points.is_empty() {
            return None;
        }
        let outcome = match self.params.method {
            ClusterMethod::Hierarchical => {
                let (assignment, stage) =
                    HierarchicalClusterer::new(self.params.hierarchical.clone()).cluster(points);
                GroupOutcome {
                    assignment,
                    stage: MethodStage::Hierarchical(stage),
                }
            }
            ClusterMethod::Density => {
                let (assignment, stage) =
                    DensityClusterer::new(self.params.density.clone()).cluster(points);
                GroupOutcome {
                    assignment,
                    stage: MethodStage::Density(stage),
                }
            }
        };
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> PointSet {
        PointSet::from_pairs([(1.0, 2.0), (1.0, 3.0), (10.0, 11.0), (10.0, 12.0), (10.0, 9.0)])
    }

    #[test]
    fn rejects_invalid_params() {
        let err = ClusterEngine::new(EngineParams::hierarchical(0)).unwrap_err();
        assert!(matches!(err, ClusterError::InvalidParameter(_)));
    }

    #[test]
    fn rejects_non_finite_points() {
        let engine = ClusterEngine::new(EngineParams::default()).unwrap();
        let points = PointSet::from_pairs([(0.0, 1.0), (f64::NAN, 2.0)]);
        match engine.run(&points) {
            Err(ClusterError::NonFiniteCoordinate { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn rejects_coordinates_too_large_to_square() {
        let engine = ClusterEngine::new(EngineParams::default()).unwrap();
        let points = PointSet::from_pairs([(0.0, 1.0), (1.0, 2e200), (5.0, -1e200)]);
        match engine.run(&points) {
            Err(ClusterError::CoordinateOutOfRange { index, y, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(y, 2e200);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn log2_brings_huge_coordinates_into_range() {
        let params = EngineParams {
            log2: true,
            ..EngineParams::default()
        };
        let engine = ClusterEngine::new(params).unwrap();
        let points = PointSet::from_pairs([(1e200, 2e200), (3e200, 4e200)]);
        let report = engine.run(&points).unwrap();
        assert_eq!(report.labels, vec![0, 0]);
    }

    #[test]
    fn empty_input_is_an_empty_report() {
        let engine = ClusterEngine::new(EngineParams::default()).unwrap();
        let report = engine.run(&PointSet::default()).unwrap();
        assert!(report.labels.is_empty());
        assert_eq!(report.total_clusters, 0);
        assert_eq!(report.groups.len(), 2);
        assert!(report.groups.iter().all(|g| g.stage.is_none()));
    }

    #[test]
    fn negative_labels_follow_positive_ones() {
        let engine = ClusterEngine::new(EngineParams::density(2, Some(1))).unwrap();
        let report = engine.run(&scenario()).unwrap();
        assert_eq!(report.labels, vec![0, 0, 1, 1, 2]);
        assert_eq!(report.total_clusters, 3);

        let negative = report.group(Direction::Negative).unwrap();
        assert_eq!(negative.size, 1);
        assert_eq!(negative.n_clusters, 1);
        assert_eq!(negative.label_offset, 2);
    }

    #[test]
    fn negative_only_input_starts_at_zero() {
        let engine = ClusterEngine::new(EngineParams::default()).unwrap();
        let points = PointSet::from_pairs([(5.0, 1.0), (6.0, 2.0)]);
        let report = engine.run(&points).unwrap();
        assert_eq!(report.labels, vec![0, 0]);
        assert_eq!(report.group(Direction::Positive).unwrap().size, 0);
        assert_eq!(report.group(Direction::Negative).unwrap().label_offset, 0);
    }

    #[test]
    fn log2_reports_against_input_indices() {
        let params = EngineParams {
            log2: true,
            ..EngineParams::default()
        };
        let engine = ClusterEngine::new(params).unwrap();
        let points = PointSet::from_pairs([(2.0, 4.0), (-1.0, 3.0), (4.0, 8.0)]);
        let report = engine.run(&points).unwrap();
        assert_eq!(report.input.excluded, 1);
        assert_eq!(report.source_indices, vec![0, 2]);
        assert_eq!(report.label_of(1), None);
        assert_eq!(report.label_of(2), Some(0));

        let all_dropped = PointSet::from_pairs([(0.0, 1.0), (1.0, -1.0)]);
        assert_eq!(
            engine.run(&all_dropped).unwrap_err(),
            ClusterError::EmptyAfterTransform { excluded: 2 }
        );
    }
}
