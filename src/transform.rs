//! Optional preprocessing applied before the direction split.

use crate::types::PointSet;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    #[default]
    Identity,
    /// Base-2 logarithm of both coordinates; non-positive pairs are dropped.
    Log2,
}

/// Points handed to the clusterers, with the input index of each one.
#[derive(Clone, Debug, Default)]
pub struct PreparedPoints {
    pub points: PointSet,
    pub source_indices: Vec<usize>,
    pub excluded: usize,
}

impl PreparedPoints {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Transform {
    pub fn apply(self, input: &PointSet) -> PreparedPoints {
        match self {
            Transform::Identity => PreparedPoints {
                points: input.clone(),
                source_indices: (0..input.len()).collect(),
                excluded: 0,
            },
            Transform::Log2 => {
                let mut prepared = PreparedPoints::default();
                let mut kept = Vec::with_capacity(input.len());
                for (idx, p) in input.iter().enumerate() {
                    if p.x > 0.0 && p.y > 0.0 {
                        kept.push(Point2::new(p.x.log2(), p.y.log2()));
                        prepared.source_indices.push(idx);
                    } else {
                        prepared.excluded += 1;
                    }
                }
                prepared.points = PointSet::new(kept);
                prepared
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_keeps_everything() {
        let input = PointSet::from_pairs([(-1.0, 2.0), (3.0, 0.0)]);
        let prepared = Transform::Identity.apply(&input);
        assert_eq!(prepared.points, input);
        assert_eq!(prepared.source_indices, vec![0, 1]);
        assert_eq!(prepared.excluded, 0);
    }

    #[test]
    fn log2_drops_non_positive_pairs() {
        let input = PointSet::from_pairs([(4.0, 8.0), (0.0, 2.0), (1.0, -3.0), (0.5, 16.0)]);
        let prepared = Transform::Log2.apply(&input);
        assert_eq!(prepared.excluded, 2);
        assert_eq!(prepared.source_indices, vec![0, 3]);
        assert_eq!(prepared.points[0], Point2::new(2.0, 3.0));
        assert_eq!(prepared.points[1], Point2::new(-1.0, 4.0));
    }
}
