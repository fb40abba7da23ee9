//! Direction split of paired measurements.
//!
//! A pair `(x, y)` moved "up" when `y - x >= 0` and "down" otherwise. The two
//! directions are clustered independently and never share a label.

use crate::types::PointSet;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `y - x >= 0`
    Positive,
    /// `y - x < 0`
    Negative,
}

impl Direction {
    #[inline]
    pub fn of(point: &Point2<f64>) -> Self {
        if point.y - point.x >= 0.0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Positive => "positive",
            Direction::Negative => "negative",
        }
    }
}

/// Index lists of the two direction groups, each in ascending original order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectionSplit {
    pub positive: Vec<usize>,
    pub negative: Vec<usize>,
}

impl DirectionSplit {
    pub fn indices(&self, direction: Direction) -> &[usize] {
        match direction {
            Direction::Positive => &self.positive,
            Direction::Negative => &self.negative,
        }
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Partition `points` by the sign of `y - x`.
pub fn split_by_direction(points: &PointSet) -> DirectionSplit {
    let mut split = DirectionSplit::default();
    for (idx, point) in points.iter().enumerate() {
        match Direction::of(point) {
            Direction::Positive => split.positive.push(idx),
            Direction::Negative => split.negative.push(idx),
        }
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_on_the_diagonal_count_as_positive() {
        let set = PointSet::from_pairs([(1.0, 1.0), (2.0, 1.0), (0.0, 3.0)]);
        let split = split_by_direction(&set);
        assert_eq!(split.positive, vec![0, 2]);
        assert_eq!(split.negative, vec![1]);
    }

    #[test]
    fn empty_set_gives_empty_groups() {
        let split = split_by_direction(&PointSet::default());
        assert!(split.is_empty());
        assert_eq!(split.len(), 0);
    }
}
