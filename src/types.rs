use nalgebra::Point2;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Index;

/// Largest accepted coordinate magnitude. Squared distances between such
/// points, and their size-weighted sums, stay finite.
pub const MAX_ABS_COORDINATE: f64 = 1e150;

/// Ordered set of paired measurements. The position of a point in the set is
/// its identity for the whole run; subsets are copied, never reordered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point2<f64>>,
}

impl PointSet {
    pub fn new(points: Vec<Point2<f64>>) -> Self {
        Self { points }
    }

    /// Build a set from `(x, y)` pairs, keeping their order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        pairs
            .into_iter()
            .map(|(x, y)| Point2::new(x, y))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2<f64>> {
        self.points.iter()
    }

    /// Copy the points at `indices` into a new set. Position `i` of the result
    /// corresponds to `indices[i]` in `self`.
    pub fn subset(&self, indices: &[usize]) -> PointSet {
        indices.iter().map(|&idx| self.points[idx]).collect()
    }

    /// Index of the first point with a NaN or infinite coordinate.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
    }

    /// Index of the first point with a coordinate magnitude above `limit`.
    pub fn first_out_of_range(&self, limit: f64) -> Option<usize> {
        self.points
            .iter()
            .position(|p| p.x.abs() > limit || p.y.abs() > limit)
    }
}

impl Index<usize> for PointSet {
    type Output = Point2<f64>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.points[idx]
    }
}

impl FromIterator<Point2<f64>> for PointSet {
    fn from_iter<T: IntoIterator<Item = Point2<f64>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point2<f64>;
    type IntoIter = std::slice::Iter<'a, Point2<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Per-point labels of one clustering call together with the number of
/// distinct clusters they use.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterAssignment {
    pub labels: Vec<usize>,
    pub n_clusters: usize,
}

impl ClusterAssignment {
    /// All `n` points in one cluster (no cluster at all for `n == 0`).
    pub fn single(n: usize) -> Self {
        Self {
            labels: vec![0; n],
            n_clusters: usize::from(n > 0),
        }
    }

    pub fn max_label(&self) -> Option<usize> {
        self.labels.iter().copied().max()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Remap labels onto `0..k` preserving the order of the distinct values.
    pub fn contiguous(labels: &[usize]) -> Self {
        let mut remap: BTreeMap<usize, usize> = BTreeMap::new();
        for &label in labels {
            remap.entry(label).or_insert(0);
        }
        for (new_label, slot) in remap.values_mut().enumerate() {
            *slot = new_label;
        }
        Self {
            labels: labels.iter().map(|label| remap[label]).collect(),
            n_clusters: remap.len(),
        }
    }
}
