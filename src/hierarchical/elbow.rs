use crate::types::PointSet;
use nalgebra::Vector2;

/// Within-cluster sum of squared deviations from each cluster centroid.
pub fn within_cluster_ss(points: &PointSet, labels: &[usize]) -> f64 {
    debug_assert_eq!(points.len(), labels.len());
    let k = labels.iter().copied().max().map_or(0, |m| m + 1);
    let mut sums = vec![Vector2::<f64>::zeros(); k];
    let mut counts = vec![0usize; k];
    for (p, &label) in points.iter().zip(labels) {
        sums[label] += p.coords;
        counts[label] += 1;
    }
    let centroids: Vec<Vector2<f64>> = sums
        .iter()
        .zip(&counts)
        .map(|(sum, &count)| if count > 0 { sum / count as f64 } else { *sum })
        .collect();
    points
        .iter()
        .zip(labels)
        .map(|(p, &label)| (p.coords - centroids[label]).norm_squared())
        .sum()
}

/// Elbow decision over a WSS curve indexed by `k - 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct ElbowChoice {
    pub k: usize,
    /// `|atan(wss[i-1] - wss[i]) - atan(wss[i] - wss[i+1])|` for each interior `i`.
    pub angle_changes: Vec<f64>,
}

/// Pick `k` at the sharpest bend of the WSS curve.
///
/// Fewer than three values fall back to `min(2, n)`. The first maximal bend
/// wins, so flat curves resolve to the smallest candidate. A curve that starts
/// at zero has nothing to split and yields `k = 1`.
pub fn select_elbow(wss: &[f64], n_points: usize) -> ElbowChoice {
    if wss.len() < 3 {
        return ElbowChoice {
            k: n_points.min(2),
            angle_changes: Vec::new(),
        };
    }
    let angle_changes: Vec<f64> = wss
        .windows(3)
        .map(|w| {
            let before = (w[0] - w[1]).atan2(1.0);
            let after = (w[1] - w[2]).atan2(1.0);
            (before - after).abs()
        })
        .collect();

    if wss[0] <= 0.0 {
        return ElbowChoice { k: 1, angle_changes };
    }

    let mut best = 0;
    for (i, &change) in angle_changes.iter().enumerate() {
        if change > angle_changes[best] {
            best = i;
        }
    }
    ElbowChoice {
        k: best + 2,
        angle_changes,
    }
}
