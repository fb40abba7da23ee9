use pair_cluster::PointSet;
use std::f64::consts::TAU;

/// `count` points evenly spaced on a circle of `radius` around `(cx, cy)`.
pub fn ring(cx: f64, cy: f64, radius: f64, count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let t = TAU * i as f64 / count as f64;
            (cx + radius * t.cos(), cy + radius * t.sin())
        })
        .collect()
}

/// Two tight rings of ten points, far apart, all with `y > x`.
pub fn two_clumps() -> PointSet {
    let mut pairs = ring(1.0, 5.0, 0.2, 10);
    pairs.extend(ring(8.0, 12.0, 0.2, 10));
    PointSet::from_pairs(pairs)
}

/// Mirror of [`two_clumps`] across `y = x`, so every point has `y < x`.
pub fn two_clumps_mirrored() -> PointSet {
    two_clumps().iter().map(|p| nalgebra::Point2::new(p.y, p.x)).collect()
}

/// The five-point example with three positive and one negative region.
pub fn mixed_directions() -> PointSet {
    PointSet::from_pairs([(1.0, 2.0), (1.0, 3.0), (10.0, 11.0), (10.0, 12.0), (10.0, 9.0)])
}
