use serde::{Deserialize, Serialize};

/// Inter-cluster distance used by the agglomerative pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linkage {
    /// Minimum increase of within-cluster variance.
    #[default]
    Ward,
    /// Farthest pair.
    Complete,
    /// Mean over all pairs (UPGMA).
    Average,
    /// Closest pair.
    Single,
}

impl Linkage {
    pub fn name(&self) -> &'static str {
        match self {
            Linkage::Ward => "ward",
            Linkage::Complete => "complete",
            Linkage::Average => "average",
            Linkage::Single => "single",
        }
    }

    /// Lance–Williams update: distance from cluster `k` to the union of `i`
    /// and `j`, given the three pairwise distances and the cluster sizes.
    pub fn update(self, d_ki: f64, d_kj: f64, d_ij: f64, n_i: f64, n_j: f64, n_k: f64) -> f64 {
        match self {
            Linkage::Single => d_ki.min(d_kj),
            Linkage::Complete => d_ki.max(d_kj),
            Linkage::Average => (n_i * d_ki + n_j * d_kj) / (n_i + n_j),
            Linkage::Ward => {
                // Squares are taken relative to the largest input to stay finite.
                let scale = d_ki.max(d_kj).max(d_ij);
                if scale <= 0.0 || !scale.is_finite() {
                    return scale.max(0.0);
                }
                let (a, b, c) = (d_ki / scale, d_kj / scale, d_ij / scale);
                let total = n_i + n_j + n_k;
                let sq = ((n_i + n_k) * a * a + (n_j + n_k) * b * b - n_k * c * c) / total;
                scale * sq.max(0.0).sqrt()
            }
        }
    }
}

impl std::fmt::Display for Linkage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_linkages_pick_extremes_and_means() {
        assert_eq!(Linkage::Single.update(2.0, 5.0, 1.0, 1.0, 1.0, 1.0), 2.0);
        assert_eq!(Linkage::Complete.update(2.0, 5.0, 1.0, 1.0, 1.0, 1.0), 5.0);
        assert_eq!(Linkage::Average.update(2.0, 5.0, 1.0, 1.0, 2.0, 1.0), 4.0);
    }

    #[test]
    fn ward_matches_centroid_formula_for_singletons() {
        // Points a=0, b=2, k=5 on a line. Merging a and b gives centroid 1;
        // ward distance = sqrt(2 * n_ab * n_k / (n_ab + n_k)) * |5 - 1|.
        let d = Linkage::Ward.update(5.0, 3.0, 2.0, 1.0, 1.0, 1.0);
        let expected = (2.0f64 * 2.0 * 1.0 / 3.0).sqrt() * 4.0;
        assert!((d - expected).abs() < 1e-9, "got {d}, expected {expected}");
    }

    #[test]
    fn ward_stays_finite_for_huge_distances() {
        let small = Linkage::Ward.update(5.0, 3.0, 2.0, 1.0, 1.0, 1.0);
        let huge = Linkage::Ward.update(5e200, 3e200, 2e200, 1.0, 1.0, 1.0);
        assert!(huge.is_finite());
        assert!((huge / 1e200 - small).abs() < 1e-9);
        assert_eq!(Linkage::Ward.update(0.0, 0.0, 0.0, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn parses_lowercase_names() {
        let linkage: Linkage = serde_json::from_str("\"average\"").unwrap();
        assert_eq!(linkage, Linkage::Average);
        assert_eq!(Linkage::default().to_string(), "ward");
    }
}
