use pair_cluster::density::{prim_mst, CondensedTree};
use pair_cluster::distance::DistanceMatrix;
use pair_cluster::union_find::UnionFind;
use pair_cluster::{
    split_by_direction, ClusterAssignment, ClusterEngine, DensityClusterer, DensityParams,
    Direction, EngineParams, HierarchicalClusterer, HierarchicalParams, PointSet,
};
use proptest::prelude::*;

fn point_sets(max_len: usize) -> impl Strategy<Value = PointSet> {
    prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 0..max_len).prop_map(PointSet::from_pairs)
}

fn assert_contiguous(assignment: &ClusterAssignment) -> Result<(), TestCaseError> {
    let mut distinct = assignment.labels.clone();
    distinct.sort_unstable();
    distinct.dedup();
    prop_assert_eq!(distinct, (0..assignment.n_clusters).collect::<Vec<_>>());
    Ok(())
}

proptest! {
    #[test]
    fn split_partitions_indices(points in point_sets(60)) {
        let split = split_by_direction(&points);
        let mut all: Vec<usize> = split
            .indices(Direction::Positive)
            .iter()
            .chain(split.indices(Direction::Negative))
            .copied()
            .collect();
        all.sort_unstable();
        prop_assert_eq!(all, (0..points.len()).collect::<Vec<_>>());
        for &i in split.indices(Direction::Positive) {
            prop_assert!(points[i].y - points[i].x >= 0.0);
        }
        for &i in split.indices(Direction::Negative) {
            prop_assert!(points[i].y - points[i].x < 0.0);
        }
    }

    #[test]
    fn mst_spans_without_cycles(points in point_sets(40)) {
        let n = points.len();
        let edges = prim_mst(&DistanceMatrix::euclidean(&points));
        prop_assert_eq!(edges.len(), n.saturating_sub(1));
        let mut uf = UnionFind::new(n);
        for edge in &edges {
            prop_assert!(uf.union(edge.u, edge.v).is_some(), "cycle through {:?}", edge);
        }
    }

    #[test]
    fn condensed_tree_has_one_cluster_per_merge(points in point_sets(40)) {
        let n = points.len();
        let edges = prim_mst(&DistanceMatrix::euclidean(&points));
        let tree = CondensedTree::build(&edges, n);
        prop_assert_eq!(tree.n_clusters(), n.saturating_sub(1));
        prop_assert_eq!(tree.records().len(), 2 * n.saturating_sub(1));
        if let Some(root) = tree.root() {
            prop_assert_eq!(tree.size(root), n);
            prop_assert_eq!(tree.points_of(root), (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn hierarchical_labels_are_contiguous(points in point_sets(30), max_k in 1usize..9) {
        let clusterer = HierarchicalClusterer::new(HierarchicalParams { max_k, ..HierarchicalParams::default() });
        let (assignment, _) = clusterer.cluster(&points);
        prop_assert_eq!(assignment.len(), points.len());
        if (1..=3).contains(&points.len()) {
            prop_assert_eq!(assignment.n_clusters, 1);
        }
        assert_contiguous(&assignment)?;
    }

    #[test]
    fn density_labels_are_contiguous(
        points in point_sets(30),
        min_cluster_size in 2usize..8,
        min_samples in prop::option::of(1usize..8),
    ) {
        let clusterer = DensityClusterer::new(DensityParams { min_cluster_size, min_samples });
        let (assignment, _) = clusterer.cluster(&points);
        prop_assert_eq!(assignment.len(), points.len());
        assert_contiguous(&assignment)?;
    }

    #[test]
    fn merged_labels_cover_zero_to_total(points in point_sets(30), density in any::<bool>()) {
        let params = if density {
            EngineParams::density(3, None)
        } else {
            EngineParams::hierarchical(5)
        };
        let report = ClusterEngine::new(params).unwrap().run(&points).unwrap();
        prop_assert_eq!(report.labels.len(), points.len());
        let mut distinct = report.labels.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(distinct, (0..report.total_clusters).collect::<Vec<_>>());
    }
}
