//! Excess-of-mass cluster selection over a [`CondensedTree`].
//!
//! Going top-down a synthetic cluster appears when it separates from its
//! parent (`birth`, the parent's merge lambda) and disappears when it splits
//! into its own children (`death`, its own merge lambda). Its stability is
//! `(death - birth) * size`, clamped at zero, and leaves score zero. The root
//! has no parent, so its birth equals its death and it is never selected.
//!
//! A cluster wins over its subtree when its own stability is strictly larger
//! than the best total its children can propagate. Winners with at least
//! `min_cluster_size` points are selected; a winner discards every selection
//! below it.

use super::condensed::CondensedTree;
use serde::Serialize;

/// Cluster chosen by the selection pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCluster {
    pub id: usize,
    pub size: usize,
    pub stability: f64,
}

/// Stability per synthetic cluster, indexed by `id - n_points`.
pub fn cluster_stabilities(tree: &CondensedTree) -> Vec<f64> {
    let n = tree.n_points();
    let m = tree.n_clusters();
    let mut birth: Vec<Option<f64>> = vec![None; m];
    for record in tree.records() {
        if !tree.is_leaf(record.child) {
            birth[record.child - n] = Some(record.lambda);
        }
    }

    (0..m)
        .map(|k| {
            let id = n + k;
            let death = tree.lambda(id).unwrap_or(0.0);
            let birth = birth[k].unwrap_or(death);
            if death > birth {
                (death - birth) * tree.size(id) as f64
            } else {
                0.0
            }
        })
        .collect()
}

/// Select clusters below the root. Result is ordered by ascending id.
pub fn select_clusters(
    tree: &CondensedTree,
    stabilities: &[f64],
    min_cluster_size: usize,
) -> Vec<SelectedCluster> {
    let Some(root) = tree.root() else {
        return Vec::new();
    };
    let n = tree.n_points();
    let m = tree.n_clusters();
    let mut propagated = vec![0.0f64; m];
    let mut own_wins = vec![false; m];

    let value = |propagated: &[f64], id: usize| {
        if tree.is_leaf(id) {
            0.0
        } else {
            propagated[id - n]
        }
    };

    // Post-order: children are resolved before their parent.
    let mut stack: Vec<(usize, bool)> = vec![(root, false)];
    while let Some((id, expanded)) = stack.pop() {
        if tree.is_leaf(id) {
            continue;
        }
        let children = tree.children(id);
        if !expanded {
            stack.push((id, true));
            for &child in children.iter().rev() {
                stack.push((child, false));
            }
            continue;
        }
        let children_total: f64 = children.iter().map(|&c| value(&propagated, c)).sum();
        let own = stabilities[id - n];
        if own > children_total {
            own_wins[id - n] = true;
            propagated[id - n] = own;
        } else {
            propagated[id - n] = children_total;
        }
    }

    // Resolve top-down: the first winner on each path decides for its subtree.
    let mut selected = Vec::new();
    let mut pending = vec![root];
    while let Some(id) = pending.pop() {
        if tree.is_leaf(id) {
            continue;
        }
        let k = id - n;
        if own_wins[k] {
            let size = tree.size(id);
            if size >= min_cluster_size {
                selected.push(SelectedCluster {
                    id,
                    size,
                    stability: stabilities[k],
                });
            }
        } else {
            pending.extend_from_slice(tree.children(id));
        }
    }
    selected.sort_by_key(|cluster| cluster.id);
    selected
}

/// Label each point with the index of the first selected cluster holding it.
/// Points outside every selected cluster get label 0.
pub fn assign_labels(tree: &CondensedTree, selected: &[SelectedCluster]) -> Vec<usize> {
    let mut labels: Vec<Option<usize>> = vec![None; tree.n_points()];
    for (label, cluster) in selected.iter().enumerate() {
        for point in tree.points_of(cluster.id) {
            labels[point].get_or_insert(label);
        }
    }
    labels.into_iter().map(|l| l.unwrap_or(0)).collect()
}
