use crate::distance::DistanceMatrix;
use serde::Serialize;

/// Tree edge `u -> v` weighted by the graph entry between them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MstEdge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

/// Prim's algorithm on a dense graph, grown from vertex 0.
///
/// Each round picks the unvisited vertex with the smallest tentative distance
/// (lowest index on ties), records the edge to its tree parent and relaxes its
/// neighbours. A graph on `n` vertices yields `n - 1` edges in visit order.
pub fn prim_mst(graph: &DistanceMatrix) -> Vec<MstEdge> {
    let n = graph.len();
    if n == 0 {
        return Vec::new();
    }

    let mut in_tree = vec![false; n];
    let mut min_dist = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut edges = Vec::with_capacity(n - 1);
    min_dist[0] = 0.0;

    for _ in 0..n {
        let mut next: Option<usize> = None;
        for i in 0..n {
            if in_tree[i] {
                continue;
            }
            match next {
                Some(best) if min_dist[i] >= min_dist[best] => {}
                _ => next = Some(i),
            }
        }
        let Some(u) = next else {
            break;
        };

        in_tree[u] = true;
        if let Some(p) = parent[u] {
            edges.push(MstEdge {
                u: p,
                v: u,
                weight: min_dist[u],
            });
        }

        for v in 0..n {
            if !in_tree[v] && (parent[v].is_none() || graph.get(u, v) < min_dist[v]) {
                min_dist[v] = graph.get(u, v);
                parent[v] = Some(u);
            }
        }
    }

    edges
}
