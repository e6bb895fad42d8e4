//! Property 5: Prim's weight matches an independent Kruskal computation,
//! and the disconnected sentinel is exact.

use graphd::algo::{mst_weight_prim, MstOutcome};
use graphd::graph::Graph;
use proptest::prelude::*;

fn arb_graph(max_v: usize) -> impl Strategy<Value = Graph> {
    (1..=max_v).prop_flat_map(|v| {
        let edge = (0..v, 0..v, 1u64..=50);
        proptest::collection::vec(edge, 0..25).prop_map(move |attempts| {
            let mut g = Graph::new(v);
            for (u, w, weight) in attempts {
                g.add_edge(u, w, weight);
            }
            g
        })
    })
}

struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}

/// Reference Kruskal implementation, independent of the production Prim
/// pass, used to cross-check its output.
fn kruskal_mst_weight(g: &Graph) -> Option<u64> {
    if g.order() == 1 {
        return Some(0);
    }
    if (0..g.order()).any(|v| g.degree(v) == 0) {
        return None;
    }

    let mut edges: Vec<(u64, usize, usize)> = g.edges().map(|(u, v, w)| (w, u, v)).collect();
    edges.sort_unstable();

    let mut dsu = DisjointSet::new(g.order());
    let mut total = 0u64;
    for (w, u, v) in edges {
        if dsu.union(u, v) {
            total += w;
        }
    }

    let root = dsu.find(0);
    if (1..g.order()).all(|v| dsu.find(v) == root) {
        Some(total)
    } else {
        None
    }
}

proptest! {
    #[test]
    fn prim_matches_kruskal(g in arb_graph(8)) {
        let expected = kruskal_mst_weight(&g);
        match (mst_weight_prim(&g), expected) {
            (MstOutcome::Weight(w), Some(e)) => prop_assert_eq!(w, e),
            (MstOutcome::Disconnected, None) => {}
            (actual, expected) => prop_assert!(
                false,
                "mismatch: prim={:?} kruskal={:?}",
                actual,
                expected
            ),
        }
    }
}

#[test]
fn path_graph_mst_matches_scenario_3() {
    let mut g = Graph::new(5);
    g.add_edge(0, 1, 1);
    g.add_edge(1, 2, 2);
    g.add_edge(2, 3, 3);
    g.add_edge(3, 4, 4);
    g.add_edge(0, 4, 10);
    assert_eq!(mst_weight_prim(&g), MstOutcome::Weight(10));
}

#[test]
fn isolated_vertex_matches_scenario_4() {
    let mut g = Graph::new(3);
    g.add_edge(0, 1, 5);
    assert_eq!(mst_weight_prim(&g), MstOutcome::Disconnected);
}
