//! Maximum clique and clique counting via Bron–Kerbosch over bitset
//! neighborhoods.

use crate::bitset::{Bitset, NeighborMasks};
use crate::graph::Graph;

/// `(k, members)`: `k` is the size of a maximum clique, `members` is one
/// such clique in ascending vertex order. `members` is empty iff `k == 0`
/// (the empty-graph case).
pub fn max_clique(graph: &Graph) -> (usize, Vec<usize>) {
    let order = graph.order();
    let masks = NeighborMasks::build(graph);

    let mut full = Bitset::with_len(order);
    for v in 0..order {
        full.set(v);
    }

    let mut best: Vec<usize> = Vec::new();
    bron_kerbosch_pivot(&masks, &mut Vec::new(), full, Bitset::with_len(order), &mut best);
    best.sort_unstable();
    (best.len(), best)
}

/// Bron–Kerbosch with the Tomita pivot: choose `u in P ∪ X` maximizing
/// `|P ∩ N(u)|`, then branch only over `P \ N(u)`. This enumerates maximal
/// cliques only — ties in clique size resolve to whichever maximal clique
/// is found first, which falls out of ascending iteration order rather
/// than being separately tie-broken.
fn bron_kerbosch_pivot(
    masks: &NeighborMasks,
    r: &mut Vec<usize>,
    p: Bitset,
    x: Bitset,
    best: &mut Vec<usize>,
) {
    if p.none_set() && x.none_set() {
        if r.len() > best.len() {
            *best = r.clone();
        }
        return;
    }

    let pivot = p
        .union(&x)
        .ones()
        .max_by_key(|&u| p.intersection(masks.of(u)).count_ones())
        .expect("P ∪ X is non-empty here");

    let candidates: Vec<usize> = p.difference(masks.of(pivot)).ones().collect();

    let mut p = p;
    let mut x = x;
    for v in candidates {
        r.push(v);
        bron_kerbosch_pivot(
            masks,
            r,
            p.intersection(masks.of(v)),
            x.intersection(masks.of(v)),
            best,
        );
        r.pop();
        p.clear_bit(v);
        x.set(v);
    }
}

/// Exact count of all cliques (not just maximal ones) with three or more
/// vertices. Plain Bron–Kerbosch *without* pivoting — pivoting would skip
/// non-maximal cliques, which is exactly what this needs to count.
pub fn count_cliques_3plus(graph: &Graph) -> u64 {
    let order = graph.order();
    if order <= 2 {
        return 0;
    }
    let masks = NeighborMasks::build(graph);

    let mut full = Bitset::with_len(order);
    for v in 0..order {
        full.set(v);
    }

    let mut count = 0u64;
    count_cliques(&masks, 0, full, Bitset::with_len(order), &mut count);
    count
}

fn count_cliques(masks: &NeighborMasks, r_len: usize, p: Bitset, x: Bitset, count: &mut u64) {
    if r_len >= 3 {
        *count += 1;
    }
    if p.none_set() {
        return;
    }

    let mut p = p;
    let mut x = x;
    for v in p.clone().ones() {
        // Remove `v` from `P` before recursing so later branches don't
        // re-enumerate subsets already counted in this one.
        p.clear_bit(v);
        count_cliques(
            masks,
            r_len + 1,
            p.intersection(masks.of(v)),
            x.intersection(masks.of(v)),
            count,
        );
        x.set(v);
    }
}
