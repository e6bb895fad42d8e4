//! Seeded random-graph generation for the server's random-mode requests.
//!
//! Each call builds its own `rand::rngs::StdRng` from the request's seed,
//! so there is no process-wide shared RNG and therefore nothing to guard
//! with a mutex — two concurrent requests with the same seed and shape
//! produce byte-identical graphs without contending on any shared state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;

/// Upper bound on sampled edge weights in random mode (`w = rand() % WMAX +
/// 1`).
pub const WMAX: u64 = 100;

/// Build a graph on `order` vertices with exactly `size` distinct edges,
/// sampled deterministically from `seed`.
///
/// Self-loops and duplicate samples are silently retried (not counted
/// against `size`). Terminates because `size <= order*(order-1)/2` is
/// enforced by the parser before this is ever called.
pub fn generate_random_graph(order: usize, size: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(order);
    while graph.edge_count() < size {
        let u = rng.gen_range(0..order);
        let v = rng.gen_range(0..order);
        let w = rng.gen_range(0..WMAX) + 1;
        // add_edge silently rejects self-loops and duplicates; the loop
        // just keeps sampling until `size` distinct edges have landed.
        graph.add_edge(u, v, w);
    }
    graph
}
