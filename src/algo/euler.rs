//! Eulerian circuit via Hierholzer's algorithm.

use crate::graph::Graph;

/// Total result of `euler_circuit` — no exceptions cross this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EulerOutcome {
    /// `p[0..=E]` with `p[0] == p[E]`, using every edge exactly once.
    Circuit(Vec<usize>),
    /// The subgraph induced by non-isolated vertices is not connected.
    Disconnected,
    /// At least one vertex has odd degree; carries the count.
    OddDegree(usize),
}

/// Run Hierholzer's algorithm. Preconditions are checked connectivity
/// first, even-degree second, so the response distinguishes the two
/// failure reasons.
pub fn euler_circuit(graph: &Graph) -> EulerOutcome {
    if !graph.connected_among_non_isolated() {
        return EulerOutcome::Disconnected;
    }
    let order = graph.order();
    let odd = (0..order).filter(|&v| graph.degree(v) % 2 == 1).count();
    if odd > 0 {
        return EulerOutcome::OddDegree(odd);
    }

    // Mutable working copy: edges are consumed as they're walked.
    let mut adj = vec![vec![false; order]; order];
    let mut deg = vec![0usize; order];
    for u in 0..order {
        for v in 0..order {
            if graph.has_edge(u, v) {
                adj[u][v] = true;
                deg[u] += 1;
            }
        }
    }

    // Lowest-indexed non-isolated vertex, falling back to vertex 0 when
    // there are no edges at all: `E=0` yields a length-1 circuit `[0]`.
    let start = (0..order).find(|&v| deg[v] > 0).unwrap_or(0);

    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(graph.edge_count() + 1);
    while let Some(&u) = stack.last() {
        if deg[u] > 0 {
            // Lowest-indexed neighbor with a remaining edge — a stable,
            // deterministic tie-break.
            let v = (0..order).find(|&v| adj[u][v]).expect("deg[u] > 0 implies a neighbor exists");
            adj[u][v] = false;
            adj[v][u] = false;
            deg[u] -= 1;
            deg[v] -= 1;
            stack.push(v);
        } else {
            circuit.push(stack.pop().unwrap());
        }
    }

    EulerOutcome::Circuit(circuit)
}
