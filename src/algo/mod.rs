//! The five algorithms plus the uniform capability the strategy registry
//! dispatches to.

pub mod clique;
pub mod euler;
pub mod hamilton;
pub mod mst;

pub use clique::{count_cliques_3plus, max_clique};
pub use euler::{euler_circuit, EulerOutcome};
pub use hamilton::{hamilton_cycle, HamiltonOutcome};
pub use mst::{mst_weight_prim, MstOutcome};

use crate::graph::Graph;

/// A registered algorithm: consumes an immutable graph, emits its response
/// body one line at a time through a line-sink closure.
pub trait Algorithm: Send + Sync {
    /// Canonical wire name, e.g. `"EULER"`.
    fn name(&self) -> &'static str;

    /// Emit each line of the response body (without a trailing `\n` — the
    /// caller adds it).
    fn run(&self, graph: &Graph, emit: &mut dyn FnMut(&str));
}

/// Render a vertex sequence as `v0 -> v1 -> ... -> vn`.
fn arrow_join(seq: &[usize]) -> String {
    seq.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub struct Euler;

impl Algorithm for Euler {
    fn name(&self) -> &'static str {
        "EULER"
    }

    fn run(&self, graph: &Graph, emit: &mut dyn FnMut(&str)) {
        match euler_circuit(graph) {
            EulerOutcome::Circuit(p) => {
                emit("Euler circuit exists. Sequence of vertices:");
                emit(&arrow_join(&p));
            }
            EulerOutcome::Disconnected => {
                emit("No Euler circuit: graph is disconnected (ignoring isolated vertices).");
            }
            EulerOutcome::OddDegree(n) => {
                emit(&format!("No Euler circuit: {} vertices have odd degree.", n));
            }
        }
    }
}

pub struct Mst;

impl Algorithm for Mst {
    fn name(&self) -> &'static str {
        "MST"
    }

    fn run(&self, graph: &Graph, emit: &mut dyn FnMut(&str)) {
        match mst_weight_prim(graph) {
            MstOutcome::Weight(w) => emit(&format!("MST total weight: {}", w)),
            MstOutcome::Disconnected => {
                emit("MST: graph is not connected (no spanning tree)");
            }
        }
    }
}

pub struct MaxClique;

impl Algorithm for MaxClique {
    fn name(&self) -> &'static str {
        "MAXCLIQUE"
    }

    fn run(&self, graph: &Graph, emit: &mut dyn FnMut(&str)) {
        let (k, members) = max_clique(graph);
        emit(&format!("Max clique size = {}", k));
        if k > 0 {
            let rendered = members
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            emit(&format!("Vertices: {}", rendered));
        }
    }
}

pub struct CountCliques3Plus;

impl Algorithm for CountCliques3Plus {
    fn name(&self) -> &'static str {
        "COUNTCLQ3P"
    }

    fn run(&self, graph: &Graph, emit: &mut dyn FnMut(&str)) {
        emit(&format!(
            "Number of cliques (size >= 3): {}",
            count_cliques_3plus(graph)
        ));
    }
}

pub struct Hamilton;

impl Algorithm for Hamilton {
    fn name(&self) -> &'static str {
        "HAMILTON"
    }

    fn run(&self, graph: &Graph, emit: &mut dyn FnMut(&str)) {
        match hamilton_cycle(graph) {
            HamiltonOutcome::Cycle(c) => {
                emit("Hamiltonian cycle found:");
                emit(&arrow_join(&c));
            }
            HamiltonOutcome::None => emit("No Hamiltonian cycle."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(algo: &dyn Algorithm, graph: &Graph) -> String {
        let mut out = String::new();
        let mut emit = |line: &str| {
            out.push_str(line);
            out.push('\n');
        };
        algo.run(graph, &mut emit);
        out
    }

    #[test]
    fn maxclique_omits_vertices_line_when_empty() {
        let g = Graph::new(3);
        let out = render(&MaxClique, &g);
        assert_eq!(out, "Max clique size = 0\n");
    }

    #[test]
    fn mst_disconnected_message() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 5);
        let out = render(&Mst, &g);
        assert_eq!(out, "MST: graph is not connected (no spanning tree)\n");
    }
}
