//! Response assembly.
//!
//! Builds the full response text for a `Request` — optional adjacency
//! prefix, then the algorithm body — without touching the connection. The
//! algorithm Active Objects call this; only `SENDER_AO` ever writes the
//! result to the socket.

use crate::algo::Algorithm;
use crate::graph::Graph;

/// Assemble the full response body for one algorithm run.
pub fn assemble(algo: &dyn Algorithm, graph: &Graph, want_print: bool) -> String {
    let mut out = String::new();
    if want_print {
        out.push_str(&graph.render_adjacency());
    }

    let mut emit = |line: &str| {
        out.push_str(line);
        out.push('\n');
    };
    algo.run(graph, &mut emit);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::Mst;

    #[test]
    fn adjacency_prefix_matches_graph_render() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 1);
        let out = assemble(&Mst, &g, true);
        assert!(out.starts_with(&g.render_adjacency()));
    }

    #[test]
    fn no_prefix_without_flag() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 1);
        let out = assemble(&Mst, &g, false);
        assert!(!out.contains("Adjacency matrix"));
    }
}
