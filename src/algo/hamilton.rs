//! Hamiltonian cycle via pruned backtracking.

use crate::graph::Graph;

/// Total result of `hamilton_cycle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HamiltonOutcome {
    /// `c[0..=V]` with `c[0] == c[V]`, visiting every vertex exactly once.
    Cycle(Vec<usize>),
    /// No Hamiltonian cycle exists (or a precondition ruled it out).
    None,
}

/// `start` is fixed at vertex 0 to eliminate rotational symmetry.
/// Depth-first extension tries neighbors in ascending index order and is
/// pruned on `degree < 2` and on vertices already used.
pub fn hamilton_cycle(graph: &Graph) -> HamiltonOutcome {
    let order = graph.order();
    if order < 3 {
        return HamiltonOutcome::None;
    }
    if !graph.connected_among_non_isolated() {
        return HamiltonOutcome::None;
    }
    if (0..order).any(|v| graph.degree(v) < 2) {
        return HamiltonOutcome::None;
    }

    let mut used = vec![false; order];
    let mut path = Vec::with_capacity(order + 1);
    path.push(0);
    used[0] = true;

    if extend(graph, &mut path, &mut used) {
        path.push(0);
        HamiltonOutcome::Cycle(path)
    } else {
        HamiltonOutcome::None
    }
}

fn extend(graph: &Graph, path: &mut Vec<usize>, used: &mut [bool]) -> bool {
    let order = graph.order();
    if path.len() == order {
        return graph.has_edge(*path.last().unwrap(), path[0]);
    }

    let last = *path.last().unwrap();
    for v in 0..order {
        if used[v] || graph.degree(v) < 2 || !graph.has_edge(last, v) {
            continue;
        }
        used[v] = true;
        path.push(v);
        if extend(graph, path, used) {
            return true;
        }
        path.pop();
        used[v] = false;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_cycle_with_chord_takes_the_pure_cycle() {
        let mut g = Graph::new(5);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 3, 1);
        g.add_edge(3, 4, 1);
        g.add_edge(4, 0, 1);
        g.add_edge(0, 2, 1);
        assert_eq!(
            hamilton_cycle(&g),
            HamiltonOutcome::Cycle(vec![0, 1, 2, 3, 4, 0])
        );
    }

    #[test]
    fn too_few_vertices_is_none() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1, 1);
        assert_eq!(hamilton_cycle(&g), HamiltonOutcome::None);
    }

    #[test]
    fn low_degree_vertex_is_none() {
        // a "lollipop": triangle 0-1-2 plus a pendant 2-3.
        let mut g = Graph::new(4);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 0, 1);
        g.add_edge(2, 3, 1);
        assert_eq!(hamilton_cycle(&g), HamiltonOutcome::None);
    }

    #[test]
    fn disconnected_graph_is_none() {
        let mut g = Graph::new(6);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 0, 1);
        g.add_edge(3, 4, 1);
        g.add_edge(4, 5, 1);
        g.add_edge(5, 3, 1);
        assert_eq!(hamilton_cycle(&g), HamiltonOutcome::None);
    }

    #[test]
    fn complete_graph_always_has_a_cycle() {
        let mut g = Graph::new(5);
        for u in 0..5 {
            for v in (u + 1)..5 {
                g.add_edge(u, v, 1);
            }
        }
        match hamilton_cycle(&g) {
            HamiltonOutcome::Cycle(c) => {
                assert_eq!(c.len(), 6);
                assert_eq!(c[0], 0);
                assert_eq!(c[0], c[5]);
            }
            HamiltonOutcome::None => panic!("K5 must have a Hamiltonian cycle"),
        }
    }
}
