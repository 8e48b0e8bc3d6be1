/*!
Topological orderings of directed graphs via iterative DFS postorder.

[`topo_sort`] always produces a permutation of all nodes and is best-effort
on cyclic inputs; [`topo_sort_checked`] instead reports the first back edge
it encounters as a [`CycleError`].
*/

use thiserror::Error;

use super::*;

/// Error returned by [`topo_sort_checked`] on cyclic input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("graph contains a cycle through node {node}")]
pub struct CycleError {
    /// A node id known to lie on a cycle. Resolve it to a label via
    /// [`GraphLabels::label_of`](crate::ops::GraphLabels::label_of).
    pub node: Node,
}

/// Entry of the explicit DFS stack: a node is pushed once to be expanded
/// and once more to be emitted after its whole subtree finished.
enum Visit {
    Enter(Node),
    Exit(Node),
}

/// Returns a topological ordering of **all** nodes of the graph as a
/// permutation of `0..n`, computed as the reverse DFS finish order over
/// roots in label-insertion order.
///
/// If the graph is acyclic, every edge `(u, v)` has `u` placed before `v`.
/// If it is not, the result is still a permutation of all nodes and the
/// property holds for every edge not involved in a cycle; use
/// [`topo_sort_checked`] to reject cyclic inputs instead.
pub fn topo_sort<G>(graph: &G) -> Vec<Node>
where
    G: DirectedAdjacencyList,
{
    let mut order = Vec::with_capacity(graph.len());
    let mut visited = graph.vertex_bitset_unset();
    let mut stack = Vec::with_capacity(32);

    for root in graph.vertices() {
        if visited.get_bit(root) {
            continue;
        }

        stack.push(Visit::Enter(root));
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(u) => {
                    // a node may be stacked multiple times before its first expansion
                    if visited.set_bit(u) {
                        continue;
                    }

                    stack.push(Visit::Exit(u));
                    for v in graph.out_neighbors_of(u) {
                        if !visited.get_bit(v) {
                            stack.push(Visit::Enter(v));
                        }
                    }
                }
                Visit::Exit(u) => order.push(u),
            }
        }
    }

    order.reverse();
    order
}

/// Like [`topo_sort`] but fails on the first back edge instead of producing
/// a best-effort order. On `Ok`, the returned permutation satisfies the
/// edge-ordering property for **every** edge of the graph.
pub fn topo_sort_checked<G>(graph: &G) -> Result<Vec<Node>, CycleError>
where
    G: DirectedAdjacencyList,
{
    let mut order = Vec::with_capacity(graph.len());
    let mut finished = graph.vertex_bitset_unset();
    // nodes with a pending Exit entry, i.e. the current DFS path
    let mut on_path = graph.vertex_bitset_unset();
    let mut stack = Vec::with_capacity(32);

    for root in graph.vertices() {
        if finished.get_bit(root) {
            continue;
        }

        stack.push(Visit::Enter(root));
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(u) => {
                    if finished.get_bit(u) || on_path.set_bit(u) {
                        continue;
                    }

                    stack.push(Visit::Exit(u));
                    for v in graph.out_neighbors_of(u) {
                        // an edge into the current path closes a cycle
                        if on_path.get_bit(v) {
                            return Err(CycleError { node: v });
                        }
                        if !finished.get_bit(v) {
                            stack.push(Visit::Enter(v));
                        }
                    }
                }
                Visit::Exit(u) => {
                    on_path.clear_bit(u);
                    finished.set_bit(u);
                    order.push(u);
                }
            }
        }
    }

    order.reverse();
    Ok(order)
}

/// Returns *true* iff the graph contains no directed cycle
pub fn is_acyclic<G>(graph: &G) -> bool
where
    G: DirectedAdjacencyList,
{
    topo_sort_checked(graph).is_ok()
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::repr::DiGraph;

    /// Position of each node in `order`; the ordering property then reads
    /// `rank[u] < rank[v]` for an edge `(u, v)`.
    fn ranks(order: &[Node], n: NumNodes) -> Vec<usize> {
        let mut rank = vec![usize::MAX; n as usize];
        for (i, &u) in order.iter().enumerate() {
            rank[u as usize] = i;
        }
        assert!(rank.iter().all(|&r| r != usize::MAX));
        rank
    }

    #[test]
    fn respects_all_edges_of_a_dag() {
        let graph = DiGraph::from_edges(
            ["a", "b", "c", "d", "e"],
            [("a", "b"), ("a", "c"), ("c", "b"), ("b", "d"), ("e", "d")],
        );

        let order = topo_sort(&graph);
        assert_eq!(order.len(), 5);

        let rank = ranks(&order, 5);
        for Edge(u, v) in graph.edges() {
            assert!(rank[u as usize] < rank[v as usize]);
        }

        assert_eq!(topo_sort_checked(&graph), Ok(order));
    }

    #[test]
    fn forest_order_respects_both_trees() {
        let graph = DiGraph::from_edges(
            ["A", "B", "C", "D", "E", "F", "G", "H"],
            [
                ("A", "B"),
                ("A", "C"),
                ("B", "D"),
                ("E", "D"),
                ("F", "G"),
                ("G", "H"),
            ],
        );

        let order = topo_sort(&graph);
        let rank = ranks(&order, 8);

        let pos = |l: &str| rank[graph.node_of(l).unwrap() as usize];
        assert!(pos("A") < pos("B") && pos("B") < pos("D"));
        assert!(pos("F") < pos("G") && pos("G") < pos("H"));
        assert!(pos("E") < pos("D"));
    }

    #[test]
    fn random_dag_orders_are_valid() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5678);

        for _ in 0..10 {
            let n: NumNodes = 60;
            let mut graph = DiGraph::new();
            for i in 0..n {
                graph.add_node(&format!("n{i}"));
            }

            // edges only from a lower to a higher position of a random
            // permutation, so the graph is acyclic by construction
            let mut perm = (0..n).collect_vec();
            perm.shuffle(rng);
            for _ in 0..150 {
                let (i, j) = (rng.random_range(0..n), rng.random_range(0..n));
                if i != j {
                    let (i, j) = (i.min(j), i.max(j));
                    graph.add_edge_ids(perm[i as usize], perm[j as usize]);
                }
            }

            let order = topo_sort_checked(&graph).unwrap();
            let rank = ranks(&order, n);
            for Edge(u, v) in graph.edges() {
                assert!(rank[u as usize] < rank[v as usize]);
            }
        }
    }

    #[test]
    fn cyclic_graph_still_yields_a_permutation() {
        let graph = DiGraph::from_edges(
            ["a", "b", "c", "d"],
            [("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")],
        );

        let order = topo_sort(&graph);
        assert_eq!(order.iter().copied().sorted().collect_vec(), [0, 1, 2, 3]);

        // the edge leaving the cycle is still respected
        let rank = ranks(&order, 4);
        assert!(rank[2] < rank[3]);
    }

    #[test]
    fn checked_variant_rejects_cycles() {
        let graph = DiGraph::from_edges(
            ["a", "b", "c"],
            [("a", "b"), ("b", "c"), ("c", "a")],
        );

        let err = topo_sort_checked(&graph).unwrap_err();
        assert!(err.node < 3);
        assert!(!is_acyclic(&graph));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = DiGraph::from_edges(["a", "b"], [("a", "b"), ("b", "b")]);

        assert_eq!(topo_sort_checked(&graph), Err(CycleError { node: 1 }));
        assert_eq!(topo_sort(&graph), [0, 1]);
    }

    #[test]
    fn acyclic_checks() {
        let dag = DiGraph::from_edges(["a", "b", "c"], [("a", "b"), ("a", "c"), ("b", "c")]);
        assert!(is_acyclic(&dag));

        let empty = DiGraph::new();
        assert!(is_acyclic(&empty));
        assert!(topo_sort(&empty).is_empty());
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let n: NumNodes = 10_000;
        let mut graph = DiGraph::new();
        for i in 0..n {
            graph.add_node(&format!("n{i}"));
        }
        for u in 0..n - 1 {
            graph.add_edge_ids(u, u + 1);
        }

        let order = topo_sort_checked(&graph).unwrap();
        assert_eq!(order, (0..n).collect_vec());
    }
}
