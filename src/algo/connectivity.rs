use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Extension trait hanging the component iterators off the graph types.
pub trait Connectivity: DirectedAdjacencyList + Sized {
    /// Returns an iterator over the strongly connected components of the
    /// graph, one `Vec<Node>` at a time.
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self> {
        StronglyConnectedComponents::new(self)
    }

    /// Returns an iterator over the weakly connected components of the
    /// graph, i.e. connectivity when every edge is treated as undirected.
    fn weakly_connected_components(&self) -> WeaklyConnectedComponents<'_, Self> {
        WeaklyConnectedComponents::new(self)
    }
}

impl<G> Connectivity for G where G: DirectedAdjacencyList + Sized {}

/// Iterator over the connected components of an undirected graph.
///
/// Wraps a single [`DFS`] that is restarted at the next unvisited node (in
/// insertion order) whenever a component is exhausted, so each emitted
/// `Vec<Node>` is one maximal mutually-reachable group.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    // None for graphs without nodes, which have no components to offer
    dfs: Option<DFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            dfs: (!graph.is_empty()).then(|| graph.dfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let dfs = self.dfs.as_mut()?;

        loop {
            let cc = dfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !dfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}

/// Iterator over the weakly connected components of a directed graph.
///
/// Runs a multi-source DFS where each step follows the out- **and**
/// in-neighbors of a node, simulating undirected traversal without
/// materializing an undirected adjacency. Components start at the lowest
/// unvisited node id and are emitted in that order.
pub struct WeaklyConnectedComponents<'a, G>
where
    G: DirectedAdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    potentially_unvisited: usize,
    stack: Vec<Node>,
}

impl<'a, G> WeaklyConnectedComponents<'a, G>
where
    G: DirectedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            potentially_unvisited: 0,
            stack: Vec::with_capacity(32),
        }
    }

    fn next_unvisited_node(&mut self) -> Option<Node> {
        while self.potentially_unvisited < self.graph.len() {
            let u = self.potentially_unvisited as Node;
            if !self.visited.get_bit(u) {
                return Some(u);
            }

            self.potentially_unvisited += 1;
        }
        None
    }
}

impl<G> Iterator for WeaklyConnectedComponents<'_, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let root = self.next_unvisited_node()?;
        self.visited.set_bit(root);
        self.stack.push(root);

        let mut component = Vec::new();
        while let Some(u) = self.stack.pop() {
            component.push(u);

            for v in self.graph.undirected_neighbors_of(u) {
                if !self.visited.set_bit(v) {
                    self.stack.push(v);
                }
            }
        }

        Some(component)
    }
}

impl<G> FusedIterator for WeaklyConnectedComponents<'_, G> where G: DirectedAdjacencyList {}

/// Implementation of Tarjan's Algorithm for Strongly Connected Components.
/// It is designed as an iterator that emits the nodes of one strongly
/// connected component at a time. The order of nodes within a component is
/// non-deterministic; the components themselves are emitted in the reverse
/// topological order of the condensation (i.e. the graph obtained by
/// contracting each SCC into a single node).
pub struct StronglyConnectedComponents<'a, G>
where
    G: DirectedAdjacencyList,
{
    graph: &'a G,
    idx: Node,

    states: Vec<NodeState>,
    potentially_unvisited: usize,

    path_stack: Vec<Node>,

    call_stack: Vec<StackFrame<'a, G>>,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: DirectedAdjacencyList,
{
    /// Construct the iterator for some graph
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            idx: 0,
            states: vec![Default::default(); graph.len()],
            potentially_unvisited: 0,

            path_stack: Vec::with_capacity(32),
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Just like in a classic DFS spanning-forest computation we need to
    /// visit each node at least once: cover everything reachable from the
    /// first root in `search`, then scan for an untouched node and start over.
    /// Roots are taken in label-insertion order.
    fn next_unvisited_node(&mut self) -> Option<Node> {
        while self.potentially_unvisited < self.graph.len() {
            let v = self.potentially_unvisited as Node;
            if !self.states[self.potentially_unvisited].visited() {
                self.push_node(v, None);
                return Some(v);
            }

            self.potentially_unvisited += 1;
        }
        None
    }

    /// Put a pristine stack frame on the call stack. Roughly speaking, this
    /// is the first step of a recursive call of search.
    fn push_node(&mut self, node: Node, parent: Option<Node>) {
        self.call_stack.push(StackFrame {
            node,
            parent: parent.unwrap_or(node),
            initial_stack_len: 0,
            first_call: true,
            neighbors: self.graph.out_neighbors_of(node),
        });
    }

    fn search(&mut self) -> Option<Vec<Node>> {
        /*
        Tarjan's algorithm is typically described recursively similarly to
        DFS with some extra steps. That design has two issues: we cannot
        easily build an iterator from it, and for deep graphs we get stack
        overflows. So all state (including the live neighbor iterators) lives
        in `self.call_stack` which simulates the recursive calls.

        On first visit a node v is assigned a DFS-rank-ish `index` and the
        same `low_link` value, the smallest index known to be reachable from
        v. After all neighbors are processed (possibly triggering simulated
        recursion), every node of an SCC ends up with the same low_link and
        the unique node with `index == low_link` becomes its root. The nodes
        popped off `path_stack` down to the root form the component.
        */

        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let v = frame.node;

            if frame.first_call {
                frame.first_call = false;
                frame.initial_stack_len = self.path_stack.len() as Node;

                self.states[v as usize].discover(self.idx);
                self.idx += 1;

                self.path_stack.push(v);
            }

            for w in frame.neighbors.by_ref() {
                let w_state = self.states[w as usize];

                if !w_state.visited() {
                    self.push_node(w, Some(v));
                    continue 'recurse;
                } else if w_state.on_stack {
                    self.states[v as usize].try_lower_link(w_state.index);
                }
            }

            let frame = self.call_stack.pop().unwrap();
            let state = self.states[v as usize];

            self.states[frame.parent as usize].try_lower_link(state.low_link);

            if state.is_root() {
                let component = self.path_stack[frame.initial_stack_len as usize..].to_vec();
                self.path_stack.truncate(frame.initial_stack_len as usize);

                for &w in &component {
                    self.states[w as usize].on_stack = false;
                }

                debug_assert_eq!(*component.first().unwrap(), v);

                return Some(component);
            }
        }

        None
    }
}

impl<G> Iterator for StronglyConnectedComponents<'_, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Vec<Node>;

    /// Returns either a vector of node ids that form an SCC or None if no
    /// further SCC was found
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(x) = self.search() {
                return Some(x);
            }

            self.next_unvisited_node()?;
        }
    }
}

impl<G> FusedIterator for StronglyConnectedComponents<'_, G> where G: DirectedAdjacencyList {}

struct StackFrame<'a, G>
where
    G: DirectedAdjacencyList + 'a,
{
    node: Node,
    parent: Node,
    initial_stack_len: Node,
    first_call: bool,
    neighbors: G::NeighborIter<'a>,
}

/// Per-run Tarjan bookkeeping of a single node. Owned by one
/// [`StronglyConnectedComponents`] instance and discarded with it, so no
/// state can leak into a second run or another graph.
#[derive(Debug, Clone, Copy)]
struct NodeState {
    on_stack: bool,
    index: Node,
    low_link: Node,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            on_stack: false,
            index: INVALID_NODE,
            low_link: INVALID_NODE,
        }
    }
}

impl NodeState {
    fn visited(&self) -> bool {
        self.index != INVALID_NODE
    }

    fn discover(&mut self, u: Node) {
        debug_assert!(!self.visited());
        self.index = u;
        self.low_link = u;
        self.on_stack = true;
    }

    fn try_lower_link(&mut self, l: Node) {
        self.low_link = self.low_link.min(l);
    }

    fn is_root(&self) -> bool {
        self.index == self.low_link
    }
}

/// Sorts the nodes in each component increasingly and then the components
/// themselves lexicographically.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::repr::{DiGraph, UndirGraph};

    fn labelled_digraph(n: NumNodes) -> DiGraph {
        let mut graph = DiGraph::new();
        for i in 0..n {
            graph.add_node(&format!("n{i}"));
        }
        graph
    }

    /// Asserts that `components` cover `0..n` with every node in exactly one
    /// component, and returns the component id of each node.
    fn assert_partition(components: &[Vec<Node>], n: NumNodes) -> Vec<usize> {
        let mut owner = vec![usize::MAX; n as usize];
        for (i, comp) in components.iter().enumerate() {
            for &u in comp {
                assert_eq!(owner[u as usize], usize::MAX, "node {u} in two components");
                owner[u as usize] = i;
            }
        }
        assert!(owner.iter().all(|&c| c != usize::MAX));
        owner
    }

    #[test]
    fn scc_decomposition() {
        let graph = DiGraph::from_edges(
            ["a", "b", "c", "d", "e", "f", "g", "h"],
            [
                ("a", "b"),
                ("b", "c"),
                ("b", "e"),
                ("b", "f"),
                ("c", "g"),
                ("c", "d"),
                ("d", "c"),
                ("d", "h"),
                ("e", "a"),
                ("e", "f"),
                ("f", "g"),
                ("g", "f"),
                ("h", "d"),
                ("h", "g"),
            ],
        );

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 3);

        let sccs = sort_components(sccs);
        assert_eq!(sccs[0], [0, 1, 4]);
        assert_eq!(sccs[1], [2, 3, 7]);
        assert_eq!(sccs[2], [5, 6]);
    }

    #[test]
    fn scc_of_dag_is_all_singletons() {
        // A->B, A->C, B->D, E->D, F->G, G->H
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

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 8);
        assert!(sccs.iter().all(|scc| scc.len() == 1));
        assert_partition(&sccs, 8);
    }

    #[test]
    fn wcc_of_dag() {
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

        let wccs = sort_components(graph.weakly_connected_components().collect_vec());
        assert_eq!(wccs.len(), 2);
        assert_eq!(graph.labels_of(&wccs[0]), ["A", "B", "C", "D", "E"]);
        assert_eq!(graph.labels_of(&wccs[1]), ["F", "G", "H"]);
    }

    #[test]
    fn cycle_collapses_into_one_scc() {
        // 3-cycle a->b->c->a plus dangling c->d
        let graph = DiGraph::from_edges(
            ["a", "b", "c", "d"],
            [("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")],
        );

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 2);

        // reverse topological emission: the sink {d} comes before the cycle
        assert_eq!(graph.labels_of(&sccs[0]), ["d"]);
        assert_eq!(
            sccs[1].iter().copied().sorted().collect_vec(),
            vec![0, 1, 2]
        );

        // ignoring direction everything hangs together
        let wccs = graph.weakly_connected_components().collect_vec();
        assert_eq!(wccs.len(), 1);
        assert_partition(&wccs, 4);
    }

    #[test]
    fn self_loop_is_a_singleton_scc() {
        let graph = DiGraph::from_edges(["a", "b"], [("a", "a"), ("a", "b")]);

        let sccs = sort_components(graph.strongly_connected_components().collect_vec());
        assert_eq!(sccs, vec![vec![0], vec![1]]);
    }

    #[test]
    fn every_scc_is_contained_in_a_wcc() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for _ in 0..10 {
            let n: NumNodes = 100;
            let mut graph = labelled_digraph(n);
            for _ in 0..300 {
                graph.add_edge_ids(rng.random_range(0..n), rng.random_range(0..n));
            }

            let sccs = graph.strongly_connected_components().collect_vec();
            let wccs = graph.weakly_connected_components().collect_vec();

            assert_partition(&sccs, n);
            let wcc_of = assert_partition(&wccs, n);

            for scc in &sccs {
                assert!(scc.iter().all(|&u| wcc_of[u as usize] == wcc_of[scc[0] as usize]));
            }
        }
    }

    #[test]
    fn scc_long_cycle() {
        // assert that we can deal with very deep graphs
        let n: NumNodes = 10_000;
        let mut graph = labelled_digraph(n);
        for u in 0..n {
            graph.add_edge_ids(u, (u + 1) % n);
        }

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs.first().unwrap().len(), n as usize);

        let wccs = graph.weakly_connected_components().collect_vec();
        assert_eq!(wccs.len(), 1);
    }

    #[test]
    fn undirected_components_partition_all_nodes() {
        let mut graph = UndirGraph::from_labels(["X", "Y", "Z"]);
        graph.add_edge("X", "Y");

        let ccs = graph.connected_components().collect_vec();
        assert_eq!(ccs.len(), 2);
        assert_eq!(
            graph.labels_of(&ccs[0].iter().copied().sorted().collect_vec()),
            ["X", "Y"]
        );
        assert_eq!(graph.labels_of(&ccs[1]), ["Z"]);
    }

    #[test]
    fn adding_an_edge_merges_components() {
        let mut graph = UndirGraph::from_labels(["a", "b", "c", "d"]);
        graph.add_edge("a", "b");
        graph.add_edge("c", "d");
        assert_eq!(graph.connected_components().count(), 2);

        graph.add_edge("b", "c");
        let ccs = graph.connected_components().collect_vec();
        assert_eq!(ccs.len(), 1);
        assert_partition(&ccs, 4);
    }

    #[test]
    fn empty_graphs_have_no_components() {
        let directed = DiGraph::new();
        assert_eq!(directed.strongly_connected_components().count(), 0);
        assert_eq!(directed.weakly_connected_components().count(), 0);

        let undirected = UndirGraph::new();
        assert_eq!(undirected.connected_components().count(), 0);
    }

    #[test]
    fn components_can_be_resolved_to_labels() {
        let graph = DiGraph::from_edges(["u", "v", "w"], [("u", "v"), ("v", "u")]);

        let sccs = sort_components(graph.strongly_connected_components().collect_vec());
        let labels = sccs.iter().map(|scc| graph.labels_of(scc)).collect_vec();
        assert_eq!(labels, vec![vec!["u", "v"], vec!["w"]]);
    }
}
