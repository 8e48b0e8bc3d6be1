/*!
Graph traversal iterators.

Provides a generic [`TraversalSearch`] whose frontier container determines the
traversal order (queue -> BFS, stack -> DFS), parameterized over the
visited-[`Set`] implementation. Multi-source sweeps restart the same iterator
via [`TraversalSearch::try_restart_at_unvisited`]; the component iterators in
[`connectivity`](super::connectivity) build directly on this.
*/

use std::collections::VecDeque;

use super::*;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// nodes during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and a
/// set of visited nodes; no call-stack recursion is involved, so traversal
/// depth is bounded by heap memory only.
pub struct TraversalSearch<'a, G, S, V>
where
    G: AdjacencyList,
    S: NodeSequencer,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
}

/// A BFS traversal iterator using a custom visited-[`Set`].
pub type BFSWithSet<'a, G, V> = TraversalSearch<'a, G, VecDeque<Node>, V>;

/// A DFS traversal iterator using a custom visited-[`Set`].
pub type DFSWithSet<'a, G, V> = TraversalSearch<'a, G, Vec<Node>, V>;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, NodeBitSet>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, NodeBitSet>;

impl<'a, G, S, V> TraversalSearch<'a, G, S, V>
where
    G: AdjacencyList,
    S: NodeSequencer,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());
        let len = graph.len();
        let mut visited = V::from_total_used_capacity(len, len);
        visited.insert(start);
        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }
}

impl<'a, G, S, V> TraversalSearch<'a, G, S, V>
where
    G: AdjacencyList,
    S: NodeSequencer,
    V: Set<Node>,
{
    /// Returns a reference to the set of visited nodes
    pub fn visited(&self) -> &V {
        &self.visited
    }

    /// Tries to restart the search at a yet unvisited node and returns
    /// true iff successful. Requires that the search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.graph.vertices().find(|u| !self.visited.contains(u)) {
            None => false,
            Some(u) => {
                self.visited.insert(u);
                self.sequencer.push(u);
                true
            }
        }
    }

    /// Excludes a node from the search. It will be treated as if it was
    /// already visited, i.e. no edges to or from that node will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already on the
    /// frontier. It is therefore highly recommended to call this method
    /// directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.insert(u);
    }

    /// Exclude multiple nodes from traversal. Functionally equivalent to
    /// repeatedly calling [`TraversalSearch::exclude_node`].
    pub fn exclude_nodes<I>(&mut self, us: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    /// Builder-style variant of [`TraversalSearch::exclude_nodes`].
    pub fn with_nodes_excluded<I>(mut self, us: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.exclude_nodes(us);
        self
    }
}

impl<G, S, V> Iterator for TraversalSearch<'_, G, S, V>
where
    G: AdjacencyList,
    S: NodeSequencer,
    V: Set<Node>,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.insert(v) {
                self.sequencer.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.len() + self.sequencer.cardinality()),
        )
    }
}

/// Provides convenient traversal entry points on graph data structures.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{algo::*, prelude::*};
    ///
    /// let g = UndirGraph::from_labels(["a", "b", "c"]);
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{algo::*, prelude::*};
    ///
    /// let g = DiGraph::from_edges(["a", "b"], [("a", "b")]);
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use fxhash::FxHashSet;
    use itertools::Itertools;

    use super::*;
    use crate::repr::{DiGraph, UndirGraph};

    fn chain_graph() -> UndirGraph {
        let mut graph = UndirGraph::from_labels(["a", "b", "c", "d", "e", "f"]);
        //  / c --- \
        // b          e - d
        //  \ a - f /
        for (u, v) in [("b", "c"), ("b", "a"), ("e", "d"), ("a", "f"), ("c", "e"), ("f", "e")] {
            graph.add_edge(u, v);
        }
        graph
    }

    #[test]
    fn bfs_order() {
        let graph = chain_graph();

        let order = graph.bfs(1).collect_vec();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);
        assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
        assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
        assert_eq!(order[5], 3);
    }

    #[test]
    fn dfs_covers_reachable_nodes_once() {
        let graph = DiGraph::from_edges(
            ["a", "b", "c", "d"],
            [("a", "b"), ("a", "c"), ("b", "c"), ("c", "a")],
        );

        let order = graph.dfs(0).collect_vec();
        assert_eq!(order[0], 0);
        assert_eq!(order.iter().copied().sorted().collect_vec(), [0, 1, 2]);
    }

    #[test]
    fn restart_at_unvisited_sweeps_all_nodes() {
        let graph = DiGraph::from_edges(["a", "b", "c"], [("a", "b")]);

        let mut dfs = graph.dfs(0);
        assert_eq!(dfs.by_ref().collect_vec(), [0, 1]);
        assert!(dfs.try_restart_at_unvisited());
        assert_eq!(dfs.by_ref().collect_vec(), [2]);
        assert!(!dfs.try_restart_at_unvisited());
    }

    #[test]
    fn excluded_nodes_are_not_traversed() {
        let graph = chain_graph();

        let order = graph.bfs(1).with_nodes_excluded([0, 2]).collect_vec();
        assert_eq!(order, [1]);
    }

    #[test]
    fn traversal_with_sparse_visited_set() {
        let graph = chain_graph();

        let dense = graph.bfs(1).collect_vec();
        let sparse = BFSWithSet::<_, FxHashSet<Node>>::new(&graph, 1).collect_vec();
        assert_eq!(dense.len(), sparse.len());
        assert_eq!(
            dense.into_iter().sorted().collect_vec(),
            sparse.into_iter().sorted().collect_vec()
        );
    }
}
