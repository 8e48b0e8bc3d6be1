use std::ops::Range;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in label-insertion order
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// Parallel edges are counted individually.
    fn number_of_edges(&self) -> NumEdges;
}

/// Trait pertaining getters for neighborhoods & edges.
///
/// For directed graphs, `neighbors_of` is equivalent to `out_neighbors_of`.
pub trait AdjacencyList: GraphOrder + Sized {
    /// Iterator over the neighborhood of a single vertex.
    /// A named type (rather than `impl Iterator`) so that algorithms can
    /// store live neighbor iterators inside explicit stack frames.
    type NeighborIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over the (open) neighborhood of a given vertex
    /// in edge-insertion order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Returns the number of (outgoing) neighbors of `u`.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u))
    }
}

macro_rules! propagate {
    ($out_fn:ident => $fn:ident($($arg:ident : $type:ty),*) -> $ret:ty) => {
        #[inline]
        fn $out_fn(&self, $($arg: $type),*) -> $ret {
            self.$fn($($arg),*)
        }
    };
}

/// Extends [`AdjacencyList`] with access to the reverse adjacency of a
/// directed graph, which is maintained in lock-step with the forward one.
pub trait DirectedAdjacencyList: AdjacencyList {
    propagate!(out_neighbors_of => neighbors_of(u: Node) -> Self::NeighborIter<'_>);
    propagate!(out_degree_of => degree_of(u: Node) -> NumNodes);

    /// Iterator over the in-neighborhood of a single vertex
    type InNeighborIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over nodes `v` with edges `(v, u)`.
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> Self::InNeighborIter<'_>;

    /// Returns the number of incoming neighbors of a given vertex.
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns the out-degree and in-degree of a given vertex.
    /// ** Panics if `u >= n` **
    #[inline]
    fn total_degree_of(&self, u: Node) -> NumNodes {
        self.out_degree_of(u) + self.in_degree_of(u)
    }

    /// Returns an iterator over all neighbors of `u` ignoring edge direction,
    /// i.e. the out-neighbors followed by the in-neighbors. This simulates an
    /// undirected traversal step without materializing an undirected graph.
    /// A node `v` appears twice if both `(u, v)` and `(v, u)` exist.
    /// ** Panics if `u >= n` **
    fn undirected_neighbors_of(
        &self,
        u: Node,
    ) -> std::iter::Chain<Self::NeighborIter<'_>, Self::InNeighborIter<'_>> {
        self.out_neighbors_of(u).chain(self.in_neighbors_of(u))
    }
}

/// Label access shared by all graph representations in this crate.
///
/// Nodes enter a graph as string labels and are assigned dense [`Node`] ids
/// in insertion order; this trait is the bridge between the two worlds.
pub trait GraphLabels {
    /// Returns the dense id assigned to `label`, if it was ever added
    fn node_of(&self, label: &str) -> Option<Node>;

    /// Returns the label interned for a given node id.
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> &str;

    /// Returns an iterator over all labels in insertion order
    fn labels(&self) -> impl Iterator<Item = &str> + '_;

    /// Returns *true* if `label` was added to the graph
    fn has_node(&self, label: &str) -> bool {
        self.node_of(label).is_some()
    }

    /// Resolves a slice of dense ids (e.g. one component emitted by an
    /// algorithm) back to labels
    fn labels_of(&self, nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(|&u| self.label_of(u)).collect()
    }
}
