use crate::algo::ConnectedComponents;

use super::*;

/// A dynamic undirected graph over string labels.
///
/// Storage is a flat neighbor list per node; inserting an edge records both
/// directions explicitly. In contrast to [`DiGraph`](super::DiGraph), an edge
/// whose endpoints were not registered beforehand is **silently ignored**
/// rather than treated as a violated precondition. Use
/// [`UndirGraph::try_add_edge`] when the caller needs to observe the drop.
#[derive(Clone, Default)]
pub struct UndirGraph {
    labels: LabelStore,
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl UndirGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from an initial label sequence; each label receives
    /// the next free dense index
    pub fn from_labels<'a, L>(labels: L) -> Self
    where
        L: IntoIterator<Item = &'a str>,
    {
        let mut graph = Self::new();
        for label in labels {
            graph.add_node(label);
        }
        graph
    }

    /// Registers `label` with the next free index if not already present
    /// (idempotent) and returns its id
    pub fn add_node(&mut self, label: &str) -> Node {
        let (u, added) = self.labels.intern(label);
        if added {
            self.nbs.push(Vec::new());
        }
        u
    }

    /// Adds the undirected edge `{u, v}`, recording both directions in the
    /// flat neighbor lists. If either endpoint is unregistered the call is a
    /// silent no-op.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        self.try_add_edge(u, v);
    }

    /// Like [`UndirGraph::add_edge`] but returns *true* iff the edge was
    /// actually inserted (i.e. both endpoints were registered)
    pub fn try_add_edge(&mut self, u: &str, v: &str) -> bool {
        let (Some(u), Some(v)) = (self.labels.get(u), self.labels.get(v)) else {
            return false;
        };

        let edge = Edge(u, v);
        self.nbs[u as usize].push(v);
        if !edge.is_loop() {
            self.nbs[v as usize].push(u);
        }
        self.num_edges += 1;
        true
    }

    /// Partitions all registered nodes into maximal mutually-reachable
    /// groups. Components are emitted with roots in ascending index order;
    /// every node appears in exactly one component.
    pub fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }
}

impl GraphOrder for UndirGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len()
    }
}

impl GraphEdgeOrder for UndirGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for UndirGraph {
    type NeighborIter<'a> = std::iter::Copied<std::slice::Iter<'a, Node>>;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl GraphLabels for UndirGraph {
    fn node_of(&self, label: &str) -> Option<Node> {
        self.labels.get(label)
    }

    fn label_of(&self, u: Node) -> &str {
        self.labels.label(u)
    }

    fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter()
    }
}
