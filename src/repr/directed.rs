use super::*;

/// A directed graph over string labels storing **both forward and reverse
/// neighborhoods**, maintained in lock-step.
///
/// - Nodes are registered explicitly via [`DiGraph::add_node`] (idempotent)
///   and receive dense ids in insertion order.
/// - Edges are directed, may be parallel, and are never deduplicated; their
///   per-node insertion order is preserved.
/// - Edge endpoints must be registered beforehand: [`DiGraph::add_edge`]
///   treats an unknown label as a violated precondition and panics. This is
///   deliberately stricter than [`UndirGraph`](super::UndirGraph), which
///   ignores such edges.
#[derive(Clone, Default)]
pub struct DiGraph {
    labels: LabelStore,
    out_nbs: Vec<Vec<Node>>,
    in_nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl DiGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from a label sequence and an edge sequence.
    /// All edge endpoints must appear in `labels`.
    pub fn from_edges<'a, L, E>(labels: L, edges: E) -> Self
    where
        L: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut graph = Self::new();
        for label in labels {
            graph.add_node(label);
        }
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Registers `label` and returns its dense id. Idempotent: adding a known
    /// label is a no-op that returns the previously assigned id and leaves
    /// all adjacency untouched.
    pub fn add_node(&mut self, label: &str) -> Node {
        let (u, added) = self.labels.intern(label);
        if added {
            self.out_nbs.push(Vec::new());
            self.in_nbs.push(Vec::new());
        }
        u
    }

    /// Adds the directed edge `(u, v)`, appending `v` to `u`'s out-list and
    /// `u` to `v`'s in-list. Parallel edges and self-loops are allowed.
    /// ** Panics if either label was never registered via `add_node` **
    pub fn add_edge(&mut self, u: &str, v: &str) {
        let u = self.expect_node(u);
        let v = self.expect_node(v);
        self.add_edge_ids(u, v);
    }

    /// Id-level variant of [`DiGraph::add_edge`].
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_edge_ids(&mut self, u: Node, v: Node) {
        assert!((v as usize) < self.in_nbs.len());
        self.out_nbs[u as usize].push(v);
        self.in_nbs[v as usize].push(u);
        self.num_edges += 1;
    }

    /// Adds all edges in the collection.
    /// ** Panics if any endpoint label is unregistered **
    pub fn add_edges<'a, E>(&mut self, edges: E)
    where
        E: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    fn expect_node(&self, label: &str) -> Node {
        match self.labels.get(label) {
            Some(u) => u,
            None => panic!("unknown node label `{label}` (must be added via add_node first)"),
        }
    }
}

impl GraphOrder for DiGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len()
    }
}

impl GraphEdgeOrder for DiGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for DiGraph {
    type NeighborIter<'a> = std::iter::Copied<std::slice::Iter<'a, Node>>;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.out_nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].len() as NumNodes
    }
}

impl DirectedAdjacencyList for DiGraph {
    type InNeighborIter<'a> = std::iter::Copied<std::slice::Iter<'a, Node>>;

    fn in_neighbors_of(&self, u: Node) -> Self::InNeighborIter<'_> {
        self.in_nbs[u as usize].iter().copied()
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_nbs[u as usize].len() as NumNodes
    }
}

impl GraphLabels for DiGraph {
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
