/*!
`lgraphs` is a graph data structure & algorithms library designed for graphs that are
- **l**abelled : Nodes enter the graph as string labels and are mapped to dense ids `0` to `n - 1`
- **l**ightweight : Flat adjacency vectors, no edge payloads, no node weights
- **l**azily analyzed : Components are computed on demand and emitted one at a time via iterators

# Representation

Internally we represent **nodes** as `u32` in the range `0..n` where `n` is the number of labels added so far.
Labels are interned exactly once; adding a known label again is a no-op that returns the existing id.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` over the dense ids.

### Directed vs Undirected

We support both **directed** and **undirected** graphs:

- [`DiGraph`](crate::repr::DiGraph) stores out- and in-neighbors of every node in lock-step, so reverse
  traversal is as cheap as forward traversal. Adding an edge with an unknown endpoint is a programming
  error and panics.
- [`UndirGraph`](crate::repr::UndirGraph) stores a single flat neighbor list per node and records both
  directions of every inserted edge. Edges with unknown endpoints are dropped silently (use
  `try_add_edge` to observe the drop).

Parallel edges and self-loops are kept as given; no deduplication happens on insertion.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and both graph representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as DFS/BFS
  (`graph.dfs(start_node)`), strongly/weakly connected component iterators, and DFS-based
  topological sorting (plain and cycle-checked),
- [`utils`] includes helper traits such as the visited-[`Set`](crate::utils::Set) abstraction
  shared by the traversal machinery.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

# When to use
You should only use this library if the following apply:
- Your nodes are identified by strings but your algorithms should run on dense integer ids
- You build graphs incrementally and ask for components/orderings in between
- You require only basic functionality for graphs

In all other cases, it might make sense for you to check out [petgraph](https://crates.io/crates/petgraph) who provide a more extensive library for general graphs in *Rust*.
*/

pub mod algo;
pub mod edge;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;

/// `lgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as both implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
