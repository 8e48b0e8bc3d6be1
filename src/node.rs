/*!
# Node Representation

Labels are interned to dense node ids on insertion (see [`LabelStore`](crate::repr::LabelStore)).
We choose `Node = u32` for these ids as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space as compared to `usize`/`u64` and (2) index per-node bookkeeping
arrays directly without abstracting over the id type.
*/

use stream_bitset::bitset::BitSetImpl;

/// Dense node ids range from `0` to `n - 1` in label-insertion order
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
