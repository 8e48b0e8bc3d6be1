/*!
# Graph Algorithms

This module provides the **component and ordering algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversal, connectivity, and topological sorting routines.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.

All traversals use explicit stacks or queues on the heap, so even degenerate inputs (say, a single
directed cycle over hundreds of thousands of nodes) cannot overflow the call stack.
*/

mod connectivity;
mod toposort;
mod traversal;

use crate::{prelude::*, utils::*};

pub use connectivity::*;
pub use toposort::*;
pub use traversal::*;
