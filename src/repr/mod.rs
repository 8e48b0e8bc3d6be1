/*!
# Graph Representations

This module defines the two **string-labelled** graph storage backends:

- [`DiGraph`] : a directed graph keeping forward and reverse adjacency in
  lock-step; edges may only connect previously registered labels.
- [`UndirGraph`] : a dynamic undirected graph where edges with unknown
  endpoints are silently ignored.

Both intern labels through a shared [`LabelStore`], assigning dense [`Node`]
ids in insertion order. All algorithms in [`algo`](crate::algo) operate on
those dense ids; [`GraphLabels`](crate::ops::GraphLabels) resolves them back.
*/

use crate::{edge::*, node::*, ops::*};

mod directed;
mod labels;
mod undirected;

pub use directed::*;
pub use labels::*;
pub use undirected::*;
