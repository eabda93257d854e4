/*!
# Graph Algorithms

This module provides the **graph algorithms** of the crate, built on top of the graph representations in [`crate::repr`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, shortest paths, spanning trees, topological sorting, matching, and structural predicates.

Algorithms that are meant to be replayed step by step return a [`Trace`]: one [`TraceStep`] per
processed node, each holding a full snapshot of the per-vertex state at that moment.
*/

mod bipartite;
mod connectivity;
mod matching;
mod shortest_path;
mod spanning_tree;
mod topological;
mod trace;
mod traversal;
mod union_find;

use crate::{error::*, prelude::*};
use trace::TraceRecorder;

pub use bipartite::*;
pub use connectivity::*;
pub use matching::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use topological::*;
pub use trace::{Trace, TraceStep, VertexState};
pub use traversal::*;
pub use union_find::*;
