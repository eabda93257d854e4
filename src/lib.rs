/*!
`wgraphs` is a small weighted graph library that generates and analyzes the graph instances
behind interactive graph puzzles: shortest paths, spanning trees, topological orders,
mazes and matchings.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use the tuple-structs `Edge(Node, Node)` and `WeightedEdge(Node, Node, Weight)`.
Unweighted edges carry the [`DEFAULT_WEIGHT`](crate::edge::DEFAULT_WEIGHT) of `1`.

### Directed vs Undirected

- In an [`UndirectedGraph`](crate::repr::UndirectedGraph), `{u, v}` is stored in both neighborhoods
  with identical weight.
- In a [`DirectedGraph`](crate::repr::DirectedGraph), the edge `(u, v)` has orientation; in-degrees
  are tracked for topological sorting.

Neighborhoods are kept in insertion order, which makes every traversal and every recorded trace
deterministic.

# Design

Generators are configurable structs (*Builder* pattern) that draw from a caller-provided random
number generator, so a fixed seed reproduces a level exactly.
Algorithms are implemented via traits on the graph itself. Where a game animates an algorithm,
a variant returns a [`Trace`](crate::algo::Trace): one snapshot of every vertex per step.
Rejected operations (unknown nodes, unavailable vertices) are returned as
[`GraphError`](crate::error::GraphError).

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and both graph representations,
- [`algo`] includes algorithm traits such as BFS/DFS (`graph.bfs_trace(s, t)`), Dijkstra, Kruskal,
  topological sorting, bipartite checks and matchings,
- [`gens`] includes the level generators (cycles, wheels, clustered graphs, grids, layered DAGs, mazes
  and bipartite instances) as well as their difficulty scaling [`GenConfig`](crate::gens::GenConfig),
- [`error`] includes the [`GraphError`](crate::error::GraphError) returned by rejected operations.

In most use-cases, `use wgraphs::{prelude::*, algo::*, gens::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as both representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
