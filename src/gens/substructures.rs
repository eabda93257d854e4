/*!
# Substructure Generators

Utility methods to add common motifs to an already existing graph:

- **Paths**
- **Cycles**
- **Stars**

Every added edge receives the weight produced by the provided closure, so the same motif can be
connected with unit weights (`|| 1`) or random ones (`|| sampler.sample(rng)`).

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = UndirectedGraph::new(6);
g.connect_path([0, 1, 2], || 1);
g.connect_cycle([2, 3, 4], || 2);
g.connect_star(5, [0, 4], || 3);

assert_eq!(
    g.edges().collect::<Vec<_>>(),
    vec![
        WeightedEdge(0, 1, 1), WeightedEdge(1, 2, 1),
        WeightedEdge(2, 3, 2), WeightedEdge(3, 4, 2), WeightedEdge(4, 2, 2),
        WeightedEdge(5, 0, 3), WeightedEdge(5, 4, 3),
    ]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, stars)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    fn connect_path<P, W>(&mut self, nodes_on_path: P, weight: W)
    where
        P: IntoIterator<Item = Node>,
        W: FnMut() -> Weight;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first if there are at least
    ///   three nodes.
    ///   Fewer nodes are connected with a path, so no self-loops or duplicate edges are created.
    fn connect_cycle<C, W>(&mut self, nodes_in_cycle: C, weight: W)
    where
        C: IntoIterator<Item = Node>,
        W: FnMut() -> Weight;

    /// Connects `center` to every given leaf.
    fn connect_star<L, W>(&mut self, center: Node, leaves: L, weight: W)
    where
        L: IntoIterator<Item = Node>,
        W: FnMut() -> Weight;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P, W>(&mut self, nodes_on_path: P, mut weight: W)
    where
        P: IntoIterator<Item = Node>,
        W: FnMut() -> Weight,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v, weight());
        }
    }

    fn connect_cycle<C, W>(&mut self, nodes_in_cycle: C, mut weight: W)
    where
        C: IntoIterator<Item = Node>,
        W: FnMut() -> Weight,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            let mut len = 1;
            for cur in iter {
                self.add_edge(prev, cur, weight());
                prev = cur;
                len += 1;
            }

            if len >= 3 {
                self.add_edge(prev, first, weight());
            }
        }
    }

    fn connect_star<L, W>(&mut self, center: Node, leaves: L, mut weight: W)
    where
        L: IntoIterator<Item = Node>,
        W: FnMut() -> Weight,
    {
        for leaf in leaves {
            self.add_edge(center, leaf, weight());
        }
    }
}
