/*!
# Graph Representations

Both representations keep one adjacency array per node holding `(neighbor, weight)` pairs
in insertion order, plus the list of edges in insertion order.

- [`UndirectedGraph`] stores every edge `{u, v}` in the neighborhoods of both endpoints with identical weight.
- [`DirectedGraph`] stores edges only in the neighborhood of their source and tracks the in-degree of every node.

The graph instances in this crate are small (tens of nodes) so adjacency tests are linear scans.
*/

use crate::{edge::*, node::*, ops::*};

mod directed;
mod undirected;

pub use directed::*;
pub use undirected::*;

/// Neighborhood of a node: `(neighbor, weight)` pairs in insertion order
pub type WeightedNeighborhood = Vec<(Node, Weight)>;

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident => $nbs:ident, $directed:ident) => {
            impl GraphType for $struct {
                type Dir = $directed;
            }

            impl GraphNodeOrder for $struct {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }
            }

            impl GraphEdgeOrder for $struct {
                fn number_of_edges(&self) -> NumEdges {
                    self.edge_list.len() as NumEdges
                }

                fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
                    self.edge_list.iter().copied()
                }
            }

            impl AdjacencyList for $struct {
                fn weighted_neighbors_of(
                    &self,
                    u: Node,
                ) -> impl Iterator<Item = (Node, Weight)> + '_ {
                    self.$nbs[u as usize].iter().copied()
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$nbs[u as usize].len() as NumNodes
                }
            }

            impl AdjacencyTest for $struct {
                fn edge_weight(&self, u: Node, v: Node) -> Option<Weight> {
                    assert!(v < self.number_of_nodes());
                    self.$nbs[u as usize]
                        .iter()
                        .find_map(|&(x, w)| (x == v).then_some(w))
                }
            }

            impl std::fmt::Debug for $struct {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.debug_struct(stringify!($struct))
                        .field("n", &self.number_of_nodes())
                        .field("edges", &self.edge_list)
                        .finish()
                }
            }
        };
    }

    pub(super) use impl_common_graph_ops;
}
