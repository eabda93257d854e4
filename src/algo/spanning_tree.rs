/*!
# Minimum Spanning Trees

Kruskal's algorithm on top of [`UnionFind`].

Edges are sorted by ascending weight with a *stable* sort, so edges of equal weight are
considered in the order they were inserted into the graph. On disconnected graphs the
result is a minimum spanning *forest* with fewer than `n - 1` edges.
*/

use log::trace;

use super::*;

/// Outcome of considering one edge during Kruskal's algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KruskalDecision {
    /// The edge under consideration
    pub edge: WeightedEdge,
    /// *true* if the edge joined two components and became part of the forest
    pub accepted: bool,
}

/// Minimum spanning forest computed by [`MinimumSpanningTree::minimum_spanning_tree`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningForest {
    /// Number of nodes of the input graph
    pub number_of_nodes: NumNodes,
    /// Accepted edges in order of acceptance
    pub edges: Vec<WeightedEdge>,
    /// Sum of the weights of all accepted edges
    pub total_weight: Distance,
    /// Every considered edge in order of consideration
    pub decisions: Vec<KruskalDecision>,
}

impl SpanningForest {
    /// Returns *true* if the forest connects all nodes, i.e. has exactly `n - 1` edges
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() as NumNodes + 1 == self.number_of_nodes.max(1)
    }
}

/// Kruskal's algorithm and the interactive cycle check
pub trait MinimumSpanningTree: AdjacencyList + GraphEdgeOrder + GraphType<Dir = Undirected> {
    /// Computes a minimum spanning forest.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(3, [(0, 1, 4), (1, 2, 2), (0, 2, 3)]);
    /// let mst = g.minimum_spanning_tree();
    ///
    /// assert!(mst.is_spanning_tree());
    /// assert_eq!(mst.total_weight, 5);
    /// assert_eq!(mst.edges, vec![WeightedEdge(1, 2, 2), WeightedEdge(0, 2, 3)]);
    /// ```
    fn minimum_spanning_tree(&self) -> SpanningForest {
        let n = self.number_of_nodes();
        let mut edges: Vec<WeightedEdge> = self.edges().collect();
        edges.sort_by_key(|e| e.weight());

        let mut uf = UnionFind::new(n);
        let mut forest = SpanningForest {
            number_of_nodes: n,
            edges: Vec::with_capacity(n.saturating_sub(1) as usize),
            total_weight: 0,
            decisions: Vec::new(),
        };

        for edge in edges {
            if forest.edges.len() + 1 >= n as usize {
                break;
            }

            let accepted = uf.union(edge.0, edge.1);
            trace!("kruskal considers {edge}: accepted = {accepted}");

            forest.decisions.push(KruskalDecision { edge, accepted });
            if accepted {
                forest.edges.push(edge);
                forest.total_weight += edge.weight() as Distance;
            }
        }

        forest
    }

    /// Returns *true* if adding `{u, v}` to the already `chosen` edges closes a cycle.
    /// Rejects nodes that do not belong to the graph.
    fn would_create_cycle<'a, I>(&self, chosen: I, u: Node, v: Node) -> Result<bool>
    where
        I: IntoIterator<Item = &'a WeightedEdge>,
    {
        let n = self.number_of_nodes();
        check_node(u, n)?;
        check_node(v, n)?;

        let mut uf = UnionFind::new(n);
        for e in chosen {
            check_node(e.0, n)?;
            check_node(e.1, n)?;
            uf.union(e.0, e.1);
        }

        Ok(uf.same_set(u, v))
    }
}

impl<G> MinimumSpanningTree for G where
    G: AdjacencyList + GraphEdgeOrder + GraphType<Dir = Undirected>
{
}
