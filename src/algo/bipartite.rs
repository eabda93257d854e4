/*!
# Bipartite Graphs

Functionality includes:
- Representing a bipartition of the node set as a [`NodeBitSet`]
- Testing whether a candidate partition is a valid bipartition
- Computing a bipartition by 2-colouring every connected component with BFS
*/

use super::{traversal::*, *};

/// A bipartition of the node set.
///
/// - Nodes in the set are considered to be on the **right** (1) side
/// - Nodes not in the set are considered to be on the **left** (0) side
pub trait Bipartition {
    /// Returns `true` if the node is on the right (1) side of the partition.
    fn is_on_right_side(&self, u: Node) -> bool;

    /// Returns `true` if the node is on the left (0) side of the partition.
    fn is_on_left_side(&self, u: Node) -> bool {
        !self.is_on_right_side(u)
    }
}

impl Bipartition for NodeBitSet {
    #[inline]
    fn is_on_right_side(&self, u: Node) -> bool {
        self.get_bit(u)
    }
}

impl Bipartition for [bool] {
    #[inline]
    fn is_on_right_side(&self, u: Node) -> bool {
        self[u as usize]
    }
}

/// Testing and computing bipartitions of undirected graphs
pub trait BipartiteTest: AdjacencyList + GraphType<Dir = Undirected> {
    /// Tests whether the given candidate partition is a valid bipartition,
    /// i.e. every edge has one endpoint on each side. Self-loops always violate it.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    ///
    /// assert!(g.is_bipartition(&NodeBitSet::new_with_bits_set(4, [1 as Node, 3])));
    /// assert!(!g.is_bipartition(&NodeBitSet::new_with_bits_set(4, [1 as Node, 2])));
    /// ```
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition + ?Sized,
    {
        self.vertices().all(|u| {
            let side = bipartition.is_on_right_side(u);
            self.neighbors_of(u)
                .all(|v| bipartition.is_on_right_side(v) != side)
        })
    }

    /// Computes a valid bipartition of the graph, if one exists.
    /// Returns `None` if the graph is not bipartite.
    ///
    /// Every component is coloured starting with its lowest node on the left side.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(5, [(0, 1), (1, 2), (3, 4)]);
    ///
    /// let bip = g.compute_bipartition().unwrap();
    /// assert_eq!(bip.iter_set_bits().collect::<Vec<_>>(), vec![1, 4]);
    /// ```
    fn compute_bipartition(&self) -> Option<NodeBitSet> {
        let bipartition = propose_possibly_illegal_bipartition(self);
        self.is_bipartition(&bipartition).then_some(bipartition)
    }

    /// Tests whether the graph is bipartite.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let square = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
    /// let triangle = UndirectedGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    ///
    /// assert!(square.is_bipartite());
    /// assert!(!triangle.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList + GraphType<Dir = Undirected> {}

/// Computes a candidate bipartition of the graph using BFS traversal.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition is invalid
fn propose_possibly_illegal_bipartition<G>(graph: &G) -> NodeBitSet
where
    G: AdjacencyList,
{
    let mut bipartition = graph.vertex_bitset_unset();
    if graph.is_empty() {
        return bipartition;
    }

    let mut bfs = graph.bfs_with_predecessor(0);
    loop {
        for (node, pred) in bfs
            .by_ref()
            .filter_map(|x| Some((x.item(), x.predecessor()?)))
        {
            if !bipartition.get_bit(pred) {
                bipartition.set_bit(node);
            }
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    bipartition
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn path() {
        for n in 1..10 {
            let graph = UndirectedGraph::from_edges(n, (0..n - 1).map(|u| (u, u + 1)));
            assert!(graph.is_bipartite());

            if n > 2 {
                // closing the path into an odd cycle
                let mut graph = graph.clone();
                graph.add_edge(1 - (n % 2), n - 1, 1);
                assert!(!graph.is_bipartite());
            }
        }
    }

    #[test]
    fn odd_cycle_in_second_component() {
        let graph = UndirectedGraph::from_edges(5, [(0, 1), (2, 3), (3, 4), (4, 2)]);
        assert!(graph.compute_bipartition().is_none());
    }

    #[test]
    fn isolated_nodes_and_empty_graph() {
        let graph = UndirectedGraph::new(3);
        assert_eq!(graph.compute_bipartition().unwrap().cardinality(), 0);
        assert!(UndirectedGraph::new(0).is_bipartite());
    }

    #[test]
    fn self_loop() {
        let graph = UndirectedGraph::from_edges(2, [(0, 1), (1, 1)]);
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn slice_bipartition() {
        let graph = UndirectedGraph::from_edges(3, [(0, 1), (1, 2)]);
        assert!(graph.is_bipartition([false, true, false].as_slice()));
        assert!(!graph.is_bipartition([false, false, true].as_slice()));
    }

    #[test]
    fn computed_bipartitions_are_valid() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);
        for n in 1..12 {
            for _ in 0..20 {
                let graph = random_graph(rng, n, 0.2, 1);
                if let Some(bip) = graph.compute_bipartition() {
                    assert!(graph.is_bipartition(&bip));
                }
            }
        }
    }
}
