/*!
# Connectivity and Structural Predicates

Connected components, cycle detection and degree sequences of undirected graphs.
*/

use std::iter::FusedIterator;

use itertools::Itertools;

use super::{traversal::*, *};

/// Structural predicates on undirected graphs
pub trait Connectivity: AdjacencyList + GraphType<Dir = Undirected> + Sized {
    /// Returns an iterator over the connected components of the graph.
    /// Components are emitted in order of their lowest node; nodes within a component in BFS order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(5, [(0, 3), (1, 2)]);
    /// let ccs: Vec<_> = g.connected_components().collect();
    ///
    /// assert_eq!(ccs, vec![vec![0, 3], vec![1, 2], vec![4]]);
    /// ```
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components
    fn number_of_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }

    /// Returns *true* if every node is reachable from every other node.
    /// The empty graph is considered connected.
    fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        self.bfs(0).count() == self.len()
    }

    /// Returns *true* if the graph contains a cycle; a self-loop is a cycle of length 1.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    /// assert!(!g.has_cycle());
    ///
    /// g.add_edge(3, 1, 1);
    /// assert!(g.has_cycle());
    /// ```
    fn has_cycle(&self) -> bool {
        let mut visited = self.vertex_bitset_unset();
        let mut stack: Vec<(Node, Node)> = Vec::new();

        for start in self.vertices() {
            if visited.set_bit(start) {
                continue;
            }

            stack.push((start, INVALID_NODE));
            while let Some((u, parent)) = stack.pop() {
                for v in self.neighbors_of(u) {
                    if v == parent {
                        continue;
                    }
                    if visited.set_bit(v) {
                        return true;
                    }
                    stack.push((v, u));
                }
            }
        }

        false
    }

    /// Returns *true* if the graph is a tree, i.e. connected and acyclic.
    fn is_tree(&self) -> bool {
        self.is_connected() && !self.has_cycle()
    }

    /// Returns the degrees of all nodes sorted in descending order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let star = UndirectedGraph::from_edges(4, [(0, 1), (0, 2), (0, 3)]);
    /// assert_eq!(star.degree_sequence(), vec![3, 1, 1, 1]);
    /// ```
    fn degree_sequence(&self) -> Vec<NumNodes> {
        self.degrees().sorted_unstable_by(|a, b| b.cmp(a)).collect()
    }

    /// Returns *true* if both graphs have the same degree sequence,
    /// a necessary condition for isomorphism.
    fn has_same_degree_sequence<O>(&self, other: &O) -> bool
    where
        O: Connectivity,
    {
        self.number_of_nodes() == other.number_of_nodes()
            && self.degree_sequence() == other.degree_sequence()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + GraphType<Dir = Undirected> + Sized {}

/// Iterator over the connected components of an undirected graph
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<'a, G> Iterator for ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                self.bfs = None;
                return None;
            }
        }
    }
}

impl<'a, G> FusedIterator for ConnectedComponents<'a, G> where
    G: AdjacencyList + GraphType<Dir = Undirected>
{
}
