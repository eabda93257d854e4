/*!
# Shortest Paths

Dijkstra's algorithm on non-negatively weighted graphs.

The graphs in question have tens of nodes, so the next node is selected by a linear scan over
all unvisited nodes. This keeps the tie-break explicit: among all unvisited nodes of minimum
tentative distance, the one with the lowest id is settled first.
*/

use log::trace;

use super::{trace::reconstruct_path, *};

/// Single-source shortest paths computed by [`ShortestPath::dijkstra`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: Node,
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<Node>>,
    trace: Trace,
}

impl ShortestPathTree {
    /// Returns the source of all paths
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the length of a shortest path to `u`,
    /// `None` if `u` is unreachable or does not belong to the graph.
    pub fn distance_to(&self, u: Node) -> Option<Distance> {
        self.distances.get(u as usize).copied().flatten()
    }

    /// Returns the distances to all nodes
    pub fn distances(&self) -> &[Option<Distance>] {
        &self.distances
    }

    /// Returns the predecessor of `u` on its shortest path;
    /// `None` for the source, unreachable nodes and nodes outside the graph
    pub fn predecessor_of(&self, u: Node) -> Option<Node> {
        self.predecessors.get(u as usize).copied().flatten()
    }

    /// Returns a shortest path from the source to `target`; empty if `target` is unreachable.
    /// Rejects nodes that do not belong to the graph.
    pub fn path_to(&self, target: Node) -> Result<Vec<Node>> {
        check_node(target, self.distances.len() as NumNodes)?;
        Ok(reconstruct_path(
            self.source,
            target,
            |u| self.predecessors[u as usize],
            self.distances[target as usize].is_some(),
        ))
    }

    /// One step per settled node in order of settlement
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Consumes the tree and returns its trace
    pub fn into_trace(self) -> Trace {
        self.trace
    }
}

/// Shortest-path queries on weighted graphs
pub trait ShortestPath: AdjacencyList {
    /// Computes shortest paths from `source` to all nodes.
    ///
    /// Each settled node produces one trace step containing all tentative distances and
    /// predecessors at that moment.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(3, [(0, 1, 5), (1, 2, 1), (0, 2, 9)]);
    /// let tree = g.dijkstra(0).unwrap();
    ///
    /// assert_eq!(tree.distance_to(2), Some(6));
    /// assert_eq!(tree.path_to(2).unwrap(), vec![0, 1, 2]);
    /// ```
    fn dijkstra(&self, source: Node) -> Result<ShortestPathTree> {
        let n = self.number_of_nodes();
        check_node(source, n)?;

        let mut recorder = TraceRecorder::new(n);
        recorder.set_distance(source, 0);

        loop {
            // lowest id wins among equal distances as `min_by_key` returns the first minimum
            let Some((u, du)) = self
                .vertices()
                .filter(|&u| !recorder.is_visited(u))
                .filter_map(|u| recorder.distance(u).map(|d| (u, d)))
                .min_by_key(|&(_, d)| d)
            else {
                break;
            };

            recorder.visit(u);
            trace!("dijkstra settles node {u} at distance {du}");

            for (v, w) in self.weighted_neighbors_of(u) {
                if recorder.is_visited(v) {
                    continue;
                }

                let candidate = du + w as Distance;
                if recorder.distance(v).is_none_or(|dv| candidate < dv) {
                    recorder.set_distance(v, candidate);
                    recorder.set_predecessor(v, u);
                }
            }
        }

        let distances = self.vertices().map(|u| recorder.distance(u)).collect();
        let predecessors = self.vertices().map(|u| recorder.predecessor(u)).collect();

        Ok(ShortestPathTree {
            source,
            distances,
            predecessors,
            trace: recorder.into_trace(),
        })
    }

    /// Returns the length of a shortest path from `source` to `target` and the path itself.
    /// Unreachable targets yield `(None, vec![])`.
    fn shortest_path(&self, source: Node, target: Node) -> Result<(Option<Distance>, Vec<Node>)> {
        check_node(target, self.number_of_nodes())?;
        let tree = self.dijkstra(source)?;
        Ok((tree.distance_to(target), tree.path_to(target)?))
    }
}

impl<G: AdjacencyList> ShortestPath for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn unit_square() {
        let graph = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let tree = graph.dijkstra(0).unwrap();

        assert_eq!(tree.distances(), &[Some(0), Some(1), Some(2), Some(1)]);
        assert_eq!(tree.path_to(2).unwrap(), vec![0, 1, 2]);
        assert_eq!(tree.trace().order().collect_vec(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn steps_carry_tentative_distances() {
        // 0 -5- 1 -1- 2
        //  \---- 9 ---/
        let graph = UndirectedGraph::from_edges(3, [(0, 1, 5), (1, 2, 1), (0, 2, 9)]);
        let tree = graph.dijkstra(0).unwrap();
        let trace = tree.trace();

        assert_eq!(trace.len(), 3);
        let first = trace.get(0).unwrap();
        assert_eq!(first.current(), 0);
        assert_eq!(first.state_of(0).distance(), Some(0));
        assert_eq!(first.state_of(2).distance(), None);

        let second = trace.get(1).unwrap();
        assert_eq!(second.current(), 1);
        assert_eq!(second.state_of(2).distance(), Some(9));
        assert_eq!(second.state_of(2).predecessor(), Some(0));

        let third = trace.get(2).unwrap();
        assert_eq!(third.state_of(2).distance(), Some(6));
        assert_eq!(third.state_of(2).predecessor(), Some(1));
    }

    #[test]
    fn unreachable() {
        let graph = UndirectedGraph::from_edges(4, [(0, 1, 3), (2, 3, 1)]);
        let tree = graph.dijkstra(1).unwrap();
        assert_eq!(tree.distance_to(0), Some(3));
        assert_eq!(tree.distance_to(3), None);
        assert!(tree.path_to(3).unwrap().is_empty());
        assert_eq!(tree.trace().len(), 2);
        assert_eq!(graph.shortest_path(0, 2).unwrap(), (None, vec![]));
    }

    #[test]
    fn directed_respects_orientation() {
        let graph = DirectedGraph::from_edges(3, [(0, 1, 2), (2, 1, 1), (1, 2, 7)]);
        assert_eq!(graph.shortest_path(0, 2).unwrap(), (Some(9), vec![0, 1, 2]));
        assert_eq!(graph.shortest_path(2, 0).unwrap(), (None, vec![]));
    }

    #[test]
    fn zero_weights() {
        let graph = UndirectedGraph::from_edges(3, [(0, 1, 0), (1, 2, 0)]);
        assert_eq!(graph.shortest_path(0, 2).unwrap(), (Some(0), vec![0, 1, 2]));
    }

    #[test]
    fn out_of_range() {
        let graph = UndirectedGraph::from_edges(2, [(0, 1)]);
        assert!(graph.dijkstra(2).is_err());
        assert!(graph.shortest_path(0, 5).is_err());
        assert!(graph.dijkstra(0).unwrap().path_to(2).is_err());
    }

    #[test]
    fn accessors_tolerate_unknown_nodes() {
        let graph = UndirectedGraph::from_edges(2, [(0, 1, 4)]);
        let tree = graph.dijkstra(0).unwrap();

        assert_eq!(tree.distance_to(1), Some(4));
        assert_eq!(tree.predecessor_of(1), Some(0));
        assert_eq!(tree.distance_to(5), None);
        assert_eq!(tree.predecessor_of(5), None);
        assert_eq!(tree.predecessor_of(0), None);
    }

    #[test]
    fn matches_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        for n in 2..=8 {
            for _ in 0..20 {
                let graph = random_graph(rng, n, 0.4, 9);
                for s in graph.vertices() {
                    let tree = graph.dijkstra(s).unwrap();
                    assert_eq!(
                        tree.distances(),
                        brute_force_distances(&graph, s).as_slice()
                    );

                    for t in graph.vertices() {
                        let path = tree.path_to(t).unwrap();
                        let length: Option<Distance> = (!path.is_empty()).then(|| {
                            path.iter()
                                .tuple_windows()
                                .map(|(&u, &v)| graph.edge_weight(u, v).unwrap() as Distance)
                                .sum()
                        });
                        assert_eq!(length, tree.distance_to(t));
                    }
                }
            }
        }
    }
}
