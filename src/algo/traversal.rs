/*!
Graph traversal algorithms.

This module provides:
- Lazy traversal iterators (BFS and DFS, BFS also with predecessor tracking) used
  by the structural predicates.
- Traced searches ([`TracedSearch`]) that record one [`TraceStep`] per processed node
  and reconstruct the path to a target. These drive the step-by-step animations.
- A high-level `Traversal` trait that exposes both directly as methods on graphs.
*/

use log::trace;

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// *true* if the most recently pushed item is popped first
    const LIFO: bool;

    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    const LIFO: bool = false;

    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    const LIFO: bool = true;

    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic lazy traversal iterator supporting BFS and DFS variants.
///
/// Nodes are marked as visited when they are pushed into the frontier, so every
/// reachable node is yielded exactly once. Neighbors are pushed in adjacency order.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.set_bit(v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(
                self.graph.len() - self.visited.cardinality() as usize
                    + self.sequencer.cardinality(),
            ),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let visited = NodeBitSet::new_with_bits_set(graph.number_of_nodes(), [start]);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            stop_at: None,
            _item: PhantomData,
        }
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.graph.vertices().find(|&u| !self.visited.get_bit(u)) {
            None => false,
            Some(x) => {
                self.visited.set_bit(x);
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }

    /// Sets a stopper node.
    /// If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.stop_at = Some(stopper);
        self
    }

    /// Consumes the search and returns *true* iff `u` can be reached from the start node
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        self.any(|v| v.item() == u)
    }
}

/// Result of a traced BFS/DFS run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalOutcome {
    /// One step per processed node in processing order
    pub trace: Trace,
    /// Path from source to target; empty if the target was not reached
    pub path: Vec<Node>,
}

impl TraversalOutcome {
    /// Returns *true* if the target was reached
    pub fn reached_target(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the reconstructed path, `None` if the target was not reached
    pub fn hops(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Traversal from a source to a target that records a [`TraceStep`] per processed node.
///
/// In contrast to [`TraversalSearch`], nodes are marked visited when they are *popped*:
/// - a node is processed at most once; later copies in the frontier are skipped,
/// - the step of a node is recorded before its neighbors are examined,
/// - for queues (BFS) neighbors are pushed in ascending id order,
/// - for stacks (DFS) neighbors are pushed in descending id order,
///   so the lowest id is explored first,
/// - the search stops right after the step of the target.
///
/// These fixed tie-breaks make traces reproducible for a given graph.
pub struct TracedSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
{
    graph: &'a G,
    source: Node,
    target: Node,
    sequencer: S,
    recorder: TraceRecorder,
}

/// Traced breadth-first search
pub type TracedBFS<'a, G> = TracedSearch<'a, G, VecDeque<PredecessorOfNode>>;

/// Traced depth-first search
pub type TracedDFS<'a, G> = TracedSearch<'a, G, Vec<PredecessorOfNode>>;

impl<'a, G, S> TracedSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
{
    /// Prepares a search from `source` to `target`.
    /// Rejects nodes that do not belong to the graph.
    pub fn new(graph: &'a G, source: Node, target: Node) -> Result<Self> {
        check_node(source, graph.number_of_nodes())?;
        check_node(target, graph.number_of_nodes())?;

        Ok(Self {
            graph,
            source,
            target,
            sequencer: S::init(PredecessorOfNode::new_without_predecessor(source)),
            recorder: TraceRecorder::new(graph.number_of_nodes()),
        })
    }

    /// Runs the search to completion
    pub fn run(mut self) -> TraversalOutcome {
        while let Some(item) = self.sequencer.pop() {
            let u = item.item();
            if self.recorder.is_visited(u) {
                continue;
            }

            let depth = match item.predecessor() {
                Some(p) => {
                    self.recorder.set_predecessor(u, p);
                    self.recorder.distance(p).map_or(0, |d| d + 1)
                }
                None => 0,
            };
            self.recorder.set_distance(u, depth);
            self.recorder.visit(u);
            trace!("traversal processes node {u} at depth {depth}");

            if u == self.target {
                break;
            }

            let neighbors = self.graph.ordered_neighbors_of(u);
            let pending = |v: &Node| !self.recorder.is_visited(*v);
            if S::LIFO {
                for v in neighbors.into_iter().rev().filter(pending) {
                    self.sequencer.push((u, v));
                }
            } else {
                for v in neighbors.into_iter().filter(pending) {
                    self.sequencer.push((u, v));
                }
            }
        }

        let path = self.recorder.path_to(self.source, self.target);
        TraversalOutcome {
            trace: self.recorder.into_trace(),
            path,
        }
    }
}

/// Provides convenient traversal methods (BFS, DFS, traced searches)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(2, [(0, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Runs a traced BFS from `source` until `target` is processed.
    ///
    /// The reconstructed path uses the minimum number of edges.
    /// The trace holds every node popped before the target, so on a cycle the far neighbor
    /// of the source is recorded before the target is reached.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// // 0 - 1 - 2 - 3 - 0
    /// let g = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
    ///
    /// let outcome = g.bfs_trace(0, 2).unwrap();
    /// assert_eq!(outcome.path, vec![0, 1, 2]);
    /// assert_eq!(outcome.trace.order().collect::<Vec<_>>(), vec![0, 1, 3, 2]);
    /// ```
    fn bfs_trace(&self, source: Node, target: Node) -> Result<TraversalOutcome> {
        Ok(TracedBFS::new(self, source, target)?.run())
    }

    /// Runs a traced DFS from `source` until `target` is processed.
    fn dfs_trace(&self, source: Node, target: Node) -> Result<TraversalOutcome> {
        Ok(TracedDFS::new(self, source, target)?.run())
    }

    /// Returns *true* if there is a path from `source` to `target`.
    /// Rejects nodes that do not belong to the graph.
    fn is_reachable(&self, source: Node, target: Node) -> Result<bool> {
        check_node(source, self.number_of_nodes())?;
        check_node(target, self.number_of_nodes())?;
        Ok(self.bfs(source).stop_at(target).is_node_reachable(target))
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn square() -> UndirectedGraph {
        // 0 - 1
        // |   |
        // 3 - 2
        UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)])
    }

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = DirectedGraph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        {
            let order: Vec<Node> = graph.bfs(1).collect();
            assert_eq!(order.len(), 6);

            assert_eq!(order[0], 1);
            assert!(
                (order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2)
            );
            assert!(
                (order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5)
            );
            assert_eq!(order[5], 3);
        }

        {
            let order: Vec<Node> = BFS::new(&graph, 5).collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = DirectedGraph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);

        let order: Vec<Node> = graph.dfs(1).collect();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);

        if order[1] == 2 {
            assert_eq!(order[2..6], [0, 5, 4, 3]);
        } else {
            assert_eq!(order[1..6], [0, 5, 4, 3, 2]);
        }

        assert_eq!(graph.dfs(5).collect_vec(), [5, 4, 3]);
    }

    #[test]
    fn test_stopper() {
        let graph = DirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.bfs(0).stop_at(1).collect_vec(), vec![0, 1]);
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = DirectedGraph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let mut edges: Vec<_> = graph
            .bfs_with_predecessor(1)
            .map(|x| (x.predecessor(), x.item()))
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn bfs_trace_on_square() {
        let outcome = square().bfs_trace(0, 2).unwrap();

        assert_eq!(outcome.path, vec![0, 1, 2]);
        assert_eq!(outcome.hops(), Some(2));
        assert_eq!(outcome.trace.order().collect_vec(), vec![0, 1, 3, 2]);

        let last = outcome.trace.last().unwrap();
        assert_eq!(last.current(), 2);
        assert_eq!(last.state_of(2).distance(), Some(2));
        assert_eq!(last.state_of(2).predecessor(), Some(1));
        assert!(last.states().iter().all(|s| s.is_visited()));

        let first = outcome.trace.get(0).unwrap();
        assert!(first.state_of(0).is_current());
        assert_eq!(first.visited_nodes().collect_vec(), vec![0]);
    }

    #[test]
    fn dfs_trace_on_square() {
        let outcome = square().dfs_trace(0, 2).unwrap();
        assert_eq!(outcome.trace.order().collect_vec(), vec![0, 1, 2]);
        assert_eq!(outcome.path, vec![0, 1, 2]);

        let outcome = square().dfs_trace(0, 3).unwrap();
        assert_eq!(outcome.trace.order().collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(outcome.path, vec![0, 1, 2, 3]);
    }

    #[test]
    fn trace_stops_at_target() {
        let graph = UndirectedGraph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
        let outcome = graph.bfs_trace(0, 1).unwrap();
        assert_eq!(outcome.trace.len(), 2);
        assert!(!outcome.trace.last().unwrap().state_of(2).is_visited());
    }

    #[test]
    fn unreachable_target() {
        let graph = UndirectedGraph::from_edges(4, [(0, 1), (2, 3)]);
        for outcome in [graph.bfs_trace(0, 3).unwrap(), graph.dfs_trace(0, 3).unwrap()] {
            assert!(outcome.path.is_empty());
            assert!(!outcome.reached_target());
            assert_eq!(outcome.trace.order().sorted().collect_vec(), vec![0, 1]);
        }
        assert!(!graph.is_reachable(0, 3).unwrap());
        assert!(graph.is_reachable(3, 2).unwrap());
    }

    #[test]
    fn source_is_target() {
        let outcome = square().bfs_trace(3, 3).unwrap();
        assert_eq!(outcome.path, vec![3]);
        assert_eq!(outcome.trace.len(), 1);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            square().bfs_trace(0, 4),
            Err(GraphError::NodeOutOfRange { node: 4, n: 4 })
        );
        assert!(square().dfs_trace(9, 0).is_err());
        assert!(square().is_reachable(0, 4).is_err());
    }

    #[test]
    fn bfs_uses_minimum_hops() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        for _ in 0..50 {
            let graph = random_graph(rng, 7, 0.35, 5);
            for (s, t) in graph.vertices().cartesian_product(graph.vertices()) {
                let outcome = graph.bfs_trace(s, t).unwrap();
                assert_eq!(outcome.hops(), brute_force_hops(&graph, s, t));

                for (u, v) in outcome.path.iter().tuple_windows() {
                    assert!(graph.has_edge(*u, *v));
                }
            }
        }
    }

    #[test]
    fn dfs_finds_valid_paths() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);
        for _ in 0..50 {
            let graph = random_graph(rng, 8, 0.3, 5);
            for (s, t) in graph.vertices().cartesian_product(graph.vertices()) {
                let outcome = graph.dfs_trace(s, t).unwrap();
                assert_eq!(
                    outcome.reached_target(),
                    brute_force_hops(&graph, s, t).is_some()
                );
                assert!(outcome.trace.order().all_unique());

                if outcome.reached_target() {
                    assert_eq!(outcome.path.first(), Some(&s));
                    assert_eq!(outcome.path.last(), Some(&t));
                    for (u, v) in outcome.path.iter().tuple_windows() {
                        assert!(graph.has_edge(*u, *v));
                    }
                }
            }
        }
    }
}
