/*!
# Topological Orders

Kahn's algorithm in two flavours:
- [`TopoSearch`]: an iterator producing one valid topological order in one go,
- [`TopoStepper`]: an externally driven state machine where the *caller* picks which of the
  currently available nodes is processed next. Every such choice yields a valid order.
*/

use log::trace;

use super::*;

/// Iterator implementing topological ordering over a directed acyclic graph (DAG).
///
/// Uses a variant of Kahn's algorithm:
/// - Initializes with all nodes of in-degree 0.
/// - Repeatedly removes a node, decreasing in-degrees of its successors,
///   and pushes new nodes of in-degree 0.
/// - Stops once all nodes are output or a cycle is detected.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    stack: Vec<Node>,
}

impl<'a, G> Iterator for TopoSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Node;

    /// Returns the next node in topological order, if available.
    ///
    /// - Each returned node is guaranteed to appear after all its predecessors.
    /// - If the graph has a cycle, iteration will terminate early without
    ///   covering all nodes.
    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.out_neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.stack.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.graph.len()))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    /// Constructs a new topological search on the given directed graph,
    /// collecting the initial set of zero in-degree nodes.
    pub fn new(graph: &'a G) -> Self {
        let in_degs: Vec<NumNodes> = graph.in_degrees().collect();
        let stack: Vec<Node> = graph.sources().collect();

        Self {
            graph,
            in_degs,
            stack,
        }
    }
}

/// Incremental Kahn's algorithm driven by the caller.
///
/// A node is *available* iff it is unprocessed and all its predecessors were processed.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// // 0 -> 2, 1 -> 2, 2 -> 3
/// let dag = DirectedGraph::from_edges(4, [(0, 2), (1, 2), (2, 3)]);
/// let mut stepper = TopoStepper::new(&dag);
///
/// assert_eq!(stepper.available().collect::<Vec<_>>(), vec![0, 1]);
/// assert!(stepper.process_next(2).is_err());
///
/// assert!(stepper.process_next(1).unwrap().is_empty());
/// assert_eq!(stepper.process_next(0).unwrap(), vec![2]);
/// assert_eq!(stepper.process_next(2).unwrap(), vec![3]);
/// stepper.process_next(3).unwrap();
///
/// assert!(stepper.is_complete());
/// assert_eq!(stepper.order(), &[1, 0, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct TopoStepper<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    processed: NodeBitSet,
    order: Vec<Node>,
}

impl<'a, G> TopoStepper<'a, G>
where
    G: DirectedAdjacencyList,
{
    /// Initializes the in-degree counters from the edges of `graph`
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            in_degs: graph.in_degrees().collect(),
            processed: graph.vertex_bitset_unset(),
            order: Vec::with_capacity(graph.len()),
        }
    }

    /// Returns all available nodes in ascending order
    pub fn available(&self) -> impl Iterator<Item = Node> + '_ {
        self.graph.vertices().filter(|&u| self.is_available(u))
    }

    /// Returns *true* if `u` may be processed next.
    /// Nodes outside the graph are never available.
    pub fn is_available(&self, u: Node) -> bool {
        self.graph.has_vertex(u) && !self.processed.get_bit(u) && self.in_degs[u as usize] == 0
    }

    /// Returns *true* if `u` was already processed.
    /// Nodes outside the graph are never processed.
    pub fn is_processed(&self, u: Node) -> bool {
        self.graph.has_vertex(u) && self.processed.get_bit(u)
    }

    /// Returns the number of unprocessed predecessors of `u`,
    /// `None` if `u` does not belong to the graph
    pub fn in_degree_of(&self, u: Node) -> Option<NumNodes> {
        self.in_degs.get(u as usize).copied()
    }

    /// Processes the available node `u` and returns the successors that became
    /// available through it, in adjacency order.
    ///
    /// Unavailable, already processed, or unknown nodes are rejected and leave the state unchanged.
    pub fn process_next(&mut self, u: Node) -> Result<Vec<Node>> {
        check_node(u, self.graph.number_of_nodes())?;
        if self.processed.get_bit(u) {
            return Err(GraphError::AlreadyProcessed(u));
        }
        if self.in_degs[u as usize] > 0 {
            return Err(GraphError::NodeUnavailable {
                node: u,
                in_degree: self.in_degs[u as usize],
            });
        }

        self.processed.set_bit(u);
        self.order.push(u);

        let mut unlocked = Vec::new();
        for v in self.graph.out_neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                unlocked.push(v);
            }
        }

        trace!("topological step processes {u}, unlocking {unlocked:?}");
        Ok(unlocked)
    }

    /// Nodes processed so far in processing order
    pub fn order(&self) -> &[Node] {
        &self.order
    }

    /// Consumes the stepper and returns the nodes in processing order
    pub fn into_order(self) -> Vec<Node> {
        self.order
    }

    /// Returns *true* if all nodes were processed
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.graph.len()
    }

    /// Returns *true* if unprocessed nodes remain but none is available.
    /// This can only happen if the graph contains a directed cycle.
    pub fn is_stuck(&self) -> bool {
        !self.is_complete() && self.available().next().is_none()
    }
}

/// Topological orders on directed graphs
pub trait TopologicalSort: DirectedAdjacencyList + Sized {
    /// Returns an iterator yielding nodes in a valid **topological order**.
    /// Terminates early if the graph contains a cycle.
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Returns an incremental topological sort driven by the caller
    fn topo_stepper(&self) -> TopoStepper<'_, Self> {
        TopoStepper::new(self)
    }

    /// Returns `Some(order)` with a topological order or `None` if the graph has a cycle
    fn topological_order(&self) -> Option<Vec<Node>> {
        let order: Vec<Node> = self.topo_search().collect();
        (order.len() == self.len()).then_some(order)
    }

    /// Returns `true` if the directed graph is **acyclic**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges(3, [(0, 1), (1, 2)]);
    /// assert!(g.is_acyclic());
    /// ```
    fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.len()
    }
}

impl<G> TopologicalSort for G where G: DirectedAdjacencyList + Sized {}
