/*!
# Trace Steps

Traversal and shortest-path runs record one [`TraceStep`] each time a node is processed.
A step is an immutable snapshot of the state of *all* nodes at that moment, so a UI can
jump to any step (forwards or backwards) without replaying the algorithm.

A finished run is a [`Trace`]: a fully materialised, ordered sequence of steps.
*/

use super::*;

/// State of a single node within a [`TraceStep`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VertexState {
    visited: bool,
    current: bool,
    distance: Option<OptionalU64>,
    predecessor: Option<OptionalNode>,
}

impl VertexState {
    /// Returns *true* if the node was processed at or before this step
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Returns *true* if the node is the one processed in this step
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Returns the tentative distance from the source, `None` if still infinite.
    /// Traversals (BFS/DFS) report the depth within the search tree.
    pub fn distance(&self) -> Option<Distance> {
        self.distance.map(|d| d.get())
    }

    /// Returns the predecessor of the node in the search tree, if any
    pub fn predecessor(&self) -> Option<Node> {
        self.predecessor.map(|p| p.get())
    }
}

/// Snapshot of all node states after a node was processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    current: Node,
    states: Box<[VertexState]>,
}

impl TraceStep {
    /// Returns the node processed in this step
    pub fn current(&self) -> Node {
        self.current
    }

    /// Returns the states of all nodes, indexed by node
    pub fn states(&self) -> &[VertexState] {
        &self.states
    }

    /// Returns the state of node `u`
    /// ** Panics if `u >= n` **
    pub fn state_of(&self, u: Node) -> &VertexState {
        &self.states[u as usize]
    }

    /// Returns all nodes visited at or before this step in ascending order
    pub fn visited_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter_map(|(u, s)| s.visited.then_some(u as Node))
    }
}

/// Ordered, replayable sequence of steps of a finished run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns *true* if no step was recorded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the `i`-th step, if it exists
    pub fn get(&self, i: usize) -> Option<&TraceStep> {
        self.steps.get(i)
    }

    /// Returns the final step, if any
    pub fn last(&self) -> Option<&TraceStep> {
        self.steps.last()
    }

    /// Returns all steps as a slice
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Iterates over all steps in processing order
    pub fn iter(&self) -> std::slice::Iter<'_, TraceStep> {
        self.steps.iter()
    }

    /// Returns the processed nodes in processing order
    pub fn order(&self) -> impl Iterator<Item = Node> + '_ {
        self.steps.iter().map(|s| s.current)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for Trace {
    type Item = TraceStep;
    type IntoIter = std::vec::IntoIter<TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Mutable working state of a run which is frozen into a [`TraceStep`] on every processed node
pub(crate) struct TraceRecorder {
    states: Vec<VertexState>,
    current: Option<Node>,
    steps: Vec<TraceStep>,
}

impl TraceRecorder {
    pub(crate) fn new(n: NumNodes) -> Self {
        Self {
            states: vec![VertexState::default(); n as usize],
            current: None,
            steps: Vec::new(),
        }
    }

    pub(crate) fn is_visited(&self, u: Node) -> bool {
        self.states[u as usize].visited
    }

    pub(crate) fn distance(&self, u: Node) -> Option<Distance> {
        self.states[u as usize].distance()
    }

    pub(crate) fn predecessor(&self, u: Node) -> Option<Node> {
        self.states[u as usize].predecessor()
    }

    pub(crate) fn set_distance(&mut self, u: Node, distance: Distance) {
        self.states[u as usize].distance = OptionalU64::new(distance);
    }

    pub(crate) fn set_predecessor(&mut self, u: Node, predecessor: Node) {
        self.states[u as usize].predecessor = OptionalNode::new(predecessor);
    }

    /// Marks `u` as visited and current and records a snapshot
    pub(crate) fn visit(&mut self, u: Node) {
        if let Some(prev) = self.current.replace(u) {
            self.states[prev as usize].current = false;
        }

        let state = &mut self.states[u as usize];
        state.visited = true;
        state.current = true;

        self.steps.push(TraceStep {
            current: u,
            states: self.states.clone().into_boxed_slice(),
        });
    }

    /// Follows predecessors from `target` back to `source`.
    /// Returns an empty path if `target` was never visited.
    pub(crate) fn path_to(&self, source: Node, target: Node) -> Vec<Node> {
        reconstruct_path(
            source,
            target,
            |u| self.is_visited(u).then(|| self.predecessor(u)).flatten(),
            self.is_visited(target),
        )
    }

    pub(crate) fn into_trace(self) -> Trace {
        Trace { steps: self.steps }
    }
}

/// Builds the path `source -> ... -> target` from a predecessor function.
/// Returns an empty path if `reached` is *false*.
pub(crate) fn reconstruct_path<F>(
    source: Node,
    target: Node,
    predecessor: F,
    reached: bool,
) -> Vec<Node>
where
    F: Fn(Node) -> Option<Node>,
{
    if !reached {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut node = target;
    while node != source {
        match predecessor(node) {
            Some(p) => {
                path.push(p);
                node = p;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}
