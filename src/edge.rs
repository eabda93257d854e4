use std::fmt::{Debug, Display};

use crate::node::Node;

/// Edge weights are non-negative integers.
pub type Weight = u32;

/// Sums of weights along a path.
pub type Distance = u64;

/// Weight assigned to edges of unweighted graphs
pub const DEFAULT_WEIGHT: Weight = 1;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An edge is defined by two nodes/endpoints.
/// Is is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge(pub Node, pub Node);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a weight to the edge
    pub fn with_weight(self, weight: Weight) -> WeightedEdge {
        WeightedEdge(self.0, self.1, weight)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

impl From<WeightedEdge> for Edge {
    fn from(value: WeightedEdge) -> Self {
        value.edge()
    }
}

/// An edge `(u, v)` carrying a weight `w`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl WeightedEdge {
    /// Returns the unweighted edge
    pub fn edge(&self) -> Edge {
        Edge(self.0, self.1)
    }

    /// Returns the weight of the edge
    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        self.edge().normalized().with_weight(self.2)
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints while keeping the weight
    pub fn reverse(&self) -> Self {
        WeightedEdge(self.1, self.0, self.2)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

/// Unweighted edges get the [`DEFAULT_WEIGHT`]
impl From<(Node, Node)> for WeightedEdge {
    fn from(value: (Node, Node)) -> Self {
        WeightedEdge(value.0, value.1, DEFAULT_WEIGHT)
    }
}

impl From<Edge> for WeightedEdge {
    fn from(value: Edge) -> Self {
        value.with_weight(DEFAULT_WEIGHT)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}
