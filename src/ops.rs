use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, node::*};

/// Marker for the orientation of a graph
pub trait GraphDir {
    /// *true* iff edges have an orientation
    const DIRECTED: bool;
}

/// Marker type for directed graphs
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Directed;

/// Marker type for undirected graphs
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Undirected;

impl GraphDir for Directed {
    const DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const DIRECTED: bool = false;
}

/// Tells algorithms at compile time whether a graph is directed
pub trait GraphType {
    /// Orientation of the graph
    type Dir: GraphDir;

    /// Returns *true* if the graph is directed
    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }

    /// Returns *true* if the graph is undirected
    fn is_undirected() -> bool {
        !Self::is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if `u` is a node of the graph
    fn has_vertex(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// For undirected graphs, `{u, v}` is counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over all edges in the order they were inserted.
    /// Undirected edges are reported once, oriented as inserted.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_;

    /// Returns the sum of all edge weights
    fn total_weight(&self) -> Distance {
        self.edges().map(|e| e.weight() as Distance).sum()
    }

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex together with
    /// the weight of the connecting edge, in insertion order.
    /// ** Panics if `u >= n` **
    ///
    /// Note that for directed graphs, this only returns out-neighbors
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the neighbors of `u` sorted by ascending id
    /// ** Panics if `u >= n` **
    fn ordered_neighbors_of(&self, u: Node) -> Vec<Node> {
        self.neighbors_of(u).sorted_unstable().collect()
    }

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns *true* if `u` has no neighbors
    /// ** Panics if `u >= n` **
    fn is_isolated(&self, u: Node) -> bool {
        self.degree_of(u) == 0
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge(u, v, w))
    }
}

/// Additional getters for directed graphs
pub trait DirectedAdjacencyList: AdjacencyList {
    /// Returns an iterator over the out-neighbors of `u`
    /// ** Panics if `u >= n` **
    #[inline]
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_of(u)
    }

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    #[inline]
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.degree_of(u)
    }

    /// Returns the number of incoming neighbors of a given vertex
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the in-degrees of all nodes
    fn in_degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.in_degree_of(u))
    }

    /// Returns all nodes without incoming edges in ascending order
    fn sources(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.in_degree_of(u) == 0)
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the weight of the edge (u,v) if it exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_weight(u, v).is_some()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* with weight `w` to the graph.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) {
        assert!(!self.try_add_edge(u, v, w), "Edge ({u},{v}) already exists");
    }

    /// Adds the edge `(u, v)` with weight `w` to the graph if it does not exist yet.
    /// Returns *true* exactly if the edge was present previously (the graph is unchanged then).
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool;

    /// Adds all edges in the collection
    /// ** Panics if any edge is already present **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over (weighted) edges.
    /// Unweighted edges receive [`DEFAULT_WEIGHT`].
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
