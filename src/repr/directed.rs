use crate::repr::macros::impl_common_graph_ops;

use super::*;

/// A directed weighted graph storing only **outgoing neighborhoods**
/// and the in-degree of every node.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct DirectedGraph {
    out_nbs: Vec<WeightedNeighborhood>,
    in_degrees: Vec<NumNodes>,
    edge_list: Vec<WeightedEdge>,
}

impl_common_graph_ops!(DirectedGraph => out_nbs, Directed);

impl GraphNew for DirectedGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            out_nbs: vec![Vec::new(); n as usize],
            in_degrees: vec![0; n as usize],
            edge_list: Vec::new(),
        }
    }
}

impl GraphEdgeEditing for DirectedGraph {
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool {
        if self.has_edge(u, v) {
            return true;
        }

        self.out_nbs[u as usize].push((v, w));
        self.in_degrees[v as usize] += 1;
        self.edge_list.push(WeightedEdge(u, v, w));
        false
    }
}

impl DirectedAdjacencyList for DirectedGraph {
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_degrees[u as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_graph_ops;

    test_graph_ops!(directed_ops, DirectedGraph, false);

    #[test]
    fn in_degrees() {
        let graph = DirectedGraph::from_edges(4, [(0, 2), (1, 2), (2, 3)]);
        assert_eq!(graph.in_degrees().collect::<Vec<_>>(), vec![0, 0, 2, 1]);
        assert_eq!(graph.sources().collect::<Vec<_>>(), vec![0, 1]);
        assert!(graph.has_edge(0, 2));
        assert!(!graph.has_edge(2, 0));
    }
}
