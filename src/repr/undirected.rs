use crate::repr::macros::impl_common_graph_ops;

use super::*;

/// An undirected weighted graph.
///
/// Every edge `{u, v}` appears in the neighborhoods of `u` and `v` with the same weight.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct UndirectedGraph {
    nbs: Vec<WeightedNeighborhood>,
    edge_list: Vec<WeightedEdge>,
}

impl_common_graph_ops!(UndirectedGraph => nbs, Undirected);

impl GraphNew for UndirectedGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            edge_list: Vec::new(),
        }
    }
}

impl GraphEdgeEditing for UndirectedGraph {
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool {
        if self.has_edge(u, v) {
            return true;
        }

        self.nbs[u as usize].push((v, w));
        if u != v {
            self.nbs[v as usize].push((u, w));
        }
        self.edge_list.push(WeightedEdge(u, v, w));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_graph_ops;

    test_graph_ops!(undirected_ops, UndirectedGraph, true);

    #[test]
    fn symmetric_weights() {
        let graph = UndirectedGraph::from_edges(3, [(0, 1, 4), (2, 1, 9)]);
        assert_eq!(graph.edge_weight(0, 1), Some(4));
        assert_eq!(graph.edge_weight(1, 0), Some(4));
        assert_eq!(graph.edge_weight(1, 2), Some(9));
        assert_eq!(graph.edge_weight(0, 2), None);
        assert_eq!(graph.degree_of(1), 2);
        assert_eq!(graph.total_weight(), 13);
    }

    #[test]
    fn duplicate_is_reported() {
        let mut graph = UndirectedGraph::new(2);
        assert!(!graph.try_add_edge(0, 1, 3));
        assert!(graph.try_add_edge(1, 0, 5));
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.edge_weight(0, 1), Some(3));
    }
}
