use itertools::Itertools;

use super::*;
use crate::utils::*;

/// A bipartite matching instance: `left` and `right` nodes with weighted edges only across.
///
/// Edges are stored as `WeightedEdge(l, r, w)` with `l in 0..left` and `r in 0..right` in separate
/// id spaces, which is the input format of the matching algorithms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BipartiteInstance {
    pub left: NumNodes,
    pub right: NumNodes,
    pub edges: Vec<WeightedEdge>,
    /// Positions of the left nodes followed by the right nodes
    pub positions: Vec<Position>,
}

impl BipartiteInstance {
    /// Total number of nodes on both sides
    pub fn number_of_nodes(&self) -> NumNodes {
        self.left + self.right
    }

    /// Returns the instance as a single undirected graph with the left nodes `0..left`, the right
    /// nodes `left..left + right`, and the set of left nodes.
    pub fn to_graph(&self) -> (UndirectedGraph, NodeBitSet) {
        let graph = UndirectedGraph::from_edges(
            self.number_of_nodes(),
            self.edges
                .iter()
                .map(|e| WeightedEdge(e.0, self.left + e.1, e.weight())),
        );
        let left = NodeBitSet::new_with_bits_set(self.number_of_nodes(), 0..self.left);
        (graph, left)
    }
}

/// Random bipartite instances: every left/right pair is connected independently with probability
/// `prob`. Nodes left without any edge are connected to a random node of the other side, so every
/// node can be matched.
#[derive(Debug, Copy, Clone)]
pub struct BipartiteGen {
    left: NumNodes,
    right: NumNodes,
    prob: f64,
    max_weight: Weight,
}

impl Default for BipartiteGen {
    fn default() -> Self {
        Self {
            left: 1,
            right: 1,
            prob: 0.5,
            max_weight: DEFAULT_WEIGHT,
        }
    }
}

impl BipartiteGen {
    /// Creates a new generator for one node on each side
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the sizes of both sides; at least one node each
    pub fn sides(mut self, left: NumNodes, right: NumNodes) -> Self {
        self.left = left.max(1);
        self.right = right.max(1);
        self
    }

    /// Updates the probability of every left/right edge
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.prob = prob;
        self
    }
}

impl NumNodesGen for BipartiteGen {
    /// Splits `n` into two sides with the right side being at most one node larger
    fn nodes(self, n: NumNodes) -> Self {
        self.sides(n / 2, n - n / 2)
    }
}

impl MaxWeightGen for BipartiteGen {
    fn max_weight(mut self, max_weight: Weight) -> Self {
        self.max_weight = max_weight;
        self
    }
}

impl StructureGenerator for BipartiteGen {
    type Output = BipartiteInstance;

    fn for_level(level: Level, config: &GenConfig) -> Self {
        Self::new()
            .nodes(config.nodes_for_level(level))
            .prob(0.2 + config.density_for_level(level))
            .max_weight(config.effective_max_weight())
    }

    fn generate<R>(&self, rng: &mut R) -> Self::Output
    where
        R: Rng,
    {
        let (left, right) = (self.left, self.right);
        let weights = WeightSampler::new(self.max_weight);

        let mut present = vec![false; (left * right) as usize];
        for (l, r) in (0..left).cartesian_product(0..right) {
            present[(l * right + r) as usize] = rng.random_bool(self.prob);
        }

        for l in 0..left {
            if (0..right).all(|r| !present[(l * right + r) as usize]) {
                let r = rng.random_range(0..right);
                present[(l * right + r) as usize] = true;
            }
        }
        for r in 0..right {
            if (0..left).all(|l| !present[(l * right + r) as usize]) {
                let l = rng.random_range(0..left);
                present[(l * right + r) as usize] = true;
            }
        }

        let edges = (0..left)
            .cartesian_product(0..right)
            .filter(|&(l, r)| present[(l * right + r) as usize])
            .map(|(l, r)| WeightedEdge(l, r, weights.sample(rng)))
            .collect();

        let column = |x: f64, k: NumNodes| {
            let step = 1.0 / k as f64;
            (0..k)
                .map(move |i| Position::new(x, (i as f64 + 0.5) * step))
        };
        let positions = column(0.2, left).chain(column(0.8, right)).collect();

        BipartiteInstance {
            left,
            right,
            edges,
            positions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn every_node_has_an_edge() {
        let rng = &mut Pcg64Mcg::seed_from_u64(10);
        for _ in 0..20 {
            let instance = BipartiteGen::new().sides(4, 6).prob(0.05).generate(rng);
            let (graph, _) = instance.to_graph();
            assert!(graph.vertices().all(|u| !graph.is_isolated(u)));
        }
    }

    #[test]
    fn to_graph_is_bipartite() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let instance = BipartiteGen::new()
            .nodes(9)
            .prob(0.5)
            .max_weight(7)
            .generate(rng);
        assert_eq!((instance.left, instance.right), (4, 5));
        assert_eq!(instance.positions.len(), 9);

        let (graph, left) = instance.to_graph();
        assert!(graph.is_bipartite());
        assert!(graph.is_bipartition(&left));
        assert_eq!(graph.number_of_edges() as usize, instance.edges.len());

        // both forms of the instance agree on the matching
        let direct = greedy_weighted_matching(&instance.edges);
        let via_graph = graph.greedy_bipartite_matching(&left);
        assert_eq!(direct.total_weight, via_graph.total_weight);
    }

    #[test]
    fn complete_instance() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);
        let instance = BipartiteGen::new().sides(3, 3).prob(1.0).generate(rng);
        assert_eq!(instance.edges.len(), 9);
        assert!(instance.edges.iter().all(|e| e.0 < 3 && e.1 < 3));
    }
}
