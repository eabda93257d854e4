use itertools::Itertools;

use super::*;
use crate::utils::*;

/// Clustered graphs: nodes are split round-robin into `k` clusters placed on a circle.
/// Node pairs within a cluster are connected with probability `intra_prob`, pairs of
/// different clusters with `inter_prob`. The result is repaired to be connected.
#[derive(Debug, Copy, Clone)]
pub struct ClusteredGen {
    n: NumNodes,
    clusters: NumNodes,
    intra_prob: f64,
    inter_prob: f64,
    max_weight: Weight,
}

impl Default for ClusteredGen {
    fn default() -> Self {
        Self {
            n: 1,
            clusters: 1,
            intra_prob: 0.6,
            inter_prob: 0.05,
            max_weight: DEFAULT_WEIGHT,
        }
    }
}

impl ClusteredGen {
    /// Creates a new generator with a single cluster
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the number of clusters; at least one
    pub fn clusters(mut self, k: NumNodes) -> Self {
        self.clusters = k.max(1);
        self
    }

    /// Updates the edge probability within a cluster
    pub fn intra_prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.intra_prob = prob;
        self
    }

    /// Updates the edge probability between clusters
    pub fn inter_prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.inter_prob = prob;
        self
    }

    /// Cluster of node `u`
    pub fn cluster_of(&self, u: Node) -> NumNodes {
        u % self.clusters.min(self.n)
    }
}

impl NumNodesGen for ClusteredGen {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n.max(1);
        self
    }
}

impl MaxWeightGen for ClusteredGen {
    fn max_weight(mut self, max_weight: Weight) -> Self {
        self.max_weight = max_weight;
        self
    }
}

impl StructureGenerator for ClusteredGen {
    type Output = GeneratedGraph<UndirectedGraph>;

    fn for_level(level: Level, config: &GenConfig) -> Self {
        let n = config.nodes_for_level(level);
        let density = config.density_for_level(level);
        Self::new()
            .nodes(n)
            .clusters((2 + n / 8).min(4))
            .intra_prob(0.4 + density)
            .inter_prob(density / 5.0)
            .max_weight(config.effective_max_weight())
    }

    fn generate<R>(&self, rng: &mut R) -> Self::Output
    where
        R: Rng,
    {
        let n = self.n;
        let k = self.clusters.min(n);
        let weights = WeightSampler::new(self.max_weight);

        let middle = Position::new(0.5, 0.5);
        let centers = if k == 1 {
            vec![middle]
        } else {
            Position::on_circle(middle, 0.3, k).collect_vec()
        };

        let positions = (0..n)
            .map(|u| {
                let center = centers[self.cluster_of(u) as usize];
                let angle = rng.random_range(0.0..std::f64::consts::TAU);
                let radius = rng.random_range(0.0..0.12);
                Position::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect_vec();

        let mut graph = UndirectedGraph::new(n);
        for (u, v) in (0..n).tuple_combinations() {
            let prob = if self.cluster_of(u) == self.cluster_of(v) {
                self.intra_prob
            } else {
                self.inter_prob
            };

            if rng.random_bool(prob) {
                graph.add_edge(u, v, weights.sample(rng));
            }
        }

        repair_connectivity(rng, &mut graph, &positions, self.max_weight);
        GeneratedGraph { graph, positions }
    }
}
