use super::*;
use crate::utils::*;

/// Layered DAGs: the nodes `0..n` are split into `layers` consecutive id ranges of (almost) equal size.
///
/// Edges only lead from a layer to a strictly later layer, so the graph is acyclic by construction.
/// An edge between neighbouring layers is present with probability `prob`, an edge skipping
/// layers with probability `prob / 4`. Every node outside the first layer receives at least one
/// incoming edge from the preceding layer.
#[derive(Debug, Copy, Clone)]
pub struct LayeredDagGen {
    n: NumNodes,
    layers: NumNodes,
    prob: f64,
    max_weight: Weight,
}

impl Default for LayeredDagGen {
    fn default() -> Self {
        Self {
            n: 2,
            layers: 2,
            prob: 0.5,
            max_weight: DEFAULT_WEIGHT,
        }
    }
}

impl LayeredDagGen {
    /// Creates a new generator for two nodes in two layers
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the number of layers; at least one
    pub fn layers(mut self, layers: NumNodes) -> Self {
        self.layers = layers.max(1);
        self
    }

    /// Updates the probability of an edge between neighbouring layers
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.prob = prob;
        self
    }

    fn effective_layers(&self) -> NumNodes {
        self.layers.min(self.n)
    }

    /// Layer of node `u`; non-decreasing in `u`
    pub fn layer_of(&self, u: Node) -> NumNodes {
        (u as u64 * self.effective_layers() as u64 / self.n as u64) as NumNodes
    }
}

impl NumNodesGen for LayeredDagGen {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n.max(1);
        self
    }
}

impl MaxWeightGen for LayeredDagGen {
    fn max_weight(mut self, max_weight: Weight) -> Self {
        self.max_weight = max_weight;
        self
    }
}

impl StructureGenerator for LayeredDagGen {
    type Output = GeneratedGraph<DirectedGraph>;

    fn for_level(level: Level, config: &GenConfig) -> Self {
        let n = config.nodes_for_level(level);
        Self::new()
            .nodes(n)
            .layers(2 + n / 5)
            .prob((0.3 + config.density_for_level(level)).min(0.8))
            .max_weight(config.effective_max_weight())
    }

    fn generate<R>(&self, rng: &mut R) -> Self::Output
    where
        R: Rng,
    {
        let n = self.n;
        let weights = WeightSampler::new(self.max_weight);
        let layer_of: Vec<NumNodes> = (0..n).map(|u| self.layer_of(u)).collect();
        let first_of_layer = |layer: NumNodes| layer_of.partition_point(|&l| l < layer) as Node;

        let mut graph = DirectedGraph::new(n);
        for u in 0..n {
            for v in first_of_layer(layer_of[u as usize] + 1)..n {
                let distance = layer_of[v as usize] - layer_of[u as usize];
                let prob = if distance == 1 { self.prob } else { self.prob / 4.0 };
                if rng.random_bool(prob) {
                    graph.add_edge(u, v, weights.sample(rng));
                }
            }
        }

        for v in 0..n {
            let layer = layer_of[v as usize];
            if layer == 0 || graph.in_degree_of(v) > 0 {
                continue;
            }

            let u = rng.random_range(first_of_layer(layer - 1)..first_of_layer(layer));
            graph.add_edge(u, v, weights.sample(rng));
        }

        let layers = self.effective_layers();
        let positions = (0..n)
            .map(|u| {
                let layer = layer_of[u as usize];
                let first = first_of_layer(layer);
                let size = first_of_layer(layer + 1) - first;
                Position::new(
                    (layer as f64 + 0.5) / layers as f64,
                    ((u - first) as f64 + 0.5) / size as f64,
                )
            })
            .collect();

        GeneratedGraph { graph, positions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn layers_are_balanced() {
        let generator = LayeredDagGen::new().nodes(10).layers(3);
        let sizes: Vec<usize> = (0..3)
            .map(|l| (0..10).filter(|&u| generator.layer_of(u) == l).count())
            .collect();
        assert_eq!(sizes.iter().sum::<usize>(), 10);
        assert!(sizes.iter().all(|&s| s == 3 || s == 4));
    }

    #[test]
    fn edges_lead_forward() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);
        for n in 1..20 {
            for layers in 1..6 {
                let generator = LayeredDagGen::new()
                    .nodes(n)
                    .layers(layers)
                    .prob(0.6)
                    .max_weight(3);
                let level = generator.generate(rng);

                assert!(level.graph.is_acyclic());
                assert!(level
                    .graph
                    .edges()
                    .all(|e| generator.layer_of(e.0) < generator.layer_of(e.1)));
                assert_eq!(level.positions.len(), n as usize);
            }
        }
    }

    #[test]
    fn later_layers_have_predecessors() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);
        let generator = LayeredDagGen::new().nodes(12).layers(4).prob(0.0);
        let level = generator.generate(rng);

        // with `prob = 0` only the predecessor edges exist
        assert_eq!(level.graph.number_of_edges(), 9);
        assert_eq!(level.graph.sources().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(level
            .graph
            .edges()
            .all(|e| generator.layer_of(e.0) + 1 == generator.layer_of(e.1)));
    }
}
