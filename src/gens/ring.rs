/*!
# Cycles and Wheels

- [`CycleGen`]: a ring over all nodes plus random chords between non-adjacent ring nodes,
- [`WheelGen`]: a hub (node `0`) in the center of a ring that is connected to every ring node.

Both are connected by construction and laid out on a circle.
*/

use itertools::Itertools;

use super::*;
use crate::utils::*;

const CENTER: Position = Position { x: 0.5, y: 0.5 };
const RADIUS: f64 = 0.4;

/// Ring over `n >= 3` nodes with chords present independently with probability `chord_prob`
#[derive(Debug, Copy, Clone)]
pub struct CycleGen {
    n: NumNodes,
    chord_prob: f64,
    max_weight: Weight,
}

impl Default for CycleGen {
    fn default() -> Self {
        Self {
            n: 3,
            chord_prob: 0.0,
            max_weight: DEFAULT_WEIGHT,
        }
    }
}

impl CycleGen {
    /// Creates a new generator for a triangle without chords
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the probability of every chord
    pub fn chord_prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.chord_prob = prob;
        self
    }
}

impl NumNodesGen for CycleGen {
    /// Updates `n`; rings require at least three nodes
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n.max(3);
        self
    }
}

impl MaxWeightGen for CycleGen {
    fn max_weight(mut self, max_weight: Weight) -> Self {
        self.max_weight = max_weight;
        self
    }
}

impl StructureGenerator for CycleGen {
    type Output = GeneratedGraph<UndirectedGraph>;

    fn for_level(level: Level, config: &GenConfig) -> Self {
        Self::new()
            .nodes(config.nodes_for_level(level))
            .chord_prob(config.density_for_level(level) / 2.0)
            .max_weight(config.effective_max_weight())
    }

    fn generate<R>(&self, rng: &mut R) -> Self::Output
    where
        R: Rng,
    {
        let n = self.n;
        let weights = WeightSampler::new(self.max_weight);

        let mut graph = UndirectedGraph::new(n);
        graph.connect_cycle(0..n, || weights.sample(rng));

        for (u, v) in (0..n).tuple_combinations() {
            let on_ring = v == u + 1 || (u == 0 && v == n - 1);
            if !on_ring && rng.random_bool(self.chord_prob) {
                graph.add_edge(u, v, weights.sample(rng));
            }
        }

        GeneratedGraph {
            graph,
            positions: Position::on_circle(CENTER, RADIUS, n).collect(),
        }
    }
}

/// Wheel with hub `0` and a ring over the nodes `1..n`
#[derive(Debug, Copy, Clone)]
pub struct WheelGen {
    n: NumNodes,
    max_weight: Weight,
}

impl Default for WheelGen {
    fn default() -> Self {
        Self {
            n: 4,
            max_weight: DEFAULT_WEIGHT,
        }
    }
}

impl WheelGen {
    /// Creates a new generator for the smallest wheel (hub and triangle)
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for WheelGen {
    /// Updates `n` including the hub; wheels require at least four nodes
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n.max(4);
        self
    }
}

impl MaxWeightGen for WheelGen {
    fn max_weight(mut self, max_weight: Weight) -> Self {
        self.max_weight = max_weight;
        self
    }
}

impl StructureGenerator for WheelGen {
    type Output = GeneratedGraph<UndirectedGraph>;

    fn for_level(level: Level, config: &GenConfig) -> Self {
        Self::new()
            .nodes(config.nodes_for_level(level))
            .max_weight(config.effective_max_weight())
    }

    fn generate<R>(&self, rng: &mut R) -> Self::Output
    where
        R: Rng,
    {
        let n = self.n;
        let weights = WeightSampler::new(self.max_weight);

        let mut graph = UndirectedGraph::new(n);
        graph.connect_cycle(1..n, || weights.sample(rng));
        graph.connect_star(0, 1..n, || weights.sample(rng));

        let positions = std::iter::once(CENTER)
            .chain(Position::on_circle(CENTER, RADIUS, n - 1))
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
    fn plain_cycle() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let level = CycleGen::new().nodes(6).generate(rng);

        assert_eq!(level.graph.number_of_edges(), 6);
        assert!(level.graph.degrees().all(|d| d == 2));
        assert!(level.graph.has_edge(5, 0));
        assert_eq!(level.positions.len(), 6);
    }

    #[test]
    fn complete_chords() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let level = CycleGen::new()
            .nodes(7)
            .chord_prob(1.0)
            .max_weight(5)
            .generate(rng);

        assert_eq!(level.graph.number_of_edges(), 7 * 6 / 2);
        assert!(level.graph.edges().all(|e| (1..=5).contains(&e.weight())));
    }

    #[test]
    fn tiny_rings_are_clamped() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        assert_eq!(CycleGen::new().nodes(1).generate(rng).graph.len(), 3);
        assert_eq!(WheelGen::new().nodes(2).generate(rng).graph.len(), 4);
    }

    #[test]
    fn wheel() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let level = WheelGen::new().nodes(8).generate(rng);
        let graph = &level.graph;

        assert_eq!(graph.degree_of(0), 7);
        assert!(graph.vertices().skip(1).all(|u| graph.degree_of(u) == 3));
        assert_eq!(graph.number_of_edges(), 14);
        assert!(graph.is_connected());
        assert_eq!(level.positions[0], CENTER);
    }
}
