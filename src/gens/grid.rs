use super::*;
use crate::utils::*;

/// Grid graphs: node `r * cols + c` sits at row `r` and column `c` of a lattice.
/// Every lattice edge (right and down neighbours) is present independently with probability `prob`;
/// the result is repaired to be connected. As lattice neighbours are the closest nodes,
/// repair edges are lattice edges as well.
#[derive(Debug, Copy, Clone)]
pub struct GridGen {
    rows: NumNodes,
    cols: NumNodes,
    prob: f64,
    max_weight: Weight,
}

impl Default for GridGen {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            prob: 0.5,
            max_weight: DEFAULT_WEIGHT,
        }
    }
}

impl GridGen {
    /// Creates a new generator for a single node
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the dimensions of the lattice; at least `1 x 1`
    pub fn dims(mut self, rows: NumNodes, cols: NumNodes) -> Self {
        self.rows = rows.max(1);
        self.cols = cols.max(1);
        self
    }

    /// Updates the probability of every lattice edge
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.prob = prob;
        self
    }

    /// Node at row `r` and column `c`
    pub fn node_at(&self, r: NumNodes, c: NumNodes) -> Node {
        r * self.cols + c
    }
}

impl NumNodesGen for GridGen {
    /// Picks the most square lattice with at most `n` nodes and more columns than rows
    fn nodes(self, n: NumNodes) -> Self {
        let n = n.max(1);
        let rows = (n as f64).sqrt().floor() as NumNodes;
        self.dims(rows, n / rows.max(1))
    }
}

impl MaxWeightGen for GridGen {
    fn max_weight(mut self, max_weight: Weight) -> Self {
        self.max_weight = max_weight;
        self
    }
}

impl StructureGenerator for GridGen {
    type Output = GeneratedGraph<UndirectedGraph>;

    fn for_level(level: Level, config: &GenConfig) -> Self {
        Self::new()
            .nodes(config.nodes_for_level(level))
            .prob((0.5 + config.density_for_level(level)).min(0.95))
            .max_weight(config.effective_max_weight())
    }

    fn generate<R>(&self, rng: &mut R) -> Self::Output
    where
        R: Rng,
    {
        let (rows, cols) = (self.rows, self.cols);
        let weights = WeightSampler::new(self.max_weight);
        let mut graph = UndirectedGraph::new(rows * cols);

        for r in 0..rows {
            for c in 0..cols {
                let u = self.node_at(r, c);
                if c + 1 < cols && rng.random_bool(self.prob) {
                    graph.add_edge(u, self.node_at(r, c + 1), weights.sample(rng));
                }
                if r + 1 < rows && rng.random_bool(self.prob) {
                    graph.add_edge(u, self.node_at(r + 1, c), weights.sample(rng));
                }
            }
        }

        let scale = rows.max(cols) as f64;
        let positions: Vec<Position> = (0..rows)
            .flat_map(|r| {
                (0..cols).map(move |c| {
                    Position::new((c as f64 + 0.5) / scale, (r as f64 + 0.5) / scale)
                })
            })
            .collect();

        repair_connectivity(rng, &mut graph, &positions, self.max_weight);
        GeneratedGraph { graph, positions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn is_lattice_edge(generator: &GridGen, e: WeightedEdge) -> bool {
        let cols = generator.cols;
        let (u, v) = (e.0.min(e.1), e.0.max(e.1));
        (v == u + 1 && u / cols == v / cols) || v == u + cols
    }

    #[test]
    fn dimensions_from_nodes() {
        let generator = GridGen::new().nodes(12);
        assert_eq!((generator.rows, generator.cols), (3, 4));

        let generator = GridGen::new().nodes(25);
        assert_eq!((generator.rows, generator.cols), (5, 5));

        let generator = GridGen::new().nodes(0);
        assert_eq!((generator.rows, generator.cols), (1, 1));
    }

    #[test]
    fn full_lattice() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let level = GridGen::new().dims(3, 4).prob(1.0).generate(rng);
        assert_eq!(level.graph.number_of_edges(), 3 * 3 + 2 * 4);
        assert_eq!(level.positions.len(), 12);
    }

    #[test]
    fn repaired_edges_stay_on_lattice() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        for prob in [0.0, 0.2, 0.5] {
            let generator = GridGen::new().dims(4, 5).prob(prob);
            let level = generator.generate(rng);

            assert!(level.graph.is_connected());
            assert!(level.graph.edges().all(|e| is_lattice_edge(&generator, e)));
        }
    }
}
