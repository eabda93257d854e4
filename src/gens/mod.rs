/*!
# Structure Generators

This module provides builder-style generators for the random structures the games are played on.

Each generator allows parameterized control over structural properties (number of nodes, edge
probability, weight range, ...) and is either configured by hand or derived from a difficulty
*level* via [`StructureGenerator::for_level`]. The typical usage workflow is:

1. Create a generator instance (e.g. `CycleGen::new()`).
2. Set parameters using builder methods (e.g. `.nodes(n).chord_prob(p)`).
3. Generate a structure via `generate(rng)`.

Alternatively, [`GenConfig::generate`] picks the generator for a [`StructureKind`] and scales it
with the level. Size and density never decrease with the level and are capped by the config.

Supported structures:
- Cycles with random chords and wheels
- Clustered graphs and grid graphs, both repaired to be connected
- Layered DAGs
- Bipartite instances
- Perfect mazes

All randomness is drawn from the provided rng, so a seeded rng reproduces a level exactly.
*/

use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::prelude::*;

mod bipartite;
mod clustered;
mod dag;
mod grid;
mod maze;
mod repair;
mod ring;
mod substructures;

pub use bipartite::*;
pub use clustered::*;
pub use dag::*;
pub use grid::*;
pub use maze::*;
pub use repair::*;
pub use ring::*;
pub use substructures::*;

/// Difficulty level of a game; levels `<= 0` are treated as level `1`
pub type Level = i32;

/// Maps degenerate levels (`<= 0`) to the first level
pub fn clamp_level(level: Level) -> Level {
    level.max(1)
}

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that draw random edge weights.
pub trait MaxWeightGen {
    /// Weights are drawn uniformly from `1..=max_weight`.
    /// A maximum of `1` (or `0`) yields unweighted graphs with [`DEFAULT_WEIGHT`] on every edge.
    fn max_weight(self, max_weight: Weight) -> Self;
}

/// General trait for a configured random structure generator.
pub trait StructureGenerator: Sized {
    /// The generated structure
    type Output;

    /// Creates a generator whose size and density are scaled by `level`
    fn for_level(level: Level, config: &GenConfig) -> Self;

    /// Generates a random structure.
    fn generate<R>(&self, rng: &mut R) -> Self::Output
    where
        R: Rng;
}

/// Level scaling and caps shared by all generators
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenConfig {
    /// Number of nodes on level 1
    pub min_nodes: NumNodes,
    /// Upper bound on the number of nodes for all levels.
    /// Kinds that need more nodes than this use their [`StructureKind::min_nodes`].
    pub max_nodes: NumNodes,
    /// Edge weights are drawn from `1..=max_weight`
    pub max_weight: Weight,
    /// If *false*, every edge has weight [`DEFAULT_WEIGHT`]
    pub weighted: bool,
    /// Upper bound on the number of maze cells per side; mazes have at least two
    pub max_maze_cells: NumNodes,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            min_nodes: 5,
            max_nodes: 25,
            max_weight: 9,
            weighted: true,
            max_maze_cells: 12,
        }
    }
}

impl GenConfig {
    /// Creates the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed levels before `level`
    fn steps(level: Level) -> NumNodes {
        (clamp_level(level) - 1) as NumNodes
    }

    /// Number of nodes on `level`: one more per level, starting at `min_nodes`,
    /// capped at `max_nodes`
    pub fn nodes_for_level(&self, level: Level) -> NumNodes {
        self.min_nodes
            .saturating_add(Self::steps(level))
            .min(self.max_nodes)
            .max(1)
    }

    /// Base edge density on `level`, growing slowly from `0.1` to at most `0.5`
    pub fn density_for_level(&self, level: Level) -> f64 {
        (0.1 + 0.02 * Self::steps(level) as f64).min(0.5)
    }

    /// Number of maze cells per side on `level`, capped at `max_maze_cells`
    pub fn maze_cells_for_level(&self, level: Level) -> NumNodes {
        (3 + Self::steps(level) / 2).min(self.max_maze_cells).max(2)
    }

    /// Largest weight a generator may draw
    pub fn effective_max_weight(&self) -> Weight {
        if self.weighted {
            self.max_weight.max(DEFAULT_WEIGHT)
        } else {
            DEFAULT_WEIGHT
        }
    }

    /// Generates a structure of the given kind for `level`.
    /// Generation is total: every level and kind yields a well-formed structure.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*, gens::*};
    /// use rand::SeedableRng;
    ///
    /// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(1);
    /// let config = GenConfig::default();
    ///
    /// let Structure::Undirected(level) = config.generate(StructureKind::Grid, 3, rng) else {
    ///     panic!("grids are undirected");
    /// };
    /// assert!(level.graph.is_connected());
    /// assert_eq!(level.positions.len(), level.graph.len());
    /// ```
    pub fn generate<R>(&self, kind: StructureKind, level: Level, rng: &mut R) -> Structure
    where
        R: Rng,
    {
        debug!(
            "generating {kind:?} for level {level}: {} nodes, density {:.2}",
            self.nodes_for_level(level),
            self.density_for_level(level)
        );

        match kind {
            StructureKind::Cycle => {
                Structure::Undirected(CycleGen::for_level(level, self).generate(rng))
            }
            StructureKind::Wheel => {
                Structure::Undirected(WheelGen::for_level(level, self).generate(rng))
            }
            StructureKind::Clustered => {
                Structure::Undirected(ClusteredGen::for_level(level, self).generate(rng))
            }
            StructureKind::Grid => {
                Structure::Undirected(GridGen::for_level(level, self).generate(rng))
            }
            StructureKind::LayeredDag => {
                Structure::Directed(LayeredDagGen::for_level(level, self).generate(rng))
            }
            StructureKind::Maze => Structure::Maze(MazeGen::for_level(level, self).generate(rng)),
            StructureKind::Bipartite => {
                Structure::Bipartite(BipartiteGen::for_level(level, self).generate(rng))
            }
        }
    }
}

/// Kinds of structures a game can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StructureKind {
    /// A ring with random chords
    Cycle,
    /// A hub connected to every node of a ring
    Wheel,
    /// Dense clusters joined by few edges
    Clustered,
    /// A grid lattice with randomly present edges
    Grid,
    /// A DAG whose edges only lead to later layers
    LayeredDag,
    /// A perfect maze
    Maze,
    /// Two partitions with edges only across
    Bipartite,
}

impl StructureKind {
    /// All kinds in declaration order
    pub const ALL: [StructureKind; 7] = [
        StructureKind::Cycle,
        StructureKind::Wheel,
        StructureKind::Clustered,
        StructureKind::Grid,
        StructureKind::LayeredDag,
        StructureKind::Maze,
        StructureKind::Bipartite,
    ];

    /// Smallest number of nodes a generated structure of this kind has, regardless of
    /// [`GenConfig::max_nodes`]. For mazes this is the smallest grid of [`Maze::to_graph`].
    pub fn min_nodes(&self) -> NumNodes {
        match self {
            StructureKind::Cycle => 3,
            StructureKind::Wheel => 4,
            StructureKind::Bipartite => 2,
            StructureKind::Maze => MIN_MAZE_DIM * MIN_MAZE_DIM,
            StructureKind::Clustered | StructureKind::Grid | StructureKind::LayeredDag => 1,
        }
    }
}

/// A generated structure as returned by [`GenConfig::generate`]
#[derive(Debug, Clone, PartialEq)]
pub enum Structure {
    /// Connected undirected graph
    Undirected(GeneratedGraph<UndirectedGraph>),
    /// Directed acyclic graph
    Directed(GeneratedGraph<DirectedGraph>),
    /// Bipartite matching instance
    Bipartite(BipartiteInstance),
    /// Perfect maze
    Maze(Maze),
}

/// 2D display position in the unit square, assigned at generation time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance; sufficient for nearest-neighbour comparisons
    pub fn distance_sq(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance
    pub fn distance(&self, other: &Position) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// `n` positions evenly spaced on a circle, starting at the top
    pub fn on_circle(center: Position, radius: f64, n: NumNodes) -> impl Iterator<Item = Position> {
        (0..n).map(move |i| {
            let angle =
                std::f64::consts::TAU * i as f64 / n.max(1) as f64 - std::f64::consts::FRAC_PI_2;
            Position::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
    }
}

/// A generated graph with one display position per node
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedGraph<G> {
    pub graph: G,
    pub positions: Vec<Position>,
}

/// Draws edge weights uniformly from `1..=max_weight`
#[derive(Debug, Clone, Copy)]
pub(crate) struct WeightSampler {
    dist: Option<Uniform<Weight>>,
}

impl WeightSampler {
    pub(crate) fn new(max_weight: Weight) -> Self {
        Self {
            dist: (max_weight > DEFAULT_WEIGHT)
                .then(|| Uniform::new_inclusive(DEFAULT_WEIGHT, max_weight).ok())
                .flatten(),
        }
    }

    pub(crate) fn sample<R: Rng>(&self, rng: &mut R) -> Weight {
        self.dist.as_ref().map_or(DEFAULT_WEIGHT, |d| d.sample(rng))
    }
}
