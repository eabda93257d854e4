/*!
# Mazes

A maze is a `width x height` grid of coordinates where both dimensions are odd.
Coordinates with two odd components are *cells*, all others are *walls* unless carved open.
A [perfect maze](https://en.wikipedia.org/wiki/Maze_generation_algorithm) has exactly one
path between any two cells.

[`MazeGen`] carves by randomized depth-first backtracking on an explicit stack: from the current
cell, the wall towards a random unvisited cell two coordinates away is knocked down; if no such
cell exists, the generator backtracks.
*/

use std::fmt::{Display, Formatter};

use log::debug;
use rand::seq::IndexedRandom;

use super::*;
use crate::algo::Traversal;

/// Smallest supported grid dimension (two cells)
pub const MIN_MAZE_DIM: NumNodes = 5;

/// A grid coordinate `(x, y)`
pub type Coord = (NumNodes, NumNodes);

/// A carved maze. The start is the top left cell, the end the bottom right cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    width: NumNodes,
    height: NumNodes,
    open: Vec<bool>,
}

impl Maze {
    /// Creates a maze where every coordinate is a wall.
    /// Dimensions are clamped to the nearest valid odd size of at least [`MIN_MAZE_DIM`].
    pub fn walled(width: NumNodes, height: NumNodes) -> Self {
        let (width, height) = (clamp_dim(width), clamp_dim(height));
        Self {
            width,
            height,
            open: vec![false; (width * height) as usize],
        }
    }

    pub fn width(&self) -> NumNodes {
        self.width
    }

    pub fn height(&self) -> NumNodes {
        self.height
    }

    /// Number of cells per row
    pub fn cells_wide(&self) -> NumNodes {
        self.width / 2
    }

    /// Number of cells per column
    pub fn cells_high(&self) -> NumNodes {
        self.height / 2
    }

    pub fn start(&self) -> Coord {
        (1, 1)
    }

    pub fn end(&self) -> Coord {
        (self.width - 2, self.height - 2)
    }

    /// Returns *true* if `(x, y)` is a cell coordinate
    pub fn is_cell(&self, (x, y): Coord) -> bool {
        x < self.width && y < self.height && x % 2 == 1 && y % 2 == 1
    }

    /// Returns *true* if `(x, y)` was carved open; coordinates outside the grid are walls
    pub fn is_open(&self, (x, y): Coord) -> bool {
        x < self.width && y < self.height && self.open[self.index((x, y))]
    }

    /// Number of open coordinates
    pub fn number_of_open(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    /// Node of `(x, y)` in [`Maze::to_graph`]
    pub fn node_of(&self, (x, y): Coord) -> Node {
        y * self.width + x
    }

    /// Coordinate of node `u` in [`Maze::to_graph`]
    pub fn coord_of(&self, u: Node) -> Coord {
        (u % self.width, u / self.width)
    }

    /// Returns one node per coordinate with unit-weight edges between orthogonally adjacent open
    /// coordinates. Walls are isolated nodes.
    pub fn to_graph(&self) -> UndirectedGraph {
        let mut graph = UndirectedGraph::new(self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.is_open((x, y)) {
                    continue;
                }
                let u = self.node_of((x, y));
                if self.is_open((x + 1, y)) {
                    graph.add_edge(u, self.node_of((x + 1, y)), DEFAULT_WEIGHT);
                }
                if self.is_open((x, y + 1)) {
                    graph.add_edge(u, self.node_of((x, y + 1)), DEFAULT_WEIGHT);
                }
            }
        }
        graph
    }

    /// Returns *true* if the end can be reached from the start
    pub fn is_solvable(&self) -> bool {
        self.is_open(self.start())
            && self
                .to_graph()
                .is_reachable(self.node_of(self.start()), self.node_of(self.end()))
                .unwrap_or(false)
    }

    /// Returns the coordinates of a shortest path from the start to the end; empty if unsolvable
    pub fn solution(&self) -> Vec<Coord> {
        let (start, end) = (self.node_of(self.start()), self.node_of(self.end()));
        match self.to_graph().bfs_trace(start, end) {
            Ok(outcome) => outcome.path.into_iter().map(|u| self.coord_of(u)).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Clears a straight corridor from `from` along its row to the column of `to`,
    /// then along that column to `to`.
    pub fn clear_corridor(&mut self, from: Coord, to: Coord) {
        let (fx, fy) = from;
        let (tx, ty) = to;
        for x in fx.min(tx)..=fx.max(tx) {
            self.set_open((x, fy));
        }
        for y in fy.min(ty)..=fy.max(ty) {
            self.set_open((tx, y));
        }
    }

    fn index(&self, (x, y): Coord) -> usize {
        (y * self.width + x) as usize
    }

    fn set_open(&mut self, coord: Coord) {
        let idx = self.index(coord);
        self.open[idx] = true;
    }
}

impl Display for Maze {
    /// Renders walls as `#` and open coordinates as spaces, one row per line
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", if self.is_open((x, y)) { ' ' } else { '#' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Maps a dimension to the nearest valid odd size of at least [`MIN_MAZE_DIM`]
fn clamp_dim(d: NumNodes) -> NumNodes {
    if d < MIN_MAZE_DIM {
        MIN_MAZE_DIM
    } else if d % 2 == 0 {
        d - 1
    } else {
        d
    }
}

/// Perfect maze generator
#[derive(Debug, Copy, Clone)]
pub struct MazeGen {
    width: NumNodes,
    height: NumNodes,
}

impl Default for MazeGen {
    fn default() -> Self {
        Self {
            width: MIN_MAZE_DIM,
            height: MIN_MAZE_DIM,
        }
    }
}

impl MazeGen {
    /// Creates a new generator for the smallest maze
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the grid dimensions.
    /// Even or too small dimensions are clamped to the nearest valid odd size.
    pub fn dims(mut self, width: NumNodes, height: NumNodes) -> Self {
        self.width = clamp_dim(width);
        self.height = clamp_dim(height);
        self
    }

    /// Updates the grid dimensions from the number of cells per row and column
    pub fn cells(self, wide: NumNodes, high: NumNodes) -> Self {
        self.dims(2 * wide + 1, 2 * high + 1)
    }

    /// Returns the grid dimensions `(width, height)`
    pub fn dimensions(&self) -> (NumNodes, NumNodes) {
        (self.width, self.height)
    }
}

impl StructureGenerator for MazeGen {
    type Output = Maze;

    fn for_level(level: Level, config: &GenConfig) -> Self {
        let cells = config.maze_cells_for_level(level);
        Self::new().cells(cells, cells)
    }

    fn generate<R>(&self, rng: &mut R) -> Self::Output
    where
        R: Rng,
    {
        let mut maze = Maze::walled(self.width, self.height);
        let (wide, high) = (maze.cells_wide(), maze.cells_high());
        let to_coord = |(cx, cy): Coord| (2 * cx + 1, 2 * cy + 1);

        let mut visited = vec![false; (wide * high) as usize];
        let mut stack: Vec<Coord> = vec![(0, 0)];
        visited[0] = true;
        maze.set_open(to_coord((0, 0)));

        while let Some(&(cx, cy)) = stack.last() {
            let unvisited: Vec<Coord> = [
                (cx.wrapping_sub(1), cy),
                (cx + 1, cy),
                (cx, cy.wrapping_sub(1)),
                (cx, cy + 1),
            ]
            .into_iter()
            .filter(|&(nx, ny)| nx < wide && ny < high)
            .filter(|&(nx, ny)| !visited[(ny * wide + nx) as usize])
            .collect();

            let Some(&next) = unvisited.choose(rng) else {
                stack.pop();
                continue;
            };

            let (x, y) = to_coord((cx, cy));
            let (nx, ny) = to_coord(next);
            maze.set_open(((x + nx) / 2, (y + ny) / 2));
            maze.set_open((nx, ny));

            visited[(next.1 * wide + next.0) as usize] = true;
            stack.push(next);
        }

        if !maze.is_solvable() {
            debug!("maze end is unreachable, clearing a direct corridor");
            maze.clear_corridor(maze.end(), maze.start());
        }

        debug!("carved a {}x{} maze", maze.width(), maze.height());
        maze
    }
}
