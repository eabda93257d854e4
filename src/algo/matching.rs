/*!
# Matching Algorithms

This module provides algorithms for computing **weighted matchings** in bipartite graphs.

Bipartite graphs are given as edge lists where every `WeightedEdge(l, r, w)` joins the left node
`l` to the right node `r`. Left and right ids live in separate id spaces, i.e. the left node `0`
and the right node `0` are distinct.

- [`greedy_weighted_matching`] considers edges by descending weight and accepts every edge whose
  endpoints are still free. This is a heuristic: the result is a maximal matching with at
  least half the weight of an optimal one, but it is not necessarily optimal.
- [`maximum_weight_matching`] computes an optimal matching with the Hungarian method.

A *matching* is a set of edges without shared endpoints.
*/

use std::cmp::Reverse;

use fxhash::{FxHashMap, FxHashSet};
use log::debug;

use super::*;

/// A set of pairwise disjoint left/right edges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchingResult {
    /// Accepted edges as `(left, right, weight)`
    pub edges: Vec<WeightedEdge>,
    /// Sum of the weights of all accepted edges
    pub total_weight: Distance,
}

impl MatchingResult {
    /// Number of matched pairs
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns *true* if no pair was matched
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the right partner of the left node `l`, if matched
    pub fn partner_of_left(&self, l: Node) -> Option<Node> {
        self.edges.iter().find(|e| e.0 == l).map(|e| e.1)
    }

    /// Returns the left partner of the right node `r`, if matched
    pub fn partner_of_right(&self, r: Node) -> Option<Node> {
        self.edges.iter().find(|e| e.1 == r).map(|e| e.0)
    }

    fn from_edges(edges: Vec<WeightedEdge>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight() as Distance).sum();
        Self {
            edges,
            total_weight,
        }
    }
}

/// Returns *true* if no two edges share a left or a right endpoint
pub fn is_matching(edges: &[WeightedEdge]) -> bool {
    let mut left = FxHashSet::default();
    let mut right = FxHashSet::default();
    edges.iter().all(|e| left.insert(e.0) && right.insert(e.1))
}

/// Greedy maximum-weight matching heuristic.
///
/// Edges are stably sorted by descending weight, so ties are broken by input order.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let edges = [WeightedEdge(0, 0, 3), WeightedEdge(0, 1, 2), WeightedEdge(1, 0, 2)];
///
/// let greedy = greedy_weighted_matching(&edges);
/// assert_eq!(greedy.edges, vec![WeightedEdge(0, 0, 3)]);
///
/// // the greedy choice is not optimal
/// assert_eq!(maximum_weight_matching(&edges).total_weight, 4);
/// ```
pub fn greedy_weighted_matching(edges: &[WeightedEdge]) -> MatchingResult {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|e| Reverse(e.weight()));

    let mut left = FxHashSet::default();
    let mut right = FxHashSet::default();

    let mut accepted = Vec::new();
    for e in sorted {
        if !left.contains(&e.0) && !right.contains(&e.1) {
            left.insert(e.0);
            right.insert(e.1);
            accepted.push(e);
        }
    }

    let matching = MatchingResult::from_edges(accepted);

    debug!(
        "greedy matching accepted {} of {} edges with total weight {}",
        matching.len(),
        edges.len(),
        matching.total_weight
    );
    matching
}

/// Exact maximum-weight matching via the Hungarian method.
///
/// Edges are returned in order of first appearance of their left endpoint in `edges`.
/// Zero-weight edges may or may not be part of the result.
pub fn maximum_weight_matching(edges: &[WeightedEdge]) -> MatchingResult {
    let mut left_ids = FxHashMap::default();
    let mut right_ids = FxHashMap::default();
    let mut left_nodes = Vec::new();
    for e in edges {
        left_ids.entry(e.0).or_insert_with(|| {
            left_nodes.push(e.0);
            left_nodes.len() - 1
        });
        let next_right = right_ids.len();
        right_ids.entry(e.1).or_insert(next_right);
    }

    // square weight matrix; missing pairs are padded with weight 0
    let k = left_ids.len().max(right_ids.len());
    let mut best: Vec<Vec<Option<WeightedEdge>>> = vec![vec![None; k]; k];
    for &e in edges {
        let cell = &mut best[left_ids[&e.0]][right_ids[&e.1]];
        if cell.as_ref().is_none_or(|c| c.weight() < e.weight()) {
            *cell = Some(e);
        }
    }

    let max_weight = edges.iter().map(|e| e.weight() as i64).max().unwrap_or(0);
    let cost = best
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| max_weight - cell.map_or(0, |e| e.weight() as i64))
                .collect()
        })
        .collect::<Vec<Vec<i64>>>();

    let assignment = hungarian(&cost);
    let matching = MatchingResult::from_edges(
        (0..left_nodes.len())
            .filter_map(|i| best[i][assignment[i]])
            .collect(),
    );

    debug_assert!(is_matching(&matching.edges));
    debug!(
        "maximum matching of {} left nodes has total weight {}",
        left_nodes.len(),
        matching.total_weight
    );
    matching
}

/// Minimum-cost perfect assignment on a square cost matrix using potentials.
/// Returns the column assigned to every row.
fn hungarian(cost: &[Vec<i64>]) -> Vec<usize> {
    let n = cost.len();

    // 1-indexed; column 0 is a virtual column
    let mut row_pot = vec![0i64; n + 1];
    let mut col_pot = vec![0i64; n + 1];
    let mut row_of_col = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for i in 1..=n {
        row_of_col[0] = i;
        let mut j0 = 0;
        let mut min_slack = vec![i64::MAX; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[j0] = true;
            let i0 = row_of_col[j0];
            let mut delta = i64::MAX;
            let mut j1 = 0;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let slack = cost[i0 - 1][j - 1] - row_pot[i0] - col_pot[j];
                if slack < min_slack[j] {
                    min_slack[j] = slack;
                    way[j] = j0;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    j1 = j;
                }
            }

            for j in 0..=n {
                if used[j] {
                    row_pot[row_of_col[j]] += delta;
                    col_pot[j] -= delta;
                } else {
                    min_slack[j] -= delta;
                }
            }

            j0 = j1;
            if row_of_col[j0] == 0 {
                break;
            }
        }

        // augment along the alternating path
        while j0 != 0 {
            let j1 = way[j0];
            row_of_col[j0] = row_of_col[j1];
            j0 = j1;
        }
    }

    let mut assignment = vec![0; n];
    for j in 1..=n {
        if row_of_col[j] != 0 {
            assignment[row_of_col[j] - 1] = j - 1;
        }
    }
    assignment
}

/// Matchings on undirected graphs with a known bipartition
pub trait Matching: GraphEdgeOrder + GraphType<Dir = Undirected> {
    /// Returns all edges oriented from the nodes in `left` to the nodes outside of it.
    /// Edges within one side are skipped.
    fn left_right_edges(&self, left: &NodeBitSet) -> Vec<WeightedEdge> {
        self.edges()
            .filter_map(|e| match (left.get_bit(e.0), left.get_bit(e.1)) {
                (true, false) => Some(e),
                (false, true) => Some(e.reverse()),
                _ => None,
            })
            .collect()
    }

    /// Runs [`greedy_weighted_matching`] on the edges between `left` and the remaining nodes.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// // left side {0, 1}, right side {2, 3}
    /// let g = UndirectedGraph::from_edges(4, [(2, 0, 5), (0, 3, 1), (1, 3, 4)]);
    /// let left = NodeBitSet::new_with_bits_set(4, [0 as Node, 1]);
    ///
    /// let matching = g.greedy_bipartite_matching(&left);
    /// assert_eq!(matching.edges, vec![WeightedEdge(0, 2, 5), WeightedEdge(1, 3, 4)]);
    /// assert_eq!(matching.total_weight, 9);
    /// ```
    fn greedy_bipartite_matching(&self, left: &NodeBitSet) -> MatchingResult {
        greedy_weighted_matching(&self.left_right_edges(left))
    }

    /// Runs [`maximum_weight_matching`] on the edges between `left` and the remaining nodes.
    fn maximum_bipartite_matching(&self, left: &NodeBitSet) -> MatchingResult {
        maximum_weight_matching(&self.left_right_edges(left))
    }
}

impl<G> Matching for G where G: GraphEdgeOrder + GraphType<Dir = Undirected> {}
