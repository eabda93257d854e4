/*!
# Connectivity Repair

Random edge sampling may leave a graph disconnected. [`repair_connectivity`] adds edges between
positionally close nodes until the graph is connected:

1. every isolated node is attached to its nearest node (ties: lowest id),
2. the component of node `0` is repeatedly joined to the nearest node outside of it.

The first pass reduces the number of isolated nodes and the second the number of components
with every added edge, so both terminate.
*/

use log::debug;

use super::*;
use crate::algo::Traversal;

/// Adds edges until `graph` is connected and returns the number of added edges.
/// New edges receive a weight drawn from `1..=max_weight`.
///
/// ** Panics if `positions.len() != graph.len()` **
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*, gens::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(1);
/// let positions = [Position::new(0.0, 0.0), Position::new(1.0, 0.0), Position::new(5.0, 0.0)];
///
/// let mut g = UndirectedGraph::new(3);
/// assert_eq!(repair_connectivity(rng, &mut g, &positions, 1), 2);
///
/// assert!(g.is_connected());
/// assert!(g.has_edge(0, 1) && g.has_edge(2, 1));
/// ```
pub fn repair_connectivity<R>(
    rng: &mut R,
    graph: &mut UndirectedGraph,
    positions: &[Position],
    max_weight: Weight,
) -> NumEdges
where
    R: Rng,
{
    assert_eq!(
        positions.len(),
        graph.len(),
        "Every node requires a position!"
    );
    if graph.len() < 2 {
        return 0;
    }

    let weights = WeightSampler::new(max_weight);
    let mut added = 0;

    for u in graph.vertices() {
        if !graph.is_isolated(u) {
            continue;
        }

        let candidates = graph.vertices().filter(|&v| v != u);
        let Some(v) = nearest(candidates, &positions[u as usize], positions) else {
            continue;
        };

        debug!("repair attaches isolated node {u} to nearest node {v}");
        graph.add_edge(u, v, weights.sample(rng));
        added += 1;
    }

    loop {
        let mut component = graph.vertex_bitset_unset();
        for u in graph.bfs(0) {
            component.set_bit(u);
        }

        if component.cardinality() as usize == graph.len() {
            break;
        }

        // nearest pair (inside, outside); ties by lowest outside id, then lowest inside id
        let Some((_, inside, outside)) = graph
            .vertices()
            .filter(|&b| !component.get_bit(b))
            .flat_map(|b| component.iter_set_bits().map(move |a| (a, b)))
            .map(|(a, b)| {
                let d = positions[a as usize].distance_sq(&positions[b as usize]);
                (d, a, b)
            })
            .min_by(|x, y| x.0.total_cmp(&y.0))
        else {
            break;
        };

        debug!("repair joins component of node 0 via {inside} -> {outside}");
        graph.add_edge(inside, outside, weights.sample(rng));
        added += 1;
    }

    added
}

/// Returns the candidate closest to `target`; the first one wins among equally close candidates
fn nearest<I>(candidates: I, target: &Position, positions: &[Position]) -> Option<Node>
where
    I: Iterator<Item = Node>,
{
    candidates
        .map(|v| (positions[v as usize].distance_sq(target), v))
        .min_by(|x, y| x.0.total_cmp(&y.0))
        .map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn line(n: NumNodes) -> Vec<Position> {
        (0..n).map(|i| Position::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn connected_graphs_are_untouched() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let mut g = UndirectedGraph::from_edges(3, [(0, 2), (2, 1)]);
        assert_eq!(repair_connectivity(rng, &mut g, &line(3), 5), 0);
        assert_eq!(g.number_of_edges(), 2);
    }

    #[test]
    fn trivial_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        assert_eq!(
            repair_connectivity(rng, &mut UndirectedGraph::new(0), &[], 5),
            0
        );
        assert_eq!(
            repair_connectivity(rng, &mut UndirectedGraph::new(1), &line(1), 5),
            0
        );
    }

    #[test]
    fn isolated_nodes_attach_to_nearest() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        // node 3 is equally close to 2 and 4; the lower id wins
        let mut g = UndirectedGraph::from_edges(5, [(0, 1), (1, 2)]);
        let added = repair_connectivity(rng, &mut g, &line(5), 1);

        assert_eq!(added, 2);
        assert!(g.has_edge(3, 2));
        assert!(g.has_edge(4, 3));
        assert!(g.is_connected());
    }

    #[test]
    fn components_are_joined() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        // {0, 1} and {2, 3} far apart, {4, 5} close to 0
        let positions = [
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(10.0, 0.0),
            Position::new(11.0, 0.0),
            Position::new(0.0, 2.0),
            Position::new(0.0, 3.0),
        ];
        let mut g = UndirectedGraph::from_edges(6, [(0, 1), (2, 3), (4, 5)]);
        let added = repair_connectivity(rng, &mut g, &positions, 3);

        assert_eq!(added, 2);
        assert!(g.has_edge(0, 4));
        assert!(g.has_edge(1, 2));
        assert!(g.is_connected());
        assert!(g.edges().all(|e| (1..=3).contains(&e.weight())));
    }

    #[test]
    fn random_graphs_become_connected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        for n in 2..30 {
            let positions: Vec<_> = (0..n)
                .map(|_| Position::new(rng.random(), rng.random()))
                .collect();
            let mut g = crate::testing::random_graph(rng, n, 0.05, 4);
            repair_connectivity(rng, &mut g, &positions, 4);

            assert!(g.is_connected());
            assert!(g.edges().all(|e| !e.is_loop()));
        }
    }
}
