//! Shared helpers for unit tests: random instances and brute-force oracles.

use itertools::Itertools;
use rand::Rng;

use crate::{algo::Connectivity, prelude::*};

/// Every graph should behave like an adjacency list over the edges it was built from
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal) => {
        mod $env {
            use crate::prelude::*;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of at most `m_ub` random loop-free edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<WeightedEdge> {
                let mut edges: Vec<Edge> = (0..m_ub)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);

                        if $undirected {
                            Edge(u, v).normalized()
                        } else {
                            Edge(u, v)
                        }
                    })
                    .filter(|e| !e.is_loop())
                    .collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
                    .into_iter()
                    .map(|e| e.with_weight(rng.random_range(0..10)))
                    .collect()
            }

            #[test]
            fn graph_new() {
                for n in 1..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert!(graph.is_singleton_graph());
                }
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 25] {
                    for m_ub in [n, n * 2, n * 5] {
                        for _ in 0..10 {
                            let edges = random_edges(rng, n, m_ub as NumEdges);
                            let graph = <$graph>::from_edges(n, edges.iter());

                            assert_eq!(graph.number_of_edges() as usize, edges.len());
                            assert_eq!(graph.edges().collect_vec(), edges);

                            let mut degrees = vec![0 as NumNodes; n as usize];
                            for &WeightedEdge(u, v, w) in &edges {
                                degrees[u as usize] += 1;
                                assert_eq!(graph.edge_weight(u, v), Some(w));
                                if $undirected {
                                    degrees[v as usize] += 1;
                                    assert_eq!(graph.edge_weight(v, u), Some(w));
                                }
                            }

                            assert_eq!(graph.degrees().collect_vec(), degrees);
                            for u in graph.vertices() {
                                let nbs = graph.ordered_neighbors_of(u);
                                assert!(nbs.windows(2).all(|w| w[0] < w[1]));
                            }
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Creates a `G(n,p)`-like undirected graph with weights in `1..=max_w`
pub(crate) fn random_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    p: f64,
    max_w: Weight,
) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new(n);
    for (u, v) in (0..n).tuple_combinations() {
        if rng.random_bool(p) {
            graph.add_edge(u, v, rng.random_range(1..=max_w));
        }
    }
    graph
}

/// Same as [`random_graph`] but rejects until the graph is connected
pub(crate) fn random_connected_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    p: f64,
    max_w: Weight,
) -> UndirectedGraph {
    loop {
        let graph = random_graph(rng, n, p, max_w);
        if graph.is_connected() {
            return graph;
        }
    }
}

/// Calls `visit` for every simple path starting at `s` with its hop count and weight
fn for_each_simple_path<G, F>(graph: &G, s: Node, visit: &mut F)
where
    G: AdjacencyList,
    F: FnMut(Node, usize, Distance),
{
    fn recurse<G, F>(
        graph: &G,
        u: Node,
        on_path: &mut Vec<bool>,
        hops: usize,
        dist: Distance,
        visit: &mut F,
    ) where
        G: AdjacencyList,
        F: FnMut(Node, usize, Distance),
    {
        visit(u, hops, dist);
        for (v, w) in graph.weighted_neighbors_of(u) {
            if !on_path[v as usize] {
                on_path[v as usize] = true;
                recurse(graph, v, on_path, hops + 1, dist + w as Distance, visit);
                on_path[v as usize] = false;
            }
        }
    }

    let mut on_path = vec![false; graph.len()];
    on_path[s as usize] = true;
    recurse(graph, s, &mut on_path, 0, 0, visit);
}

/// Minimum number of edges over all paths from `s` to `t`
pub(crate) fn brute_force_hops<G: AdjacencyList>(graph: &G, s: Node, t: Node) -> Option<usize> {
    let mut best = None;
    for_each_simple_path(graph, s, &mut |u, hops, _| {
        if u == t && best.is_none_or(|b| hops < b) {
            best = Some(hops);
        }
    });
    best
}

/// Minimum weight over all paths from `s` to every node
pub(crate) fn brute_force_distances<G: AdjacencyList>(graph: &G, s: Node) -> Vec<Option<Distance>> {
    let mut best = vec![None; graph.len()];
    for_each_simple_path(graph, s, &mut |u, _, dist| {
        let entry: &mut Option<Distance> = &mut best[u as usize];
        if entry.is_none_or(|b| dist < b) {
            *entry = Some(dist);
        }
    });
    best
}

/// Minimum weight over all spanning trees, `None` if the graph is disconnected
pub(crate) fn brute_force_mst_weight(graph: &UndirectedGraph) -> Option<Distance> {
    let n = graph.number_of_nodes();
    let edges = graph.edges().collect_vec();

    edges
        .iter()
        .combinations(n.saturating_sub(1) as usize)
        .filter(|subset| {
            let tree = UndirectedGraph::from_edges(n, subset.iter().copied());
            tree.is_connected()
        })
        .map(|subset| subset.iter().map(|e| e.weight() as Distance).sum())
        .min()
}

/// Maximum total weight over all matchings of a left/right edge list
pub(crate) fn brute_force_matching_weight(edges: &[WeightedEdge]) -> Distance {
    fn recurse(edges: &[WeightedEdge], left: &mut Vec<Node>, right: &mut Vec<Node>) -> Distance {
        let Some((&WeightedEdge(u, v, w), rest)) = edges.split_first() else {
            return 0;
        };

        let mut best = recurse(rest, left, right);
        if !left.contains(&u) && !right.contains(&v) {
            left.push(u);
            right.push(v);
            best = best.max(w as Distance + recurse(rest, left, right));
            left.pop();
            right.pop();
        }
        best
    }

    recurse(edges, &mut Vec::new(), &mut Vec::new())
}
