/*!
# Union-Find

A disjoint-set forest over the nodes `0..n` with path compression and union by size.
`find` and `union` run in amortized near-constant time.
*/

use super::*;

/// Disjoint-set forest over `0..n`
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
    num_sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n - 1}`
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
            num_sets: n,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if there are no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }

    /// Returns the representative of the set containing `x` and points every
    /// node on the way directly to it.
    /// ** Panics if `x >= n` **
    pub fn find(&mut self, x: Node) -> Node {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = x;
        while node != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`.
    /// Returns *false* if both already were in the same set.
    /// ** Panics if `x >= n || y >= n` **
    pub fn union(&mut self, x: Node, y: Node) -> bool {
        let mut rx = self.find(x);
        let mut ry = self.find(y);
        if rx == ry {
            return false;
        }

        if self.size[rx as usize] < self.size[ry as usize] {
            std::mem::swap(&mut rx, &mut ry);
        }

        self.parent[ry as usize] = rx;
        self.size[rx as usize] += self.size[ry as usize];
        self.num_sets -= 1;
        true
    }

    /// Returns *true* if `x` and `y` are in the same set, i.e. if an edge `{x, y}`
    /// would close a cycle among the edges united so far.
    /// ** Panics if `x >= n || y >= n` **
    pub fn same_set(&mut self, x: Node, y: Node) -> bool {
        self.find(x) == self.find(y)
    }

    /// Size of the set containing `x`
    /// ** Panics if `x >= n` **
    pub fn set_size(&mut self, x: Node) -> NumNodes {
        let root = self.find(x);
        self.size[root as usize]
    }
}

impl FromIterator<Edge> for UnionFind {
    /// Creates the partition into connected components of the given edges.
    /// The number of elements is one more than the largest endpoint.
    fn from_iter<T: IntoIterator<Item = Edge>>(iter: T) -> Self {
        let edges: Vec<Edge> = iter.into_iter().collect();
        let n = edges.iter().map(|e| e.0.max(e.1) + 1).max().unwrap_or(0);

        let mut uf = Self::new(n);
        for Edge(u, v) in edges {
            uf.union(u, v);
        }
        uf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn singletons() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.number_of_sets(), 5);
        for u in 0..5 {
            assert_eq!(uf.find(u), u);
            assert_eq!(uf.set_size(u), 1);
        }
    }

    #[test]
    fn union_reports_merges() {
        let mut uf = UnionFind::new(6);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 3));
        assert!(!uf.union(0, 2));
        assert!(!uf.union(4, 4));

        assert_eq!(uf.number_of_sets(), 3);
        assert!(uf.same_set(0, 3));
        assert!(!uf.same_set(0, 4));
        assert_eq!(uf.set_size(2), 4);
    }

    #[test]
    fn find_is_stable() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let mut uf = UnionFind::new(30);
        for _ in 0..20 {
            uf.union(rng.random_range(0..30), rng.random_range(0..30));
        }

        let reps: Vec<Node> = (0..30).map(|u| uf.find(u)).collect();
        for _ in 0..3 {
            assert_eq!((0..30).map(|u| uf.find(u)).collect::<Vec<_>>(), reps);
        }

        for u in 0..30 {
            assert!(!uf.union(u, u));
        }
        assert_eq!((0..30).map(|u| uf.find(u)).collect::<Vec<_>>(), reps);
    }

    #[test]
    fn from_edges() {
        let mut uf: UnionFind = [Edge(0, 1), Edge(3, 4)].into_iter().collect();
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.number_of_sets(), 3);
        assert!(uf.same_set(4, 3));
        assert!(!uf.same_set(2, 1));
    }
}
