//! Disjoint-set forest over dense station indices.
//!
//! Uses path compression and union by rank for near O(1) amortized
//! operations.

/// Union-find structure over the indices `0..len`.
#[derive(Debug, Clone)]
pub(crate) struct DisjointSet {
    /// Parent pointers; a root is its own parent.
    parent: Vec<usize>,
    /// Upper bound on tree height, meaningful only for roots.
    rank: Vec<u32>,
    num_sets: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            num_sets: len,
        }
    }

    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Finds the representative of `x`'s set, pointing every node on the
    /// walked path directly at it.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`.  Returns false if they were
    /// already the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        self.num_sets -= 1;
        true
    }
}
