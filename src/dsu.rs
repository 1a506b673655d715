//! Disjoint-set-union over the nodes of one graph, with path
//! compression and union by rank.

use crate::error::Result;
use crate::graph::NodeIndex;

#[derive(Debug, Clone)]
pub struct DisjointSetUnion {
    index: NodeIndex,
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
    operations: u64,
}

impl DisjointSetUnion {
    /// Every node starts out as its own singleton set with rank 0.
    pub fn new<S: AsRef<str>>(nodes: &[S]) -> Result<DisjointSetUnion> {
        let index = NodeIndex::from_nodes(nodes)?;
        Ok(Self::from_index(index))
    }

    pub fn from_index(index: NodeIndex) -> DisjointSetUnion {
        let num_nodes = index.len();

        DisjointSetUnion {
            index,
            parent: (0..num_nodes).collect(),
            rank: vec![0; num_nodes],
            sets: num_nodes,
            operations: 0,
        }
    }

    /// Returns the representative of the set containing `node`.
    pub fn find(&mut self, node: &str) -> Result<&str> {
        let ix = self.index.get(node)?;
        let root = self.find_ix(ix);
        Ok(self.index.name(root))
    }

    /// Merges the sets containing `a` and `b`. Returns `false` if they
    /// already were in the same set.
    pub fn union(&mut self, a: &str, b: &str) -> Result<bool> {
        let a_ix = self.index.get(a)?;
        let b_ix = self.index.get(b)?;
        Ok(self.union_ix(a_ix, b_ix))
    }

    pub fn same_set(&mut self, a: &str, b: &str) -> Result<bool> {
        let a_ix = self.index.get(a)?;
        let b_ix = self.index.get(b)?;
        Ok(self.find_ix(a_ix) == self.find_ix(b_ix))
    }

    pub(crate) fn find_ix(&mut self, ix: usize) -> usize {
        self.operations += 1;

        let mut root = ix;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = ix;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    pub(crate) fn union_ix(&mut self, a: usize, b: usize) -> bool {
        self.operations += 1;

        let a_root = self.find_ix(a);
        let b_root = self.find_ix(b);
        if a_root == b_root {
            return false;
        }

        let a_rank = self.rank[a_root];
        let b_rank = self.rank[b_root];

        if a_rank > b_rank {
            self.parent[b_root] = a_root;
        } else if a_rank < b_rank {
            self.parent[a_root] = b_root;
        } else {
            self.parent[b_root] = a_root;
            self.rank[a_root] += 1;
        }

        self.sets -= 1;
        true
    }

    /// Number of `find` and `union` calls so far. A `union` also counts
    /// the two `find`s it performs.
    pub fn operations_performed(&self) -> u64 {
        self.operations
    }

    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub(crate) fn index(&self) -> &NodeIndex {
        &self.index
    }
}
