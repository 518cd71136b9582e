//! Disjoint-set forest over a fixed universe of node ids.
//!
//! Ids are mapped once, at construction, onto dense indices; `parent` and
//! `rank` are plain vectors over those indices. The structure lives for one
//! algorithm run and is dropped afterwards.

use crate::error::{GraphError, Result};
use crate::model::NodeId;

const NO_INDEX: u32 = u32::MAX;

#[derive(Clone, Debug)]
pub struct DisjointSet {
    // node slot -> dense index (NO_INDEX when the id is outside the universe)
    index_of: Vec<u32>,
    // dense index -> node id
    ids: Vec<NodeId>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Every id starts as its own singleton set of rank 0. Duplicate ids are
    /// folded into the first occurrence.
    pub fn new<I: IntoIterator<Item = NodeId>>(ids: I) -> Self {
        let mut index_of: Vec<u32> = Vec::new();
        let mut dense: Vec<NodeId> = Vec::new();
        for id in ids {
            let slot = id.slot();
            if slot >= index_of.len() {
                index_of.resize(slot + 1, NO_INDEX);
            }
            if index_of[slot] == NO_INDEX {
                index_of[slot] = dense.len() as u32;
                dense.push(id);
            }
        }
        let n = dense.len();
        DisjointSet {
            index_of,
            ids: dense,
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn index_of(&self, id: NodeId) -> Result<usize> {
        match self.index_of.get(id.slot()) {
            Some(&ix) if ix != NO_INDEX => Ok(ix as usize),
            _ => Err(GraphError::UnknownNodeId { id }),
        }
    }

    /// Representative of `id`'s set. Every node visited on the way up is
    /// re-pointed directly at the root.
    pub fn find(&mut self, id: NodeId) -> Result<NodeId> {
        let ix = self.index_of(id)?;
        let root = self.find_index(ix);
        Ok(self.ids[root])
    }

    /// Merges the sets of `a` and `b`. Returns `false` when they already share
    /// a set, i.e. an edge between them would close a cycle.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> Result<bool> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        Ok(self.union_index(ia, ib))
    }

    pub fn connected(&mut self, a: NodeId, b: NodeId) -> Result<bool> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        Ok(self.find_index(ia) == self.find_index(ib))
    }

    // `ix` must come from `index_of`
    fn find_index(&mut self, mut ix: usize) -> usize {
        let mut root = ix;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[ix] != root {
            let next = self.parent[ix];
            self.parent[ix] = root;
            ix = next;
        }
        root
    }

    fn union_index(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find_index(a);
        let rb = self.find_index(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
        self.sets -= 1;
        true
    }

    #[cfg(test)]
    fn rank_of(&self, id: NodeId) -> u8 {
        self.rank[self.index_of[id.slot()] as usize]
    }

    #[cfg(test)]
    fn parent_of(&self, id: NodeId) -> NodeId {
        self.ids[self.parent[self.index_of[id.slot()] as usize]]
    }
}
