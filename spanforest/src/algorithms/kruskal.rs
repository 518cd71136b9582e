//! Kruskal's minimum spanning forest.
//!
//! Both public entry points, [`compute_mst`] and
//! [`generate_trace`](crate::algorithms::trace::generate_trace), consume the
//! same [`Decisions`] stream: one accept/reject decision per edge in sorted
//! order, with the running total attached.

use crate::algorithms::disjoint_set::DisjointSet;
use crate::error::{GraphError, Result};
use crate::model::{Edge, EdgeId, NodeId};
use crate::Graph;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstResult {
    /// Accepted edges, in acceptance order.
    pub edges: Vec<Edge>,
    pub total_weight: u64,
    pub fully_connected: bool,
    pub node_count: usize,
    /// Graph version the result was computed from.
    pub graph_version: u64,
}

impl MstResult {
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.iter().map(|e| e.id).collect()
    }

    pub fn contains(&self, id: EdgeId) -> bool {
        self.edges.iter().any(|e| e.id == id)
    }

    /// Drops edges touching `node` (or equal to `edge`) after the graph lost
    /// them, and re-derives the total and connectivity flag.
    pub(crate) fn retain_live(&mut self, removed_node: Option<NodeId>, removed_edge: Option<EdgeId>, node_count: usize) {
        self.edges.retain(|e| {
            removed_node.map_or(true, |n| !e.touches(n)) && removed_edge.map_or(true, |id| e.id != id)
        });
        self.total_weight = self.edges.iter().map(|e| u64::from(e.weight)).sum();
        self.node_count = node_count;
        self.fully_connected = spans(self.edges.len(), node_count);
    }
}

pub(crate) fn spans(accepted: usize, node_count: usize) -> bool {
    accepted + 1 == node_count
}

/// Edges ordered by ascending weight; equal weights keep insertion order.
pub fn sorted_edges(g: &Graph) -> Vec<&Edge> {
    let mut edges: Vec<&Edge> = g.edges().collect();
    edges.sort_by_key(|e| e.weight);
    edges
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision<'g> {
    pub edge: &'g Edge,
    pub accepted: bool,
    /// Running total after this decision.
    pub total_weight: u64,
    /// Edges accepted so far, this one included.
    pub accepted_count: usize,
}

/// Lazily replays Kruskal's scan over a pre-sorted edge list.
pub struct Decisions<'g> {
    sorted: std::vec::IntoIter<&'g Edge>,
    sets: DisjointSet,
    total_weight: u64,
    accepted_count: usize,
}

impl<'g> Decisions<'g> {
    /// Fails with `InsufficientNodes` below two nodes.
    pub fn new(g: &'g Graph, sorted: Vec<&'g Edge>) -> Result<Self> {
        let found = g.node_count();
        if found < 2 {
            return Err(GraphError::InsufficientNodes { found });
        }
        Ok(Decisions {
            sorted: sorted.into_iter(),
            sets: DisjointSet::new(g.nodes().map(|n| n.id)),
            total_weight: 0,
            accepted_count: 0,
        })
    }

    /// Number of disjoint components left after the decisions taken so far.
    pub fn components(&self) -> usize {
        self.sets.set_count()
    }
}

impl<'g> Iterator for Decisions<'g> {
    type Item = Result<Decision<'g>>;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.sorted.next()?;
        let merged = match self.sets.union(edge.source, edge.target) {
            Ok(m) => m,
            Err(e) => return Some(Err(e)),
        };
        if merged {
            self.total_weight += u64::from(edge.weight);
            self.accepted_count += 1;
        }
        Some(Ok(Decision {
            edge,
            accepted: merged,
            total_weight: self.total_weight,
            accepted_count: self.accepted_count,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sorted.size_hint()
    }
}

/// Minimum spanning forest of the current graph snapshot.
///
/// The scan stops as soon as `node_count - 1` edges are accepted. A
/// disconnected graph is not an error: the result is a partial forest with
/// `fully_connected == false`.
pub fn compute_mst(g: &Graph) -> Result<MstResult> {
    let decisions = Decisions::new(g, sorted_edges(g))?;
    let node_count = g.node_count();
    let target = node_count - 1;
    let mut edges = Vec::with_capacity(target);
    let mut total_weight = 0;
    for d in decisions {
        let d = d?;
        if !d.accepted {
            continue;
        }
        edges.push(*d.edge);
        total_weight = d.total_weight;
        if d.accepted_count == target {
            break;
        }
    }
    let fully_connected = spans(edges.len(), node_count);
    log::debug!(
        "mst: nodes={} edges={} accepted={} total_weight={} fully_connected={}",
        node_count,
        g.edge_count(),
        edges.len(),
        total_weight,
        fully_connected
    );
    Ok(MstResult {
        edges,
        total_weight,
        fully_connected,
        node_count,
        graph_version: g.version(),
    })
}
