pub mod error;
pub mod limits;
pub mod model;
pub mod presets;
pub mod algorithms {
    pub mod disjoint_set;
    pub mod kruskal;
    pub mod picking;
    pub mod trace;
}

pub use algorithms::kruskal::{compute_mst, MstResult};
pub use algorithms::trace::{generate_trace, Step, StepEdge, Trace};
pub use error::{GraphError, Result};
pub use model::{Edge, EdgeId, Node, NodeId};
pub use presets::Preset;

use model::{label_for_index, EdgeArrays, NodeArrays};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Tunables of a graph store.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Hit radius for [`Graph::node_at`].
    pub pick_radius: f32,
    pub max_nodes: usize,
    pub max_edges: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            pick_radius: limits::DEFAULT_PICK_RADIUS,
            max_nodes: limits::MAX_NODES,
            max_edges: limits::MAX_EDGES,
        }
    }
}

/// What `remove_node` took out of the graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemovedNode {
    pub node: Node,
    pub edges: Vec<EdgeId>,
}

/// Editable undirected weighted simple graph, plus the results of the last
/// algorithm runs.
#[derive(Debug)]
pub struct Graph {
    pub(crate) nodes: Vec<Option<Node>>, // id is node_base + index
    pub(crate) edges: Vec<Option<Edge>>, // id is edge_base + index
    // ids handed out before the last clear; keeps handles from being reused
    node_base: u32,
    edge_base: u32,
    live_nodes: usize,
    // unordered endpoint pair -> edge, for O(1) duplicate checks
    pairs: HashMap<(NodeId, NodeId), EdgeId>,
    pub(crate) config: GraphConfig,
    // increments on structural edits (nodes/edges added or removed)
    pub(crate) version: u64,
    pub(crate) mst: Option<MstResult>,
    pub(crate) trace: Option<Trace>,
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            node_base: 0,
            edge_base: 0,
            live_nodes: 0,
            pairs: HashMap::new(),
            config,
            version: 1,
            mst: None,
            trace: None,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Monotonic structural version; node moves do not count.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn set_pick_radius(&mut self, radius: f32) -> bool {
        if !radius.is_finite() || radius < 0.0 {
            return false;
        }
        self.config.pick_radius = radius.min(limits::MAX_PICK_RADIUS);
        true
    }

    // Nodes
    pub fn add_node(&mut self, x: f32, y: f32) -> Result<NodeId> {
        if !x.is_finite() {
            return Err(GraphError::NonFinite { param: "x" });
        }
        if !y.is_finite() {
            return Err(GraphError::NonFinite { param: "y" });
        }
        if self.node_count() >= self.config.max_nodes {
            return Err(GraphError::CapacityExceeded {
                kind: "node",
                max: self.config.max_nodes,
            });
        }
        let id = NodeId(self.node_base + self.nodes.len() as u32);
        let label = self.next_label();
        log::trace!("add_node {} label={} at ({}, {})", id, label, x, y);
        self.nodes.push(Some(Node { id, label, x, y }));
        self.live_nodes += 1;
        self.bump();
        Ok(id)
    }

    // Smallest label in A, B, .., Z, AA, .. not held by a live node.
    fn next_label(&self) -> String {
        let used: HashSet<&str> = self.nodes().map(|n| n.label.as_str()).collect();
        let mut index = 0;
        loop {
            let label = label_for_index(index);
            if !used.contains(label.as_str()) {
                return label;
            }
            index += 1;
        }
    }

    pub fn move_node(&mut self, id: NodeId, x: f32, y: f32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let Some(slot) = self.node_slot(id) else {
            return false;
        };
        match self.nodes.get_mut(slot) {
            Some(Some(n)) => {
                n.x = x;
                n.y = y;
                true
            }
            _ => false,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.node_slot(id)
            .and_then(|slot| self.nodes.get(slot))
            .and_then(|n| n.as_ref())
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Removes the node and every edge incident to it, including from the
    /// cached MST result. `None` when `id` is not a live node.
    pub fn remove_node(&mut self, id: NodeId) -> Option<RemovedNode> {
        let slot = self.node_slot(id)?;
        let node = self.nodes.get_mut(slot)?.take()?;
        self.live_nodes -= 1;
        let mut removed = Vec::new();
        for slot in self.edges.iter_mut() {
            if slot.as_ref().map_or(false, |e| e.touches(id)) {
                if let Some(e) = slot.take() {
                    self.pairs.remove(&pair_key(e.source, e.target));
                    removed.push(e.id);
                }
            }
        }
        let node_count = self.node_count();
        if let Some(mst) = self.mst.as_mut() {
            mst.retain_live(Some(id), None, node_count);
        }
        self.trace = None;
        log::trace!("remove_node {} ({} incident edges)", id, removed.len());
        self.bump();
        Some(RemovedNode {
            node,
            edges: removed,
        })
    }

    pub fn node_count(&self) -> usize {
        self.live_nodes
    }

    /// Live nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter_map(|n| n.as_ref())
    }

    // Edges
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: i64) -> Result<EdgeId> {
        for id in [source, target] {
            if !self.contains_node(id) {
                return Err(GraphError::UnknownNodeId { id });
            }
        }
        if source == target {
            return Err(GraphError::SelfLoop { node: source });
        }
        if let Some(existing) = self.find_edge(source, target) {
            return Err(GraphError::DuplicateEdge {
                a: source,
                b: target,
                existing,
            });
        }
        if !limits::weight_in_bounds(weight) {
            return Err(GraphError::InvalidWeight { got: weight });
        }
        if self.edge_count() >= self.config.max_edges {
            return Err(GraphError::CapacityExceeded {
                kind: "edge",
                max: self.config.max_edges,
            });
        }
        let id = EdgeId(self.edge_base + self.edges.len() as u32);
        self.edges.push(Some(Edge {
            id,
            source,
            target,
            weight: weight as u32,
        }));
        self.pairs.insert(pair_key(source, target), id);
        log::trace!("add_edge {} {}-{} weight={}", id, source, target, weight);
        self.bump();
        Ok(id)
    }

    /// Edge joining `a` and `b` in either orientation.
    pub fn find_edge(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.pairs.get(&pair_key(a, b)).copied()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_slot(id)
            .and_then(|slot| self.edges.get(slot))
            .and_then(|e| e.as_ref())
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        let taken = self
            .edge_slot(id)
            .and_then(|slot| self.edges.get_mut(slot))
            .and_then(|slot| slot.take());
        let removed = taken.is_some();
        if let Some(e) = taken {
            self.pairs.remove(&pair_key(e.source, e.target));
            let node_count = self.node_count();
            if let Some(mst) = self.mst.as_mut() {
                mst.retain_live(None, Some(id), node_count);
            }
            self.trace = None;
            self.bump();
        }
        removed
    }

    pub fn edge_count(&self) -> usize {
        self.pairs.len()
    }

    /// Live edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter_map(|e| e.as_ref())
    }

    pub fn get_node_arrays(&self) -> NodeArrays {
        let mut ids = Vec::new();
        let mut positions = Vec::new();
        let mut labels = Vec::new();
        for n in self.nodes() {
            ids.push(n.id.raw());
            positions.push(n.x);
            positions.push(n.y);
            labels.push(n.label.clone());
        }
        NodeArrays {
            ids,
            positions,
            labels,
        }
    }

    pub fn get_edge_arrays(&self) -> EdgeArrays {
        let mut ids = Vec::new();
        let mut endpoints = Vec::new();
        let mut weights = Vec::new();
        for e in self.edges() {
            ids.push(e.id.raw());
            endpoints.push(e.source.raw());
            endpoints.push(e.target.raw());
            weights.push(e.weight);
        }
        EdgeArrays {
            ids,
            endpoints,
            weights,
        }
    }

    // Picking
    pub fn node_at(&self, x: f32, y: f32) -> Option<NodeId> {
        algorithms::picking::node_at_impl(self, x, y, self.config.pick_radius)
    }

    // Algorithm runs
    /// Computes the MST of the current snapshot and caches it, replacing any
    /// previous result.
    pub fn run_mst(&mut self) -> Result<&MstResult> {
        self.mst = None;
        let result = compute_mst(self)?;
        Ok(self.mst.insert(result))
    }

    /// Generates the step trace of the current snapshot and caches it along
    /// with the matching MST result.
    pub fn run_trace(&mut self) -> Result<&Trace> {
        self.mst = None;
        self.trace = None;
        let trace = generate_trace(self)?;
        self.mst = Some(compute_mst(self)?);
        Ok(self.trace.insert(trace))
    }

    pub fn mst(&self) -> Option<&MstResult> {
        self.mst.as_ref()
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// True when a cached MST exists and no structural edit happened since.
    pub fn mst_is_current(&self) -> bool {
        self.mst
            .as_ref()
            .map_or(false, |m| m.graph_version == self.version)
    }

    // Clear
    pub fn clear(&mut self) {
        self.node_base += self.nodes.len() as u32;
        self.edge_base += self.edges.len() as u32;
        self.nodes.clear();
        self.edges.clear();
        self.live_nodes = 0;
        self.pairs.clear();
        self.mst = None;
        self.trace = None;
        self.bump();
    }

    // Presets
    /// Replaces the graph with an example graph.
    pub fn load_preset(&mut self, preset: Preset) -> Result<()> {
        self.clear();
        preset.build_into(self)?;
        log::debug!(
            "loaded preset {} ({} nodes, {} edges)",
            preset,
            self.node_count(),
            self.edge_count()
        );
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.load_preset(Preset::Simple)
    }

    fn node_slot(&self, id: NodeId) -> Option<usize> {
        id.raw().checked_sub(self.node_base).map(|s| s as usize)
    }

    fn edge_slot(&self, id: EdgeId) -> Option<usize> {
        id.raw().checked_sub(self.edge_base).map(|s| s as usize)
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

// Undirected edges are indexed by their endpoints in ascending order.
fn pair_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
