use crate::model::{EdgeId, NodeId};
use thiserror::Error;

/// Failures reported by graph edits and algorithm runs.
///
/// Every variant is recoverable: a failed edit leaves the graph exactly as it
/// was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("at least 2 nodes are required to run the algorithm (found {found})")]
    InsufficientNodes { found: usize },

    // Endpoint fields are not named `source`: thiserror reserves that name.
    #[error("an edge already connects {a} and {b} ({existing})")]
    DuplicateEdge {
        a: NodeId,
        b: NodeId,
        existing: EdgeId,
    },

    #[error("edge endpoints cannot be the same node ({node})")]
    SelfLoop { node: NodeId },

    #[error("edge weight must be a positive integer (got {got})")]
    InvalidWeight { got: i64 },

    #[error("unknown node id {id}")]
    UnknownNodeId { id: NodeId },

    #[error("parameter '{param}' must be finite")]
    NonFinite { param: &'static str },

    #[error("{kind} limit of {max} reached")]
    CapacityExceeded { kind: &'static str, max: usize },
}

impl GraphError {
    /// Stable machine-readable code, shared with the wasm result objects.
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::InsufficientNodes { .. } => "insufficient_nodes",
            GraphError::DuplicateEdge { .. } => "duplicate_edge",
            GraphError::SelfLoop { .. } => "self_loop",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::UnknownNodeId { .. } => "invalid_id",
            GraphError::NonFinite { .. } => "non_finite",
            GraphError::CapacityExceeded { .. } => "capacity_exceeded",
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
