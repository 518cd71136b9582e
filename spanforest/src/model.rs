use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque node handle. Handles are never reused while the graph lives,
/// not even across `clear`, so a stale handle simply stops resolving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u32);

/// Opaque edge handle, never reused, like [`NodeId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub(crate) u32);

impl NodeId {
    pub fn from_raw(raw: u32) -> Self {
        NodeId(raw)
    }
    pub fn raw(self) -> u32 {
        self.0
    }
    pub(crate) fn slot(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    pub fn from_raw(raw: u32) -> Self {
        EdgeId(raw)
    }
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub weight: u32,
}

impl Edge {
    /// True when the edge joins `a` and `b` in either orientation.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }
}

/// Label for the `index`-th position of the sequence `A..Z, AA..AZ, BA..ZZ, AAA..`
/// (bijective base 26).
pub fn label_for_index(mut index: usize) -> String {
    let mut rev = Vec::with_capacity(2);
    loop {
        rev.push(char::from(b'A' + (index % 26) as u8));
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    rev.into_iter().rev().collect()
}

pub struct NodeArrays {
    pub ids: Vec<u32>,
    pub positions: Vec<f32>,
    pub labels: Vec<String>,
}

pub struct EdgeArrays {
    pub ids: Vec<u32>,
    pub endpoints: Vec<u32>,
    pub weights: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_spreadsheet_columns() {
        assert_eq!(label_for_index(0), "A");
        assert_eq!(label_for_index(25), "Z");
        assert_eq!(label_for_index(26), "AA");
        assert_eq!(label_for_index(27), "AB");
        assert_eq!(label_for_index(51), "AZ");
        assert_eq!(label_for_index(52), "BA");
        assert_eq!(label_for_index(701), "ZZ");
        assert_eq!(label_for_index(702), "AAA");
    }

    #[test]
    fn edge_connects_is_orientation_free() {
        let e = Edge {
            id: EdgeId(0),
            source: NodeId(1),
            target: NodeId(2),
            weight: 3,
        };
        assert!(e.connects(NodeId(1), NodeId(2)));
        assert!(e.connects(NodeId(2), NodeId(1)));
        assert!(!e.connects(NodeId(1), NodeId(3)));
        assert!(e.touches(NodeId(2)));
        assert!(!e.touches(NodeId(0)));
    }
}
