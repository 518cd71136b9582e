//! Example graphs offered by the editor's preset menu.

use crate::error::Result;
use crate::model::NodeId;
use crate::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Simple,
    Complex,
    Medium10,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Simple, Preset::Complex, Preset::Medium10];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Simple => "simple",
            Preset::Complex => "complex",
            Preset::Medium10 => "medium10",
        }
    }

    fn positions(self) -> &'static [(f32, f32)] {
        match self {
            Preset::Simple => &[(200.0, 100.0), (400.0, 100.0), (200.0, 250.0), (400.0, 250.0)],
            Preset::Complex => &[
                (150.0, 80.0),
                (300.0, 80.0),
                (450.0, 80.0),
                (150.0, 200.0),
                (300.0, 200.0),
                (450.0, 200.0),
            ],
            // Outer ring A..F, inner ring G..J.
            Preset::Medium10 => &[
                (300.0, 80.0),
                (450.0, 150.0),
                (450.0, 250.0),
                (300.0, 320.0),
                (150.0, 250.0),
                (150.0, 150.0),
                (200.0, 120.0),
                (400.0, 120.0),
                (400.0, 210.0),
                (200.0, 210.0),
            ],
        }
    }

    // (source index, target index, weight) into `positions`
    fn edges(self) -> &'static [(usize, usize, u32)] {
        match self {
            Preset::Simple => &[(0, 1, 4), (0, 2, 2), (1, 3, 3), (2, 3, 5), (0, 3, 6)],
            Preset::Complex => &[
                (0, 1, 3),
                (1, 2, 2),
                (0, 3, 4),
                (1, 4, 1),
                (2, 5, 5),
                (3, 4, 6),
                (4, 5, 2),
                (0, 4, 3),
                (1, 5, 4),
            ],
            Preset::Medium10 => &[
                // outer ring
                (0, 1, 3),
                (1, 2, 2),
                (2, 3, 4),
                (3, 4, 3),
                (4, 5, 2),
                (5, 0, 4),
                // inner ring
                (6, 7, 1),
                (7, 8, 3),
                (8, 9, 2),
                (9, 6, 4),
                // spokes
                (0, 6, 2),
                (0, 7, 3),
                (1, 7, 1),
                (1, 8, 4),
                (2, 8, 2),
                (2, 9, 3),
                (3, 9, 1),
                (4, 9, 2),
                (4, 6, 4),
                (5, 6, 3),
                // cross links
                (0, 2, 5),
                (1, 3, 6),
                (2, 4, 4),
                (3, 5, 5),
                (4, 0, 3),
            ],
        }
    }

    /// Appends this preset's nodes and edges to `g`.
    pub(crate) fn build_into(self, g: &mut Graph) -> Result<()> {
        let ids = self
            .positions()
            .iter()
            .map(|&(x, y)| g.add_node(x, y))
            .collect::<Result<Vec<NodeId>>>()?;
        for &(a, b, w) in self.edges() {
            g.add_edge(ids[a], ids[b], i64::from(w))?;
        }
        Ok(())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown preset '{0}' (expected simple, complex or medium10)")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}
