//! Step-by-step record of a Kruskal run, for sequential display.
//!
//! The trace is exhaustive: after the sort summary it holds one record per
//! sorted edge, including the rejections that follow a completed tree, and
//! ends with a `Completed` record.

use crate::algorithms::kruskal::{sorted_edges, Decisions};
use crate::error::Result;
use crate::model::{Edge, EdgeId, NodeId};
use crate::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge as seen by a step record; endpoint labels are resolved at trace time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub source_label: String,
    pub target_label: String,
    pub weight: u32,
}

impl StepEdge {
    fn resolve(g: &Graph, e: &Edge) -> StepEdge {
        let label = |id: NodeId| g.node(id).map(|n| n.label.clone()).unwrap_or_default();
        StepEdge {
            id: e.id,
            source: e.source,
            target: e.target,
            source_label: label(e.source),
            target_label: label(e.target),
            weight: e.weight,
        }
    }
}

impl fmt::Display for StepEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source_label, self.target_label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Step {
    Sorted { step: u32, edges: Vec<StepEdge> },
    Accept { step: u32, edge: StepEdge, total_weight: u64 },
    Reject { step: u32, edge: StepEdge, total_weight: u64 },
    Completed { total_weight: u64 },
}

impl Step {
    pub fn number(&self) -> Option<u32> {
        match self {
            Step::Sorted { step, .. } | Step::Accept { step, .. } | Step::Reject { step, .. } => {
                Some(*step)
            }
            Step::Completed { .. } => None,
        }
    }

    /// Accumulated weight after this step; the sort summary has none.
    pub fn total_weight(&self) -> Option<u64> {
        match self {
            Step::Sorted { .. } => None,
            Step::Accept { total_weight, .. }
            | Step::Reject { total_weight, .. }
            | Step::Completed { total_weight } => Some(*total_weight),
        }
    }

    pub fn edge(&self) -> Option<&StepEdge> {
        match self {
            Step::Accept { edge, .. } | Step::Reject { edge, .. } => Some(edge),
            _ => None,
        }
    }

    /// `A-C:2, B-D:3, ...` for the sort summary.
    pub fn listing(&self) -> Option<String> {
        match self {
            Step::Sorted { edges, .. } => Some(
                edges
                    .iter()
                    .map(|e| format!("{}:{}", e, e.weight))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Sorted { step, edges } => {
                write!(f, "Step {}: sort edges by weight ({} edges)", step, edges.len())
            }
            Step::Accept { step, edge, .. } => {
                write!(f, "Step {}: add edge {} (weight {})", step, edge, edge.weight)
            }
            Step::Reject { step, edge, .. } => {
                write!(f, "Step {}: skip edge {} (would form a cycle)", step, edge)
            }
            Step::Completed { total_weight } => {
                write!(f, "Completed. Total MST weight: {}", total_weight)
            }
        }
    }
}

/// Ordered, immutable step records of one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Ids of the accepted edges, in acceptance order.
    pub fn accepted_edges(&self) -> Vec<EdgeId> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                Step::Accept { edge, .. } => Some(edge.id),
                _ => None,
            })
            .collect()
    }

    pub fn final_weight(&self) -> Option<u64> {
        match self.steps.last() {
            Some(Step::Completed { total_weight }) => Some(*total_weight),
            _ => None,
        }
    }

    /// One narration line per step.
    pub fn narrate(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.to_string()).collect()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;
    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Full decision log of Kruskal's algorithm on the current graph snapshot.
pub fn generate_trace(g: &Graph) -> Result<Trace> {
    let sorted = sorted_edges(g);
    let summary: Vec<StepEdge> = sorted.iter().map(|e| StepEdge::resolve(g, e)).collect();
    let decisions = Decisions::new(g, sorted)?;

    let mut steps = Vec::with_capacity(summary.len() + 2);
    steps.push(Step::Sorted {
        step: 1,
        edges: summary,
    });
    let mut total_weight = 0;
    for (d, step) in decisions.zip(2u32..) {
        let d = d?;
        let edge = StepEdge::resolve(g, d.edge);
        total_weight = d.total_weight;
        steps.push(if d.accepted {
            Step::Accept {
                step,
                edge,
                total_weight,
            }
        } else {
            Step::Reject {
                step,
                edge,
                total_weight,
            }
        });
    }
    steps.push(Step::Completed { total_weight });
    log::debug!("trace: {} steps, total_weight={}", steps.len(), total_weight);
    Ok(Trace { steps })
}
