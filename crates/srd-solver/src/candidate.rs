//! Candidates and solutions

use crate::evaluator::Evaluation;
use serde::{Deserialize, Serialize};
use srd_graph::{Assignment, Graph, VertexId};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Which branch produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Decoded from external sampler output
    Sampled,
    /// Produced by repair and reduction
    Classical,
}

impl Display for Provenance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sampled => f.write_str("sampled"),
            Self::Classical => f.write_str("classical"),
        }
    }
}

/// Scored assignment tagged with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Assignment in vertex order
    pub assignment: Assignment,
    /// Score at the time the candidate was built
    pub evaluation: Evaluation,
    /// Origin
    pub provenance: Provenance,
}

impl Candidate {
    /// Create new candidate
    #[inline]
    #[must_use]
    pub fn new(assignment: Assignment, evaluation: Evaluation, provenance: Provenance) -> Self {
        Self {
            assignment,
            evaluation,
            provenance,
        }
    }
}

/// Final result of a solve, in wire form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// Value per vertex
    pub assignment: BTreeMap<VertexId, u8>,
    /// No violations
    pub valid: bool,
    /// Sum of values
    pub weight: u64,
    /// Total penalty
    pub violations: u64,
    /// Winning branch
    pub provenance: Provenance,
}

impl Solution {
    /// Render a candidate against its graph
    #[must_use]
    pub fn from_candidate(graph: &Graph, candidate: &Candidate) -> Self {
        Self {
            assignment: candidate.assignment.to_map(graph),
            valid: candidate.evaluation.valid,
            weight: candidate.evaluation.weight,
            violations: candidate.evaluation.violations,
            provenance: candidate.provenance,
        }
    }
}
