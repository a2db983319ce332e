//! Greedy repair engine
//!
//! Bounded fixed-point search from the all-zero assignment. Each iteration
//! makes exactly one upgrade and then rescans from scratch, since any upgrade
//! can change which vertices are violated.
//!
//! For the first violated vertex (in vertex order) that admits a move:
//! 1. probe upgrading each positively connected neighbor below 2 to 2, each
//!    probe on its own copy, and commit the one that removes the most
//!    violations;
//! 2. if no probe helps, upgrade the vertex itself to 2.
//!
//! A vertex already at 2 with no helpful neighbor admits no move and the scan
//! moves on. A scan with no move at all is a fixed point.

use crate::config::SolverConfig;
use crate::evaluator::{Evaluation, Evaluator};
use srd_graph::{Assignment, Graph, Label};

/// How the repair loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairStatus {
    /// Reached a valid assignment
    Repaired,
    /// No violated vertex admitted a move
    Stalled,
    /// Iteration cap reached while still invalid
    Exhausted,
}

/// A single committed upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairMove {
    /// A neighbor of a violated vertex was raised to 2
    Neighbor {
        /// Violated vertex
        vertex: usize,
        /// Upgraded neighbor
        neighbor: usize,
        /// Violations removed
        gain: u64,
    },
    /// The violated vertex itself was raised to 2
    Itself {
        /// Violated vertex
        vertex: usize,
    },
}

impl RepairMove {
    /// Vertex whose label changes
    #[inline]
    #[must_use]
    pub fn target(&self) -> usize {
        match self {
            Self::Neighbor { neighbor, .. } => *neighbor,
            Self::Itself { vertex } => *vertex,
        }
    }
}

/// Result of a repair run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairOutcome {
    /// Valid assignment, or the best one seen
    pub assignment: Assignment,
    /// Score of `assignment`
    pub evaluation: Evaluation,
    /// Moves committed
    pub iterations: usize,
    /// Termination reason
    pub status: RepairStatus,
}

/// Greedy repair engine
#[derive(Debug, Clone, Copy)]
pub struct RepairEngine {
    evaluator: Evaluator,
    max_iterations: usize,
}

impl RepairEngine {
    /// Create engine from configuration
    #[inline]
    #[must_use]
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config),
            max_iterations: config.max_repair_iterations,
        }
    }

    /// Repair from the all-zero assignment
    ///
    /// Never fails. When the loop ends without a valid assignment the best
    /// assignment seen is returned (fewest violations, then lowest weight),
    /// so the result is never worse than all zeros.
    #[must_use]
    pub fn repair(&self, graph: &Graph) -> RepairOutcome {
        let mut current = Assignment::zeros(graph.vertex_count());
        let mut evaluation = self.evaluator.evaluate(graph, &current);
        let mut best = (current.clone(), evaluation);
        let mut iterations = 0;

        let status = loop {
            if evaluation.valid {
                break RepairStatus::Repaired;
            }
            if iterations == self.max_iterations {
                break RepairStatus::Exhausted;
            }

            let Some(mv) = self.next_move(graph, &current, evaluation.violations) else {
                break RepairStatus::Stalled;
            };
            current.set(mv.target(), Label::Two);
            iterations += 1;
            evaluation = self.evaluator.evaluate(graph, &current);

            tracing::debug!(
                "Repair iteration {}: {:?}, violations now {}",
                iterations,
                mv,
                evaluation.violations
            );

            if (evaluation.violations, evaluation.weight) < (best.1.violations, best.1.weight) {
                best = (current.clone(), evaluation);
            }
        };

        if status != RepairStatus::Repaired {
            tracing::debug!(
                "Repair ended {:?} after {} iterations, best violations {}",
                status,
                iterations,
                best.1.violations
            );
        }

        let (assignment, evaluation) = best;
        RepairOutcome {
            assignment,
            evaluation,
            iterations,
            status,
        }
    }

    /// Find the next upgrade, scanning violated vertices in order
    fn next_move(&self, graph: &Graph, current: &Assignment, before: u64) -> Option<RepairMove> {
        for vertex in 0..graph.vertex_count() {
            if !self.evaluator.vertex_report(graph, current, vertex).is_violated() {
                continue;
            }

            if let Some((neighbor, gain)) = self.best_neighbor(graph, current, vertex, before) {
                return Some(RepairMove::Neighbor {
                    vertex,
                    neighbor,
                    gain,
                });
            }

            if current.get(vertex) != Label::Two {
                return Some(RepairMove::Itself { vertex });
            }
        }
        None
    }

    /// Positive neighbor whose upgrade removes the most violations
    fn best_neighbor(
        &self,
        graph: &Graph,
        current: &Assignment,
        vertex: usize,
        before: u64,
    ) -> Option<(usize, u64)> {
        let mut best: Option<(usize, u64)> = None;
        for neighbor in graph.neighbors(vertex) {
            if !neighbor.sign.is_positive() || current.get(neighbor.index) == Label::Two {
                continue;
            }
            let probe = current.with(neighbor.index, Label::Two);
            let after = self.evaluator.evaluate(graph, &probe).violations;
            let gain = before.saturating_sub(after);
            if gain > 0 && best.map_or(true, |(_, g)| gain > g) {
                best = Some((neighbor.index, gain));
            }
        }
        best
    }
}
