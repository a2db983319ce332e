//! Weight reduction pass
//!
//! Greedy descent over a valid assignment: each vertex above 0 is lowered by
//! one, and the change is kept only if the assignment stays valid. Reductions
//! that need several vertices to drop together are out of reach.

use crate::config::SolverConfig;
use crate::evaluator::Evaluator;
use srd_graph::{Assignment, Graph, Label};

/// Weight reduction pass
#[derive(Debug, Clone, Copy)]
pub struct WeightReducer {
    evaluator: Evaluator,
    passes: usize,
}

impl WeightReducer {
    /// Create reducer from configuration
    #[inline]
    #[must_use]
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config),
            passes: config.reduction_passes,
        }
    }

    /// Lower weight while preserving validity
    ///
    /// An invalid input is returned unchanged.
    #[must_use]
    pub fn reduce(&self, graph: &Graph, assignment: &Assignment) -> Assignment {
        if !self.evaluator.evaluate(graph, assignment).valid {
            tracing::debug!("Skipping weight reduction of an invalid assignment");
            return assignment.clone();
        }

        let mut current = assignment.clone();
        let limit = current.len().min(graph.vertex_count());

        for pass in 0..self.passes {
            let mut lowered = 0;
            for vertex in 0..limit {
                let label = current.get(vertex);
                if label == Label::Zero {
                    continue;
                }
                current.set(vertex, label.decremented());
                if self.evaluator.evaluate(graph, &current).valid {
                    lowered += 1;
                } else {
                    current.set(vertex, label);
                }
            }

            tracing::debug!("Reduction pass {}: lowered {} vertices", pass + 1, lowered);
            if lowered == 0 {
                break;
            }
        }

        current
    }
}
