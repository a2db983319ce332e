//! Hybrid arbitrator
//!
//! Picks between the sampled and classical candidates by combined score.
//! On an exact tie the sampled candidate is kept.

use crate::candidate::Candidate;
use crate::config::SolverConfig;
use crate::evaluator::Evaluator;
use srd_graph::Graph;

/// Chooses the final candidate
#[derive(Debug, Clone, Copy)]
pub struct Arbitrator {
    evaluator: Evaluator,
}

impl Arbitrator {
    /// Create arbitrator from configuration
    #[inline]
    #[must_use]
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config),
        }
    }

    /// Return the better candidate
    ///
    /// Both candidates are re-scored against `graph` before comparison. A
    /// missing sampled candidate means the sampler was unavailable.
    #[must_use]
    pub fn arbitrate(
        &self,
        graph: &Graph,
        sampled: Option<Candidate>,
        classical: Candidate,
    ) -> Candidate {
        let classical = self.rescore(graph, classical);
        let Some(sampled) = sampled else {
            tracing::info!("No sampled candidate, using classical result");
            return classical;
        };
        let sampled = self.rescore(graph, sampled);

        let sampled_score = self.evaluator.combined_score(&sampled.evaluation);
        let classical_score = self.evaluator.combined_score(&classical.evaluation);
        tracing::info!(
            "Arbitrating: sampled score {}, classical score {}",
            sampled_score,
            classical_score
        );

        if sampled_score <= classical_score {
            sampled
        } else {
            classical
        }
    }

    fn rescore(&self, graph: &Graph, mut candidate: Candidate) -> Candidate {
        candidate.evaluation = self.evaluator.evaluate(graph, &candidate.assignment);
        candidate
    }
}
