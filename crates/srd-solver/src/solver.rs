//! Solve pipeline
//!
//! Two independent branches converge at the arbitrator:
//!
//! - **Sampled**: sampler output → decoder → selector
//! - **Classical**: repair engine → weight reduction
//!
//! The classical branch needs nothing but the graph. A failing sampler, an
//! over-wide graph or a table where every sample is noise all leave the
//! sampled branch empty, and the classical candidate is returned.

use crate::arbitrator::Arbitrator;
use crate::candidate::{Candidate, Provenance, Solution};
use crate::config::SolverConfig;
use crate::error::{ConfigError, SamplerError, SolveError};
use crate::evaluator::Evaluator;
use crate::reduction::WeightReducer;
use crate::repair::{RepairEngine, RepairStatus};
use crate::sampler::Sampler;
use crate::selector::{Sample, Selection, Selector};
use srd_graph::{Graph, GraphSpec};

/// Synchronous core of the solver
///
/// Holds no state between calls; every method takes the graph it works on.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: SolverConfig,
    evaluator: Evaluator,
    selector: Selector,
    repair: RepairEngine,
    reducer: WeightReducer,
    arbitrator: Arbitrator,
}

impl Pipeline {
    /// Build pipeline from configuration
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] if the configuration fails validation.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            evaluator: Evaluator::new(&config),
            selector: Selector::new(&config),
            repair: RepairEngine::new(&config),
            reducer: WeightReducer::new(&config),
            arbitrator: Arbitrator::new(&config),
            config,
        })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Evaluator configured like the rest of the pipeline
    #[inline]
    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Classical branch: repair, then reduce if valid
    #[must_use]
    pub fn classical(&self, graph: &Graph) -> Candidate {
        let outcome = self.repair.repair(graph);
        let assignment = if outcome.status == RepairStatus::Repaired {
            self.reducer.reduce(graph, &outcome.assignment)
        } else {
            tracing::warn!(
                "Repair {:?} after {} iterations with {} violations remaining",
                outcome.status,
                outcome.iterations,
                outcome.evaluation.violations
            );
            outcome.assignment
        };

        let evaluation = self.evaluator.evaluate(graph, &assignment);
        tracing::info!(
            "Classical branch: valid={}, weight={}, {} repair iterations",
            evaluation.valid,
            evaluation.weight,
            outcome.iterations
        );
        Candidate::new(assignment, evaluation, Provenance::Classical)
    }

    /// Sampled branch over an already-resolved sample table
    #[must_use]
    pub fn sampled(&self, graph: &Graph, samples: &[Sample]) -> Selection {
        let selection = self.selector.select(samples, graph);
        tracing::info!(
            "Sampled branch: {} candidates considered, {} discarded as noise",
            selection.considered,
            selection.discarded
        );
        if let Some(top) = &selection.most_frequent {
            tracing::debug!("Most frequent sample {} seen {} times", top.bits, top.count);
        }
        selection
    }

    /// Combine the sampler's result with the classical branch
    #[must_use]
    pub fn resolve(&self, graph: &Graph, samples: Result<Vec<Sample>, SamplerError>) -> Solution {
        let classical = self.classical(graph);

        let sampled = match samples {
            Ok(samples) => {
                let selection = self.sampled(graph, &samples);
                (!selection.is_empty()).then_some(selection.candidate)
            }
            Err(e) => {
                tracing::warn!("Sampler failed, continuing with classical branch: {}", e);
                None
            }
        };

        let chosen = self.arbitrator.arbitrate(graph, sampled, classical);
        tracing::info!(
            "Selected {} candidate: valid={}, weight={}, violations={}",
            chosen.provenance,
            chosen.evaluation.valid,
            chosen.evaluation.weight,
            chosen.evaluation.violations
        );
        Solution::from_candidate(graph, &chosen)
    }

    /// Classical branch alone, as a solution
    #[must_use]
    pub fn solve_classical(&self, graph: &Graph) -> Solution {
        Solution::from_candidate(graph, &self.classical(graph))
    }
}

/// Pipeline paired with an external sampler
#[derive(Debug)]
pub struct HybridSolver<S> {
    pipeline: Pipeline,
    sampler: S,
}

impl<S: Sampler> HybridSolver<S> {
    /// Create solver
    ///
    /// # Errors
    /// [`SolveError::Config`] if the configuration fails validation.
    pub fn new(config: SolverConfig, sampler: S) -> Result<Self, SolveError> {
        Ok(Self {
            pipeline: Pipeline::new(config)?,
            sampler,
        })
    }

    /// Underlying pipeline
    #[inline]
    #[must_use]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Solve a validated graph
    ///
    /// Never fails: sampler problems fall back to the classical branch.
    pub async fn solve(&self, graph: &Graph) -> Solution {
        let samples = self.draw(graph).await;
        self.pipeline.resolve(graph, samples)
    }

    /// Validate a wire graph, then solve it
    ///
    /// # Errors
    /// [`SolveError::InvalidGraph`] before any evaluation if the graph is
    /// malformed.
    pub async fn solve_spec(&self, spec: GraphSpec) -> Result<Solution, SolveError> {
        let graph = Graph::try_from(spec)?;
        Ok(self.solve(&graph).await)
    }

    async fn draw(&self, graph: &Graph) -> Result<Vec<Sample>, SamplerError> {
        let width = graph.bit_width();
        let max = self.pipeline.config.max_bit_width;
        if width > max {
            return Err(SamplerError::TooWide { width, max });
        }

        tracing::debug!(
            "Requesting {} shots of width {} from {} sampler",
            self.pipeline.config.shots,
            width,
            self.sampler.name()
        );
        self.sampler.sample(width, self.pipeline.config.shots).await
    }
}
