//! SRD Solver
//!
//! Hybrid search for low-weight signed Roman domination assignments.
//!
//! # Core Concepts
//!
//! - [`Evaluator`]: Pure scoring of an assignment against the domination and
//!   defense rules
//! - [`decode`] / [`encode`]: Two bits per vertex, least significant first
//! - [`Selector`]: Best of many noisy sampled bit-strings
//! - [`RepairEngine`]: Greedy repair from the all-zero assignment
//! - [`WeightReducer`]: Greedy weight descent that keeps validity
//! - [`Arbitrator`]: Lower combined score wins, sampled on ties
//! - [`Pipeline`] / [`HybridSolver`]: Both branches, with classical fallback
//! - [`Sampler`]: Boundary to the external candidate generator
//!
//! # Example
//!
//! ```rust,ignore
//! use srd_solver::{HybridSolver, RandomSampler, SolverConfig};
//!
//! let solver = HybridSolver::new(SolverConfig::new(), RandomSampler::new(42))?;
//! let solution = solver.solve_spec(spec).await?;
//!
//! println!("{} (weight {})", solution.provenance, solution.weight);
//! ```

#![warn(unreachable_pub)]

mod arbitrator;
mod candidate;
mod config;
mod decoder;
mod error;
mod evaluator;
mod reduction;
mod repair;
mod sampler;
mod selector;
mod solver;

pub use arbitrator::Arbitrator;
pub use candidate::{Candidate, Provenance, Solution};
pub use config::SolverConfig;
pub use decoder::{decode, encode, BitString};
pub use error::{ConfigError, SampleError, SamplerError, SolveError};
pub use evaluator::{Evaluation, Evaluator, VertexReport};
pub use reduction::WeightReducer;
pub use repair::{RepairEngine, RepairMove, RepairOutcome, RepairStatus};
pub use sampler::{RandomSampler, Sampler, StaticSampler, UnavailableSampler};
pub use selector::{Sample, Selection, Selector};
pub use solver::{HybridSolver, Pipeline};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for solving
    pub use crate::{
        Evaluator, HybridSolver, Pipeline, Provenance, Sampler, Solution, SolverConfig,
    };
    pub use srd_graph::{Assignment, Edge, Graph, GraphSpec, Label, Sign, VertexId};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
