//! Solver configuration
//!
//! Every penalty, multiplier and bound the pipeline uses lives here. All
//! fields have defaults, so a TOML file only needs the ones it overrides.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Penalty for a zero vertex without a strong neighbor
    pub domination_penalty: u64,
    /// Base penalty for a defense score below 1
    pub defense_penalty_base: u64,
    /// `combined = violations * score_multiplier + weight`
    pub score_multiplier: u64,
    /// Samples observed fewer times than this are discarded
    pub noise_floor: u64,
    /// Repair iteration cap
    pub max_repair_iterations: usize,
    /// Weight reduction passes
    pub reduction_passes: usize,
    /// Shots requested from the sampler
    pub shots: u64,
    /// Widest bit-string the sampler is asked for
    pub max_bit_width: usize,
}

impl SolverConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML, then validate
    ///
    /// # Errors
    /// [`ConfigError::Parse`] on malformed TOML, [`ConfigError::Invalid`]
    /// if [`validate`](Self::validate) rejects the result.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable
    ///
    /// Penalties and the multiplier must be non-zero, otherwise a violated
    /// assignment could score as valid. The repair cap must allow at least
    /// one iteration.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_zero = [
            ("domination_penalty", self.domination_penalty),
            ("defense_penalty_base", self.defense_penalty_base),
            ("score_multiplier", self.score_multiplier),
        ];
        if let Some((field, _)) = non_zero.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::Invalid(format!("{field} must be greater than 0")));
        }
        if self.max_repair_iterations == 0 {
            return Err(ConfigError::Invalid(
                "max_repair_iterations must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// With domination penalty
    #[inline]
    #[must_use]
    pub fn with_domination_penalty(mut self, penalty: u64) -> Self {
        self.domination_penalty = penalty;
        self
    }

    /// With defense penalty base
    #[inline]
    #[must_use]
    pub fn with_defense_penalty_base(mut self, base: u64) -> Self {
        self.defense_penalty_base = base;
        self
    }

    /// With noise floor
    #[inline]
    #[must_use]
    pub fn with_noise_floor(mut self, noise_floor: u64) -> Self {
        self.noise_floor = noise_floor;
        self
    }

    /// With repair iteration cap
    #[inline]
    #[must_use]
    pub fn with_max_repair_iterations(mut self, max: usize) -> Self {
        self.max_repair_iterations = max;
        self
    }

    /// With weight reduction pass count
    #[inline]
    #[must_use]
    pub fn with_reduction_passes(mut self, passes: usize) -> Self {
        self.reduction_passes = passes;
        self
    }

    /// With shots
    #[inline]
    #[must_use]
    pub fn with_shots(mut self, shots: u64) -> Self {
        self.shots = shots;
        self
    }

    /// With sampler width limit
    #[inline]
    #[must_use]
    pub fn with_max_bit_width(mut self, max: usize) -> Self {
        self.max_bit_width = max;
        self
    }

    /// With score multiplier
    #[inline]
    #[must_use]
    pub fn with_score_multiplier(mut self, multiplier: u64) -> Self {
        self.score_multiplier = multiplier;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            domination_penalty: 10,
            defense_penalty_base: 5,
            score_multiplier: 100,
            noise_floor: 2,
            max_repair_iterations: 100,
            reduction_passes: 3,
            shots: 1024,
            max_bit_width: 127,
        }
    }
}
