//! External sampler boundary
//!
//! The solver asks a [`Sampler`] for `shots` bit-strings of a given width and
//! receives an already-resolved table of observed counts, or a failure. Job
//! submission, polling, retries and timeouts belong to the implementation,
//! not to the solver.

use crate::decoder::BitString;
use crate::error::{SampleError, SamplerError};
use crate::selector::Sample;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Source of noisy candidate bit-strings
#[async_trait]
pub trait Sampler: Send + Sync + std::fmt::Debug {
    /// Draw `shots` bit-strings of `bit_width` bits
    ///
    /// # Errors
    /// [`SamplerError::Unavailable`] if no results could be produced.
    async fn sample(&self, bit_width: usize, shots: u64) -> Result<Vec<Sample>, SamplerError>;

    /// Sampler name (for logging)
    fn name(&self) -> &'static str;
}

/// Replays a fixed table of observed counts
#[derive(Debug, Clone, Default)]
pub struct StaticSampler {
    samples: Vec<Sample>,
}

impl StaticSampler {
    /// Create from samples
    #[inline]
    #[must_use]
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Create from a `{"bitstring": count}` table
    ///
    /// # Errors
    /// [`SampleError::InvalidBitString`] for a malformed key.
    pub fn from_counts(counts: &BTreeMap<String, u64>) -> Result<Self, SampleError> {
        let samples = Sample::from_counts(counts.iter().map(|(k, v)| (k.as_str(), *v)))?;
        Ok(Self::new(samples))
    }
}

#[async_trait]
impl Sampler for StaticSampler {
    async fn sample(&self, _bit_width: usize, _shots: u64) -> Result<Vec<Sample>, SamplerError> {
        Ok(self.samples.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Uniformly random bit-strings from a fixed seed
///
/// Stand-in for hardware when running offline; the same seed always yields
/// the same table.
#[derive(Debug, Clone, Copy)]
pub struct RandomSampler {
    seed: u64,
}

impl RandomSampler {
    /// Create with seed
    #[inline]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

#[async_trait]
impl Sampler for RandomSampler {
    async fn sample(&self, bit_width: usize, shots: u64) -> Result<Vec<Sample>, SamplerError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for _ in 0..shots {
            let bits: String = (0..bit_width)
                .map(|_| if rng.random_bool(0.5) { '1' } else { '0' })
                .collect();
            *counts.entry(bits).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(bits, count)| {
                let bits: BitString = bits
                    .parse()
                    .map_err(|e: SampleError| SamplerError::Unavailable(e.to_string()))?;
                Ok(Sample::new(bits, count))
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Always fails; models an unreachable backend
#[derive(Debug, Clone)]
pub struct UnavailableSampler {
    reason: String,
}

impl UnavailableSampler {
    /// Create with failure reason
    #[inline]
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Sampler for UnavailableSampler {
    async fn sample(&self, _bit_width: usize, _shots: u64) -> Result<Vec<Sample>, SamplerError> {
        Err(SamplerError::Unavailable(self.reason.clone()))
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}
