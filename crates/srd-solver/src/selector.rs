//! Candidate selector
//!
//! Reduces the sampler's observed bit-strings to one candidate. Duplicate
//! bit-strings are merged, rare ones are treated as noise, and the rest are
//! decoded and ranked: any valid sample beats any invalid one, then the
//! lower combined score wins. Samples are walked in ascending bit-string
//! order and the first of equally ranked samples is kept, so the choice does
//! not depend on the order the sampler reported them in.

use crate::candidate::{Candidate, Provenance};
use crate::config::SolverConfig;
use crate::decoder::{decode, BitString};
use crate::error::SampleError;
use crate::evaluator::{Evaluation, Evaluator};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use srd_graph::{Assignment, Graph};
use std::collections::BTreeMap;

/// One observed bit-string and how often it was seen
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sample {
    /// Measured bits
    pub bits: BitString,
    /// Observed count
    pub count: u64,
}

impl Sample {
    /// Create new sample
    #[inline]
    #[must_use]
    pub fn new(bits: BitString, count: u64) -> Self {
        Self { bits, count }
    }

    /// Parse a `{"bitstring": count}` table
    ///
    /// # Errors
    /// [`SampleError::InvalidBitString`] for the first malformed key.
    pub fn from_counts<'a>(
        counts: impl IntoIterator<Item = (&'a str, u64)>,
    ) -> Result<Vec<Self>, SampleError> {
        counts
            .into_iter()
            .map(|(bits, count)| Ok(Self::new(bits.parse()?, count)))
            .collect()
    }
}

/// Outcome of a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Best sampled candidate, or the all-zero fallback
    pub candidate: Candidate,
    /// Distinct bit-strings that passed the noise floor
    pub considered: usize,
    /// Distinct bit-strings discarded as noise
    pub discarded: usize,
    /// Most frequently observed surviving sample
    pub most_frequent: Option<Sample>,
}

impl Selection {
    /// Check if any sample survived filtering
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.considered == 0
    }
}

/// Picks the best of many sampled candidates
#[derive(Debug, Clone, Copy)]
pub struct Selector {
    evaluator: Evaluator,
    noise_floor: u64,
}

impl Selector {
    /// Create selector from configuration
    #[inline]
    #[must_use]
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config),
            noise_floor: config.noise_floor,
        }
    }

    /// Select the best sample for `graph`
    #[must_use]
    pub fn select(&self, samples: &[Sample], graph: &Graph) -> Selection {
        let mut merged: BTreeMap<&BitString, u64> = BTreeMap::new();
        for sample in samples {
            let count = merged.entry(&sample.bits).or_insert(0);
            *count = count.saturating_add(sample.count);
        }

        let (kept, noise): (Vec<_>, Vec<_>) = merged
            .into_iter()
            .partition(|(_, count)| *count >= self.noise_floor);

        let scored: Vec<(&BitString, u64, Assignment, Evaluation)> = kept
            .par_iter()
            .map(|&(bits, count)| {
                let assignment = decode(bits, graph);
                let evaluation = self.evaluator.evaluate(graph, &assignment);
                (bits, count, assignment, evaluation)
            })
            .collect();

        let most_frequent = scored
            .iter()
            .fold(None::<(&BitString, u64)>, |best, &(bits, count, _, _)| match best {
                Some((_, c)) if c >= count => best,
                _ => Some((bits, count)),
            })
            .map(|(bits, count)| Sample::new(bits.clone(), count));

        let considered = scored.len();
        let best = scored
            .into_iter()
            .fold(None::<(Assignment, Evaluation)>, |best, (_, _, assignment, evaluation)| {
                match best {
                    Some((_, ref b)) if self.rank(b) <= self.rank(&evaluation) => best,
                    _ => Some((assignment, evaluation)),
                }
            });

        let candidate = match best {
            Some((assignment, evaluation)) => {
                tracing::debug!(
                    "Selected sample: valid={}, weight={}, violations={}",
                    evaluation.valid,
                    evaluation.weight,
                    evaluation.violations
                );
                Candidate::new(assignment, evaluation, Provenance::Sampled)
            }
            None => {
                tracing::debug!("No sample passed noise floor {}", self.noise_floor);
                let assignment = Assignment::zeros(graph.vertex_count());
                let evaluation = self.evaluator.evaluate(graph, &assignment);
                Candidate::new(assignment, evaluation, Provenance::Sampled)
            }
        };

        Selection {
            candidate,
            considered,
            discarded: noise.len(),
            most_frequent,
        }
    }

    /// Validity first, then combined score
    fn rank(&self, evaluation: &Evaluation) -> (bool, u64) {
        (!evaluation.valid, self.evaluator.combined_score(evaluation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srd_graph::{Edge, Label};

    fn path_abc() -> Graph {
        Graph::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![Edge::positive("a", "b"), Edge::positive("b", "c")],
        )
        .unwrap()
    }

    fn sample(bits: &str, count: u64) -> Sample {
        Sample::new(bits.parse().unwrap(), count)
    }

    fn selector() -> Selector {
        Selector::new(&SolverConfig::default())
    }

    #[test]
    fn picks_valid_sample() {
        // c=0 b=2 a=0 -> "00 10 00"
        let samples = vec![sample("000000", 500), sample("001000", 3)];
        let s = selector().select(&samples, &path_abc());
        assert!(s.candidate.evaluation.valid);
        assert_eq!(
            s.candidate.assignment.labels(),
            &[Label::Zero, Label::Two, Label::Zero]
        );
        assert_eq!(s.considered, 2);
        assert_eq!(s.most_frequent, Some(sample("000000", 500)));
    }

    #[test]
    fn valid_beats_lower_combined_score() {
        // "000001": a=1 only, invalid. "101010": all 2, valid weight 6.
        let samples = vec![sample("000001", 10), sample("101010", 2)];
        let s = selector().select(&samples, &path_abc());
        assert!(s.candidate.evaluation.valid);
        assert_eq!(s.candidate.evaluation.weight, 6);
    }

    #[test]
    fn lighter_valid_sample_wins() {
        let samples = vec![sample("101010", 5), sample("001000", 5)];
        let s = selector().select(&samples, &path_abc());
        assert_eq!(s.candidate.evaluation.weight, 2);
    }

    #[test]
    fn noise_floor_discards_singletons() {
        let samples = vec![sample("001000", 1), sample("000000", 4)];
        let s = selector().select(&samples, &path_abc());
        assert_eq!(s.discarded, 1);
        assert_eq!(s.considered, 1);
        assert!(!s.candidate.evaluation.valid);
    }

    #[test]
    fn duplicates_merge_before_filtering() {
        let samples = vec![sample("001000", 1), sample("001000", 1)];
        let s = selector().select(&samples, &path_abc());
        assert_eq!(s.considered, 1);
        assert!(s.candidate.evaluation.valid);
    }

    #[test]
    fn empty_input_yields_zero_candidate() {
        let s = selector().select(&[], &path_abc());
        assert!(s.is_empty());
        assert_eq!(s.candidate.provenance, Provenance::Sampled);
        assert_eq!(s.candidate.assignment.weight(), 0);
        assert!(!s.candidate.evaluation.valid);
        assert_eq!(s.most_frequent, None);
    }

    #[test]
    fn ties_resolve_to_smallest_bit_string() {
        // a=2 with b,c=0 and c=2 with a,b=0 are both invalid with equal scores
        let g = path_abc();
        let forward = vec![sample("100000", 3), sample("000010", 3)];
        let backward = vec![sample("000010", 3), sample("100000", 3)];
        let s1 = selector().select(&forward, &g);
        let s2 = selector().select(&backward, &g);
        assert_eq!(s1.candidate, s2.candidate);
        assert_eq!(s1.candidate.assignment.get(0), Label::Two);
    }

    #[test]
    fn parses_count_tables() {
        let samples = Sample::from_counts([("0110", 7), ("11", 1)]).unwrap();
        assert_eq!(samples.len(), 2);
        assert!(Sample::from_counts([("0a", 1)]).is_err());
    }
}
