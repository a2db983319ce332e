//! Error types for the solver
//!
//! Only malformed input and malformed configuration surface as errors. The
//! evaluator, decoder, selector, repair engine and reduction pass are total,
//! and an unavailable sampler degrades to the classical result.

use srd_graph::GraphError;

/// Top-level solve error
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// Input graph is malformed
    #[error(transparent)]
    InvalidGraph(#[from] GraphError),

    /// Configuration is malformed
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SolveError {
    /// Check if the caller supplied a malformed graph
    #[inline]
    #[must_use]
    pub fn is_invalid_graph(&self) -> bool {
        matches!(self, Self::InvalidGraph(e) if e.is_invalid_graph())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("parse failed: {0}")]
    Parse(String),

    /// A field holds an unusable value
    #[error("invalid value: {0}")]
    Invalid(String),
}

/// Malformed sampler output
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    /// Bit-string contains something other than `0` and `1`
    #[error("invalid bit-string: {0:?}")]
    InvalidBitString(String),
}

/// External sampler failures
///
/// Never fatal to a solve; the pipeline falls back to the classical branch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SamplerError {
    /// Sampler could not produce results
    #[error("sampler unavailable: {0}")]
    Unavailable(String),

    /// Graph needs more bits than the sampler accepts
    #[error("bit width {width} exceeds sampler limit {max}")]
    TooWide {
        /// Requested width
        width: usize,
        /// Configured limit
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_graph_is_transparent() {
        let err = SolveError::from(GraphError::NoVertices);
        assert!(err.is_invalid_graph());
        assert_eq!(err.to_string(), "invalid graph: no vertices");
    }

    #[test]
    fn config_error_is_not_invalid_graph() {
        let err = SolveError::from(ConfigError::Invalid("x".to_string()));
        assert!(!err.is_invalid_graph());
        assert!(err.to_string().contains("configuration error"));
    }

    #[test]
    fn sampler_error_display() {
        let err = SamplerError::TooWide { width: 200, max: 127 };
        assert!(err.to_string().contains("200"));
        assert!(SamplerError::Unavailable("queue closed".into())
            .to_string()
            .contains("queue closed"));
    }
}
