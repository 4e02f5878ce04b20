//! Decoder configuration.

use crate::error::DecodeError;

/// Fitness returned for infeasible decodes unless overridden.
pub const DEFAULT_INFEASIBLE_PENALTY: f64 = 1e9;

/// Configuration for [`MdsDecoder`](super::MdsDecoder).
///
/// # Examples
///
/// ```
/// use domset_rk::decoder::DecoderConfig;
///
/// let config = DecoderConfig::new()
///     .with_infeasible_penalty(1e6)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderConfig {
    /// Fitness assigned to a key vector whose decode leaves a vertex
    /// undominated.
    ///
    /// Must be finite and strictly greater than the vertex count of the
    /// graph the decoder is built for, so an infeasible candidate never
    /// ranks ahead of a feasible one.
    pub infeasible_penalty: f64,

    /// Whether to run the redundancy-pruning sweep after construction.
    ///
    /// Disabling it is only useful for ablation runs.
    pub prune: bool,

    /// Whether [`MdsDecoder::evaluate`](super::MdsDecoder::evaluate) decodes
    /// the population in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self {
            infeasible_penalty: DEFAULT_INFEASIBLE_PENALTY,
            prune: true,
            parallel: true,
        }
    }

    pub fn with_infeasible_penalty(mut self, penalty: f64) -> Self {
        self.infeasible_penalty = penalty;
        self
    }

    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration independently of any graph.
    pub fn validate(&self) -> Result<(), DecodeError> {
        if !self.infeasible_penalty.is_finite() {
            return Err(DecodeError::InvalidConfig(format!(
                "infeasible_penalty must be finite, got {}",
                self.infeasible_penalty
            )));
        }
        if self.infeasible_penalty <= 0.0 {
            return Err(DecodeError::InvalidConfig(format!(
                "infeasible_penalty must be positive, got {}",
                self.infeasible_penalty
            )));
        }
        Ok(())
    }

    /// Validates the configuration for a graph with `num_vertices` vertices.
    pub fn validate_for(&self, num_vertices: usize) -> Result<(), DecodeError> {
        self.validate()?;
        if self.infeasible_penalty <= num_vertices as f64 {
            return Err(DecodeError::InvalidConfig(format!(
                "infeasible_penalty ({}) must exceed the vertex count ({})",
                self.infeasible_penalty, num_vertices
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DecoderConfig::default();
        assert!((config.infeasible_penalty - 1e9).abs() < 1e-6);
        assert!(config.prune);
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_ok() {
        assert!(DecoderConfig::new().validate_for(1000).is_ok());
    }

    #[test]
    fn test_penalty_must_exceed_vertex_count() {
        let config = DecoderConfig::new().with_infeasible_penalty(10.0);
        assert!(config.validate_for(9).is_ok());
        assert!(config.validate_for(10).is_err());
    }

    #[test]
    fn test_non_finite_penalty() {
        let config = DecoderConfig::new().with_infeasible_penalty(f64::INFINITY);
        assert!(config.validate().is_err());
        let config = DecoderConfig::new().with_infeasible_penalty(f64::NAN);
        assert!(config.validate().is_err());
    }
}
