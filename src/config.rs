use crate::extract::{CheapestPathExtractor, GreedyExtractor, PlanExtractor};
use crate::selector::DEFAULT_RECENCY_PENALTY;
use crate::{GoapError, Result};

/// How the planner reads a plan out of a search tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Cheapest child at each level, no backtracking
    #[default]
    Greedy,
    /// Cheapest complete chain anywhere in the tree
    CheapestPath,
}

impl ExtractionStrategy {
    pub(crate) fn extractor(self) -> Box<dyn PlanExtractor + Send + Sync> {
        match self {
            ExtractionStrategy::Greedy => Box::new(GreedyExtractor),
            ExtractionStrategy::CheapestPath => Box::new(CheapestPathExtractor),
        }
    }
}

/// Planner settings.
///
/// ```
/// use goap_planner::{ExtractionStrategy, PlannerConfig};
///
/// let config = PlannerConfig {
///     extraction: ExtractionStrategy::CheapestPath,
///     ..PlannerConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.recency_penalty, 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Subtracted from the most recently chosen goal's priority
    pub recency_penalty: f32,
    pub extraction: ExtractionStrategy,
}

impl PlannerConfig {
    /// Checks that the recency penalty is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.recency_penalty.is_finite() || self.recency_penalty < 0.0 {
            return Err(GoapError::InvalidConfig(format!(
                "recency penalty must be a finite, non-negative number, got {}",
                self.recency_penalty
            )));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            recency_penalty: DEFAULT_RECENCY_PENALTY,
            extraction: ExtractionStrategy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.recency_penalty, 0.01);
        assert_eq!(config.extraction, ExtractionStrategy::Greedy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_penalty() {
        for penalty in [-0.5, f32::NAN, f32::INFINITY] {
            let config = PlannerConfig {
                recency_penalty: penalty,
                ..PlannerConfig::default()
            };
            assert!(matches!(config.validate(), Err(GoapError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_zero_penalty_is_valid() {
        let config = PlannerConfig {
            recency_penalty: 0.0,
            ..PlannerConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
