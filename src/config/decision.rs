//! Decision thresholds configuration

use serde::Deserialize;

use crate::domain::verdict::{DecisionPolicy, PRICE_CEILING, SMALL_LIMIT};

use super::error::ValidationError;

/// Thresholds used by the verdict engine.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionConfig {
    /// Prices strictly above this are outside the small-amount scope
    #[serde(default = "default_small_limit")]
    pub small_limit: f64,

    /// Upper clamp bound for entered prices
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: f64,
}

impl DecisionConfig {
    /// Convert into the domain policy.
    pub fn policy(&self) -> Result<DecisionPolicy, ValidationError> {
        DecisionPolicy::new(self.small_limit, self.price_ceiling)
            .map_err(|e| ValidationError::InvalidDecisionPolicy(e.to_string()))
    }

    /// Validate decision configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.policy().map(|_| ())
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            small_limit: default_small_limit(),
            price_ceiling: default_price_ceiling(),
        }
    }
}

fn default_small_limit() -> f64 {
    SMALL_LIMIT
}

fn default_price_ceiling() -> f64 {
    PRICE_CEILING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_default_policy() {
        let config = DecisionConfig::default();
        assert_eq!(config.policy().unwrap(), DecisionPolicy::default());
    }

    #[test]
    fn limit_above_ceiling_is_rejected() {
        let config = DecisionConfig {
            small_limit: 2_000.0,
            price_ceiling: 1_000.0,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDecisionPolicy(_))
        ));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let config = DecisionConfig {
            small_limit: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn custom_thresholds_are_kept() {
        let config = DecisionConfig {
            small_limit: 1_000.0,
            price_ceiling: 50_000.0,
        };
        let policy = config.policy().unwrap();
        assert_eq!(policy.small_limit(), 1_000.0);
        assert_eq!(policy.price_ceiling(), 50_000.0);
    }
}
