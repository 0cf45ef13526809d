//! Decision policy - the two tunable constants behind every verdict.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, ValidationError};

/// Amounts strictly above this are outside the tool's small-amount scope.
pub const SMALL_LIMIT: f64 = 500.0;

/// Upper clamp bound for any entered price.
pub const PRICE_CEILING: f64 = Money::DEFAULT_CEILING;

/// Thresholds used by the wizard and the verdict engine.
///
/// # Invariants
///
/// - both values are finite
/// - `0 < small_limit < price_ceiling`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionPolicy {
    small_limit: f64,
    price_ceiling: f64,
}

impl DecisionPolicy {
    /// Creates a policy, validating the threshold ordering.
    pub fn new(small_limit: f64, price_ceiling: f64) -> Result<Self, ValidationError> {
        if !price_ceiling.is_finite() || price_ceiling <= 0.0 {
            return Err(ValidationError::invalid_format(
                "price_ceiling",
                "must be a positive finite amount",
            ));
        }
        if !small_limit.is_finite() || small_limit <= 0.0 || small_limit >= price_ceiling {
            return Err(ValidationError::out_of_range(
                "small_limit",
                0.0,
                price_ceiling,
                small_limit,
            ));
        }
        Ok(Self {
            small_limit,
            price_ceiling,
        })
    }

    /// Returns the small-amount limit.
    pub fn small_limit(&self) -> f64 {
        self.small_limit
    }

    /// Returns the clamp ceiling for prices.
    pub fn price_ceiling(&self) -> f64 {
        self.price_ceiling
    }

    /// Clamps a raw amount into `[0, price_ceiling]`.
    pub fn clamp(&self, value: f64) -> Money {
        Money::clamped(value, self.price_ceiling)
    }

    /// Returns true if the price is strictly above the small limit.
    pub fn is_above_limit(&self, price: Money) -> bool {
        price.exceeds(self.small_limit)
    }
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            small_limit: SMALL_LIMIT,
            price_ceiling: PRICE_CEILING,
        }
    }
}
