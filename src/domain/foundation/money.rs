//! Money value object (non-negative, bounded amount).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative purchase amount, always finite and within a ceiling.
///
/// Construction never fails: non-finite input becomes zero and everything
/// else is clamped into `[0, ceiling]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Money(f64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0.0);

    /// Default upper bound for any amount.
    pub const DEFAULT_CEILING: f64 = 999_999.0;

    /// Creates a Money, clamping into `[0, DEFAULT_CEILING]`.
    pub fn new(value: f64) -> Self {
        Self::clamped(value, Self::DEFAULT_CEILING)
    }

    /// Creates a Money, clamping into `[0, ceiling]`.
    ///
    /// Non-finite values (NaN, infinities) coerce to zero.
    pub fn clamped(value: f64, ceiling: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::ZERO;
        }
        Self(value.min(ceiling.max(0.0)))
    }

    /// Returns the amount as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns true if the amount is strictly greater than `limit`.
    pub fn exceeds(&self, limit: f64) -> bool {
        self.0 > limit
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
