//! Advisory hint telling the user whether a price fits the small-amount scope.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;

/// Where the current price sits relative to the small-amount scope.
///
/// Purely advisory: nothing is blocked by an out-of-scope price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeHint {
    /// No price entered yet (or it clamped to zero).
    Unpriced,
    /// `0 < price <= limit`.
    WithinScope,
    /// `price > limit`.
    AboveScope,
}

impl ScopeHint {
    /// Classifies a price against the small limit.
    pub fn for_price(price: Money, small_limit: f64) -> Self {
        if price.is_zero() {
            ScopeHint::Unpriced
        } else if price.exceeds(small_limit) {
            ScopeHint::AboveScope
        } else {
            ScopeHint::WithinScope
        }
    }

    /// Renders the hint line with the configured limit.
    pub fn message(&self, small_limit: f64) -> String {
        let limit = display_amount(small_limit);
        match self {
            ScopeHint::Unpriced => format!("Intended for small purchases (e.g. ≤ {}).", limit),
            ScopeHint::WithinScope => format!("Small-amount scope: applicable (≤ {}).", limit),
            ScopeHint::AboveScope => format!(
                "Note: the amount is high. This tool suits small amounts (≤ {}).",
                limit
            ),
        }
    }
}

fn display_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_price_is_unpriced() {
        assert_eq!(ScopeHint::for_price(Money::ZERO, 500.0), ScopeHint::Unpriced);
    }

    #[test]
    fn limit_itself_is_within_scope() {
        assert_eq!(
            ScopeHint::for_price(Money::new(500.0), 500.0),
            ScopeHint::WithinScope
        );
        assert_eq!(
            ScopeHint::for_price(Money::new(0.5), 500.0),
            ScopeHint::WithinScope
        );
    }

    #[test]
    fn above_limit_is_above_scope() {
        assert_eq!(
            ScopeHint::for_price(Money::new(500.5), 500.0),
            ScopeHint::AboveScope
        );
    }

    #[test]
    fn messages_include_limit() {
        assert_eq!(
            ScopeHint::Unpriced.message(500.0),
            "Intended for small purchases (e.g. ≤ 500)."
        );
        assert_eq!(
            ScopeHint::WithinScope.message(500.0),
            "Small-amount scope: applicable (≤ 500)."
        );
        assert_eq!(
            ScopeHint::AboveScope.message(300.0),
            "Note: the amount is high. This tool suits small amounts (≤ 300)."
        );
    }
}
