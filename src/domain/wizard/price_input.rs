//! Price text normalization.
//!
//! Raw text is filtered to ASCII digits and `.` before it is stored. The
//! numeric amount is parsed from the filtered text and clamped:
//!
//! - empty text parses as zero
//! - more than one `.` is a parse failure, which clamps to zero
//! - overflow to infinity clamps to zero

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;
use crate::domain::verdict::DecisionPolicy;

/// Keeps only ASCII digits and decimal points.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Parses filtered price text, returning NaN when it is not a number.
pub fn parse(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    if text.matches('.').count() > 1 {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Filtered price text together with its clamped amount.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceInput {
    text: String,
    amount: Money,
}

impl PriceInput {
    /// Filters, parses and clamps raw input under the given policy.
    pub fn from_raw(raw: &str, policy: &DecisionPolicy) -> Self {
        let text = sanitize(raw);
        let amount = policy.clamp(parse(&text));
        Self { text, amount }
    }

    /// The filtered text, as an input box would show it.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The clamped numeric amount.
    pub fn amount(&self) -> Money {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn price(raw: &str) -> PriceInput {
        PriceInput::from_raw(raw, &DecisionPolicy::default())
    }

    #[test]
    fn sanitize_drops_everything_but_digits_and_dots() {
        assert_eq!(sanitize("12a3.5.6"), "123.5.6");
        assert_eq!(sanitize("¥ 1,299.00"), "1299.00");
        assert_eq!(sanitize("-42"), "42");
        assert_eq!(sanitize("١٢٣"), "");
    }

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(price("199").amount().value(), 199.0);
        assert_eq!(price("12.5").amount().value(), 12.5);
        assert_eq!(price(".5").amount().value(), 0.5);
        assert_eq!(price("5.").amount().value(), 5.0);
    }

    #[test]
    fn empty_and_lone_dot_are_zero() {
        assert_eq!(price("").amount(), Money::ZERO);
        assert_eq!(price("abc").amount(), Money::ZERO);
        assert_eq!(price(".").amount(), Money::ZERO);
    }

    #[test]
    fn multiple_dots_are_a_parse_failure() {
        let input = price("12a3.5.6");
        assert_eq!(input.text(), "123.5.6");
        assert_eq!(input.amount(), Money::ZERO);
        assert_eq!(price("1.2.3").amount(), Money::ZERO);
    }

    #[test]
    fn large_values_clamp_to_ceiling() {
        assert_eq!(price("1000000").amount().value(), 999_999.0);
    }

    #[test]
    fn overflowing_digits_clamp_to_zero() {
        let huge = "9".repeat(400);
        assert!(parse(&huge).is_infinite());
        assert_eq!(price(&huge).amount(), Money::ZERO);
    }

    #[test]
    fn custom_ceiling_applies() {
        let policy = DecisionPolicy::new(100.0, 1_000.0).unwrap();
        assert_eq!(PriceInput::from_raw("5000", &policy).amount().value(), 1_000.0);
    }

    proptest! {
        #[test]
        fn any_text_clamps_into_range(raw in ".*") {
            let amount = price(&raw).amount().value();
            prop_assert!(amount.is_finite());
            prop_assert!((0.0..=999_999.0).contains(&amount));
        }

        #[test]
        fn filtered_text_only_holds_digits_and_dots(raw in ".*") {
            prop_assert!(price(&raw).text().chars().all(|c| c.is_ascii_digit() || c == '.'));
        }

        #[test]
        fn text_without_any_digit_is_zero(raw in "[^0-9]*") {
            prop_assert_eq!(price(&raw).amount(), Money::ZERO);
        }

        #[test]
        fn two_or_more_dots_are_zero(a in "[0-9]{0,4}", b in "[0-9]{0,4}", c in "[0-9]{0,4}") {
            let raw = format!("{}.{}.{}", a, b, c);
            prop_assert_eq!(price(&raw).amount(), Money::ZERO);
        }
    }
}
