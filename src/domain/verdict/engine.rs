//! Verdict Engine - maps (price, commitment answer) to a canned recommendation.
//!
//! The decision table has four rows keyed by whether the user accepts the
//! money being thrown away and whether the price is strictly above the small
//! limit:
//!
//! | accept_throw | above limit | outcome |
//! |---|---|---|
//! | yes | yes | cool down 24 hours |
//! | yes | no  | proceed with purchase |
//! | no  | yes | cool down 24 hours |
//! | no  | no  | do not purchase |

use crate::domain::foundation::Money;

use super::outcome::{Verdict, VerdictKind};
use super::policy::DecisionPolicy;
use super::scope_hint::ScopeHint;

/// Static text for one row of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictTemplate {
    pub kind: VerdictKind,
    pub body: &'static str,
    pub action: &'static str,
}

const DISCARD_AND_MOVE_ON: &str = "Remove it from your cart or wishlist immediately and do \
     something concrete instead (wash your face, take a walk, answer a message).";

const ACCEPTED_BUT_EXPENSIVE: VerdictTemplate = VerdictTemplate {
    kind: VerdictKind::CoolDown,
    body: "You are willing to absorb the loss, but the amount is high. To avoid replaying \
           this decision afterwards, set it aside for 24 hours, then decide.",
    action: "Close this page now and come back in 24 hours.",
};

const ACCEPTED_AND_SMALL: VerdictTemplate = VerdictTemplate {
    kind: VerdictKind::Proceed,
    body: "You have made the commitment: even if it misses its purpose, this money counts \
           as a sunk cost. Stop second-guessing it.",
    action: "Buy it and be done: if it disappoints, return, resell or discard it by your \
             rule (pick only one).",
};

const REFUSED_AND_EXPENSIVE: VerdictTemplate = VerdictTemplate {
    kind: VerdictKind::CoolDown,
    body: "You cannot afford for this to become a sunk cost right now. Set it aside for \
           24 hours rather than betting while conflicted.",
    action: DISCARD_AND_MOVE_ON,
};

const REFUSED_AND_SMALL: VerdictTemplate = VerdictTemplate {
    kind: VerdictKind::DoNotPurchase,
    body: "You cannot afford for this to become a sunk cost, so do not buy it. This is not \
           a loss; it is cutting one.",
    action: DISCARD_AND_MOVE_ON,
};

/// Looks up the table row for an answer pair.
pub fn template_for(accept_throw: bool, above_limit: bool) -> &'static VerdictTemplate {
    match (accept_throw, above_limit) {
        (true, true) => &ACCEPTED_BUT_EXPENSIVE,
        (true, false) => &ACCEPTED_AND_SMALL,
        (false, true) => &REFUSED_AND_EXPENSIVE,
        (false, false) => &REFUSED_AND_SMALL,
    }
}

/// Pure decision service parameterized by a [`DecisionPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VerdictEngine {
    policy: DecisionPolicy,
}

impl VerdictEngine {
    pub fn new(policy: DecisionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DecisionPolicy {
        &self.policy
    }

    /// Produces the verdict for a price and the user's commitment answer.
    ///
    /// A price equal to the small limit counts as small.
    pub fn decide(&self, price: Money, accept_throw: bool) -> Verdict {
        let template = template_for(accept_throw, self.policy.is_above_limit(price));
        Verdict::new(template.kind, template.body, template.action)
    }

    /// Classifies a price against the small-amount scope.
    pub fn scope_hint(&self, price: Money) -> ScopeHint {
        ScopeHint::for_price(price, self.policy.small_limit())
    }
}

/// Decides with the default policy (limit 500).
pub fn decide(price: Money, accept_throw: bool) -> Verdict {
    VerdictEngine::default().decide(price, accept_throw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepted_small_amount_proceeds() {
        let verdict = decide(Money::new(199.0), true);
        assert_eq!(verdict.kind(), VerdictKind::Proceed);
        assert_eq!(verdict.title(), "Proceed with purchase");
        assert!(verdict.body().contains("sunk cost"));
    }

    #[test]
    fn accepted_large_amount_cools_down() {
        let verdict = decide(Money::new(800.0), true);
        assert_eq!(verdict.title(), "Cool down 24 hours");
        assert_eq!(verdict.action(), "Close this page now and come back in 24 hours.");
    }

    #[test]
    fn refused_large_amount_cools_down_with_discard_action() {
        let verdict = decide(Money::new(800.0), false);
        assert_eq!(verdict.title(), "Cool down 24 hours");
        assert_eq!(verdict.action(), DISCARD_AND_MOVE_ON);
    }

    #[test]
    fn refused_small_amount_does_not_purchase() {
        let verdict = decide(Money::new(50.0), false);
        assert_eq!(verdict.kind(), VerdictKind::DoNotPurchase);
        assert_eq!(verdict.title(), "Do not purchase");
        assert!(verdict.body().contains("cutting one"));
    }

    #[test]
    fn both_cool_down_rows_have_distinct_bodies() {
        let accepted = decide(Money::new(900.0), true);
        let refused = decide(Money::new(900.0), false);
        assert_eq!(accepted.kind(), refused.kind());
        assert_ne!(accepted.body(), refused.body());
        assert_ne!(accepted.action(), refused.action());
    }

    #[test]
    fn price_equal_to_limit_is_small() {
        assert_eq!(decide(Money::new(500.0), true).kind(), VerdictKind::Proceed);
        assert_eq!(decide(Money::new(500.0), false).kind(), VerdictKind::DoNotPurchase);
        assert_eq!(decide(Money::new(500.01), true).kind(), VerdictKind::CoolDown);
    }

    #[test]
    fn custom_policy_moves_the_threshold() {
        let engine = VerdictEngine::new(DecisionPolicy::new(100.0, 10_000.0).unwrap());
        assert_eq!(engine.decide(Money::new(150.0), true).kind(), VerdictKind::CoolDown);
        assert_eq!(engine.decide(Money::new(100.0), true).kind(), VerdictKind::Proceed);
    }

    #[test]
    fn scope_hint_uses_policy_limit() {
        let engine = VerdictEngine::default();
        assert_eq!(engine.scope_hint(Money::ZERO), ScopeHint::Unpriced);
        assert_eq!(engine.scope_hint(Money::new(499.0)), ScopeHint::WithinScope);
        assert_eq!(engine.scope_hint(Money::new(501.0)), ScopeHint::AboveScope);
    }

    proptest! {
        #[test]
        fn small_refused_is_always_do_not_purchase(price in 0.0f64..=500.0) {
            let verdict = decide(Money::new(price), false);
            prop_assert_eq!(verdict.title(), "Do not purchase");
        }

        #[test]
        fn small_accepted_is_always_proceed(price in 0.0f64..=500.0) {
            let verdict = decide(Money::new(price), true);
            prop_assert_eq!(verdict.title(), "Proceed with purchase");
        }

        #[test]
        fn above_limit_always_cools_down(price in 500.000_001f64..=999_999.0, accept in any::<bool>()) {
            let verdict = decide(Money::new(price), accept);
            prop_assert_eq!(verdict.title(), "Cool down 24 hours");
        }
    }
}
