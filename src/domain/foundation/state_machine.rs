//! Step graph trait for the wizard.
//!
//! The wizard's steps form a small cycle: forward edges walk from the
//! initial step to the last one, and reset edges lead from every later step
//! back to the initial one. Resetting while already on the initial step is a
//! self-loop and needs no edge.

use super::ValidationError;

/// A closed set of steps with an initial step and explicit edges.
///
/// ```ignore
/// impl StateMachine for WizardStep {
///     fn initial() -> Self { Input }
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Input, Commitment) | (Commitment, Result)
///             | (Commitment, Input) | (Result, Input))
///     }
///     fn valid_transitions(&self) -> Vec<Self> { ... }
/// }
///
/// let step = step.transition_to(Commitment)?;
/// let step = step.restart()?; // back to Input
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// The step a fresh or reset flow starts on.
    fn initial() -> Self;

    /// Returns true if there is an edge from self to target.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns every step reachable over one edge.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Moves along an edge, rejecting targets with no edge.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "step",
                format!("Cannot move from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Returns to the initial step, over a reset edge or as a self-loop.
    fn restart(&self) -> Result<Self, ValidationError> {
        if *self == Self::initial() {
            Ok(*self)
        } else {
            self.transition_to(Self::initial())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two forward steps; only the last one may restart.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Checkout {
        Cart,
        Payment,
        Receipt,
    }

    impl StateMachine for Checkout {
        fn initial() -> Self {
            Checkout::Cart
        }

        fn can_transition_to(&self, target: &Self) -> bool {
            use Checkout::*;
            matches!(
                (self, target),
                (Cart, Payment) | (Payment, Receipt) | (Receipt, Cart)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Checkout::*;
            match self {
                Cart => vec![Payment],
                Payment => vec![Receipt],
                Receipt => vec![Cart],
            }
        }
    }

    #[test]
    fn transition_follows_edges() {
        assert_eq!(
            Checkout::Cart.transition_to(Checkout::Payment),
            Ok(Checkout::Payment)
        );
    }

    #[test]
    fn transition_without_edge_names_both_steps() {
        match Checkout::Cart.transition_to(Checkout::Receipt) {
            Err(ValidationError::InvalidFormat { field, reason }) => {
                assert_eq!(field, "step");
                assert_eq!(reason, "Cannot move from Cart to Receipt");
            }
            other => panic!("Expected InvalidFormat error, got {:?}", other),
        }
    }

    #[test]
    fn restart_on_initial_step_is_a_self_loop() {
        assert_eq!(Checkout::Cart.restart(), Ok(Checkout::Cart));
    }

    #[test]
    fn restart_uses_reset_edge() {
        assert_eq!(Checkout::Receipt.restart(), Ok(Checkout::Cart));
    }

    #[test]
    fn restart_without_reset_edge_is_rejected() {
        assert!(Checkout::Payment.restart().is_err());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for step in [Checkout::Cart, Checkout::Payment, Checkout::Receipt] {
            for target in step.valid_transitions() {
                assert!(
                    step.can_transition_to(&target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    step,
                    target
                );
            }
        }
    }
}
