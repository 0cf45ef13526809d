//! WizardStep enum - position in the three-step flow.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Current step of the decision wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Item, price and motive entry.
    #[default]
    Input,
    /// The "can you accept this money being wasted" question.
    Commitment,
    /// Verdict display.
    Result,
}

impl WizardStep {
    /// Returns the 1-based position shown in the step indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Input => 1,
            WizardStep::Commitment => 2,
            WizardStep::Result => 3,
        }
    }
}

impl StateMachine for WizardStep {
    fn initial() -> Self {
        WizardStep::Input
    }

    /// Forward edges plus the reset edges back to `Input`.
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Input, Commitment) | (Commitment, Result) | (Commitment, Input) | (Result, Input)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Input => vec![Commitment],
            Commitment => vec![Result, Input],
            Result => vec![Input],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStep::Input => "input",
            WizardStep::Commitment => "commitment",
            WizardStep::Result => "result",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_input() {
        assert_eq!(WizardStep::default(), WizardStep::Input);
    }

    #[test]
    fn forward_transitions_are_valid() {
        assert!(WizardStep::Input.can_transition_to(&WizardStep::Commitment));
        assert!(WizardStep::Commitment.can_transition_to(&WizardStep::Result));
    }

    #[test]
    fn input_cannot_skip_to_result() {
        assert!(!WizardStep::Input.can_transition_to(&WizardStep::Result));
        assert!(WizardStep::Input.transition_to(WizardStep::Result).is_err());
    }

    #[test]
    fn result_cannot_go_back_to_commitment() {
        assert!(!WizardStep::Result.can_transition_to(&WizardStep::Commitment));
    }

    #[test]
    fn every_step_after_input_can_reset() {
        assert!(WizardStep::Commitment.can_transition_to(&WizardStep::Input));
        assert!(WizardStep::Result.can_transition_to(&WizardStep::Input));
    }

    #[test]
    fn every_step_restarts_to_input() {
        for step in [WizardStep::Input, WizardStep::Commitment, WizardStep::Result] {
            assert_eq!(step.restart(), Ok(WizardStep::Input), "from {:?}", step);
        }
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        for step in [WizardStep::Input, WizardStep::Commitment, WizardStep::Result] {
            for target in step.valid_transitions() {
                assert!(step.can_transition_to(&target));
            }
        }
    }

    #[test]
    fn numbers_are_one_based() {
        assert_eq!(WizardStep::Input.number(), 1);
        assert_eq!(WizardStep::Commitment.number(), 2);
        assert_eq!(WizardStep::Result.number(), 3);
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&WizardStep::Commitment).unwrap(),
            "\"commitment\""
        );
        let step: WizardStep = serde_json::from_str("\"result\"").unwrap();
        assert_eq!(step, WizardStep::Result);
    }
}
