//! Read-only view of the wizard handed to presentation layers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;
use crate::domain::verdict::{ScopeHint, Verdict};

use super::motive::MotiveEntry;
use super::step::WizardStep;

/// The commitment question asked on step 2.
pub const COMMITMENT_QUESTION: &str = "If it does not serve the purpose you just gave, this \
     money is simply thrown away. Can you accept that?";

/// Footer shown alongside the motive catalog.
pub const DISCLAIMER: &str = "For reference only: a tool for ending indecision over small \
     purchases. It does not judge product quality or long-term value.";

/// Answers as rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswersView {
    pub item: String,
    pub price_text: String,
    pub price: Money,
    pub motive: Option<MotiveEntry>,
    pub accept_throw: Option<bool>,
}

/// Recap and question shown on the commitment step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentPrompt {
    pub summary: String,
    pub motive_label: String,
    pub question: String,
}

/// Everything a view needs to render the current step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardSnapshot {
    pub step: WizardStep,
    /// 1-based position for the "step n of 3" indicator.
    pub step_number: u8,
    pub answers: AnswersView,
    pub verdict: Option<Verdict>,
    pub scope_hint: ScopeHint,
    pub scope_hint_text: String,
    /// True when the input guard holds while on the input step.
    pub can_advance: bool,
    /// True when the commitment question is answered while on the commitment step.
    pub can_decide: bool,
    pub commitment: Option<CommitmentPrompt>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_expected_fields() {
        let snapshot = WizardSnapshot {
            step: WizardStep::Input,
            step_number: WizardStep::Input.number(),
            answers: AnswersView {
                item: String::new(),
                price_text: String::new(),
                price: Money::ZERO,
                motive: None,
                accept_throw: None,
            },
            verdict: None,
            scope_hint: ScopeHint::Unpriced,
            scope_hint_text: ScopeHint::Unpriced.message(500.0),
            can_advance: false,
            can_decide: false,
            commitment: None,
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["step"], "input");
        assert_eq!(json["step_number"], 1);
        assert_eq!(json["scope_hint"], "unpriced");
        assert!(json["verdict"].is_null());
        assert!(json["answers"]["motive"].is_null());
        assert_eq!(json["can_advance"], false);
    }
}
