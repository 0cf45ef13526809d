//! Wizard aggregate - the three-step decision flow.
//!
//! # Invariants
//!
//! - `Commitment` is reached only with a non-empty (trimmed) item, a motive,
//!   and a clamped price above zero
//! - `Result` is reached only with `accept_throw` chosen and a verdict computed
//! - a verdict is present if and only if the step is `Result`
//! - a rejected operation leaves the wizard unchanged

use crate::domain::foundation::{Money, StateMachine};
use crate::domain::verdict::{DecisionPolicy, Verdict, VerdictEngine};

use super::answers::Answers;
use super::errors::{WizardError, WizardOperation};
use super::motive::{Motive, MotiveEntry};
use super::snapshot::{AnswersView, CommitmentPrompt, WizardSnapshot, COMMITMENT_QUESTION};
use super::step::WizardStep;

/// The decision wizard: current step, answers, and the verdict once decided.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wizard {
    step: WizardStep,
    answers: Answers,
    verdict: Option<Verdict>,
    engine: VerdictEngine,
}

impl Wizard {
    /// Creates an empty wizard on the input step.
    pub fn new(policy: DecisionPolicy) -> Self {
        Self {
            step: WizardStep::Input,
            answers: Answers::default(),
            verdict: None,
            engine: VerdictEngine::new(policy),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    pub fn policy(&self) -> &DecisionPolicy {
        self.engine.policy()
    }

    /// True when `advance_to_commitment` would succeed.
    pub fn can_advance(&self) -> bool {
        self.step == WizardStep::Input && self.answers.is_ready_for_commitment()
    }

    /// True when `decide` would succeed.
    pub fn can_decide(&self) -> bool {
        self.step == WizardStep::Commitment && self.answers.accept_throw().is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input step
    // ─────────────────────────────────────────────────────────────────────────

    /// Stores the item text as given.
    pub fn set_item(&mut self, item: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_step(WizardOperation::SetItem)?;
        self.answers.set_item(item.into());
        Ok(())
    }

    /// Stores filtered price text and returns the clamped amount.
    pub fn set_price(&mut self, raw: &str) -> Result<Money, WizardError> {
        self.ensure_step(WizardOperation::SetPrice)?;
        let policy = *self.engine.policy();
        Ok(self.answers.set_price(raw, &policy))
    }

    pub fn select_motive(&mut self, motive: Motive) -> Result<(), WizardError> {
        self.ensure_step(WizardOperation::SelectMotive)?;
        self.answers.set_motive(motive);
        Ok(())
    }

    /// Selects a motive by id. Unknown ids leave the wizard untouched and
    /// return `Ok(false)`.
    pub fn select_motive_id(&mut self, motive_id: &str) -> Result<bool, WizardError> {
        self.ensure_step(WizardOperation::SelectMotive)?;
        match Motive::from_id(motive_id) {
            Some(motive) => {
                self.answers.set_motive(motive);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Moves to the commitment step once item, price and motive are set.
    pub fn advance_to_commitment(&mut self) -> Result<WizardStep, WizardError> {
        self.ensure_step(WizardOperation::AdvanceToCommitment)?;
        let missing = self.answers.missing_for_commitment();
        if !missing.is_empty() {
            return Err(WizardError::GuardNotSatisfied { missing });
        }
        self.step = self.step.transition_to(WizardStep::Commitment)?;
        Ok(self.step)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commitment step
    // ─────────────────────────────────────────────────────────────────────────

    /// Records whether the user can accept the money being wasted.
    pub fn set_accept_throw(&mut self, accept: bool) -> Result<(), WizardError> {
        self.ensure_step(WizardOperation::SetAcceptThrow)?;
        self.answers.set_accept_throw(accept);
        Ok(())
    }

    /// Runs the verdict engine and moves to the result step.
    pub fn decide(&mut self) -> Result<&Verdict, WizardError> {
        self.ensure_step(WizardOperation::Decide)?;
        let accept = self
            .answers
            .accept_throw()
            .ok_or(WizardError::AcceptanceNotChosen)?;
        let next = self.step.transition_to(WizardStep::Result)?;

        let verdict = self.engine.decide(self.answers.price(), accept);
        self.step = next;
        let verdict = self.verdict.insert(verdict);
        Ok(&*verdict)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Any step
    // ─────────────────────────────────────────────────────────────────────────

    /// Clears every answer and the verdict and returns to the input step.
    pub fn reset(&mut self) -> Result<WizardStep, WizardError> {
        let next = self.step.restart()?;
        self.answers = Answers::default();
        self.verdict = None;
        self.step = next;
        Ok(next)
    }

    /// Builds the render view for the current state.
    pub fn snapshot(&self) -> WizardSnapshot {
        let policy = self.engine.policy();
        let price = self.answers.price();
        let scope_hint = self.engine.scope_hint(price);
        let motive = self.answers.motive();

        let commitment = match (self.step, motive) {
            (WizardStep::Commitment, Some(motive)) => Some(CommitmentPrompt {
                summary: format!(
                    "You want to buy: {} (about {})",
                    self.answers.item(),
                    price
                ),
                motive_label: motive.label(),
                question: COMMITMENT_QUESTION.to_string(),
            }),
            _ => None,
        };

        WizardSnapshot {
            step: self.step,
            step_number: self.step.number(),
            answers: AnswersView {
                item: self.answers.item().to_string(),
                price_text: self.answers.price_text().to_string(),
                price,
                motive: motive.map(MotiveEntry::from),
                accept_throw: self.answers.accept_throw(),
            },
            verdict: self.verdict.clone(),
            scope_hint,
            scope_hint_text: scope_hint.message(policy.small_limit()),
            can_advance: self.can_advance(),
            can_decide: self.can_decide(),
            commitment,
        }
    }

    fn ensure_step(&self, operation: WizardOperation) -> Result<(), WizardError> {
        match operation.required_step() {
            Some(required) if required != self.step => Err(WizardError::WrongStep {
                operation,
                step: self.step,
            }),
            _ => Ok(()),
        }
    }
}
