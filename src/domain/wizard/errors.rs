//! Wizard-specific error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

use super::step::WizardStep;

/// Operations a presentation layer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardOperation {
    SetItem,
    SetPrice,
    SelectMotive,
    AdvanceToCommitment,
    SetAcceptThrow,
    Decide,
    Reset,
}

impl WizardOperation {
    /// The only step in which the operation is accepted, if restricted.
    pub fn required_step(&self) -> Option<WizardStep> {
        match self {
            WizardOperation::SetItem
            | WizardOperation::SetPrice
            | WizardOperation::SelectMotive
            | WizardOperation::AdvanceToCommitment => Some(WizardStep::Input),
            WizardOperation::SetAcceptThrow | WizardOperation::Decide => {
                Some(WizardStep::Commitment)
            }
            WizardOperation::Reset => None,
        }
    }
}

impl fmt::Display for WizardOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardOperation::SetItem => "set the item",
            WizardOperation::SetPrice => "set the price",
            WizardOperation::SelectMotive => "select a motive",
            WizardOperation::AdvanceToCommitment => "advance to the commitment step",
            WizardOperation::SetAcceptThrow => "answer the commitment question",
            WizardOperation::Decide => "decide",
            WizardOperation::Reset => "reset",
        };
        write!(f, "{}", s)
    }
}

/// An answer still required before leaving the input step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAnswer {
    Item,
    Price,
    Motive,
}

impl MissingAnswer {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingAnswer::Item => "item",
            MissingAnswer::Price => "price",
            MissingAnswer::Motive => "motive",
        }
    }
}

fn join_missing(missing: &[MissingAnswer]) -> String {
    missing
        .iter()
        .map(MissingAnswer::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rejected wizard operations. The wizard state is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error("Cannot {operation} while on the {step} step")]
    WrongStep {
        operation: WizardOperation,
        step: WizardStep,
    },

    #[error("Cannot advance yet, missing: {}", join_missing(.missing))]
    GuardNotSatisfied { missing: Vec<MissingAnswer> },

    #[error("Choose whether you can accept the loss before deciding")]
    AcceptanceNotChosen,

    #[error("Invalid step transition: {0}")]
    InvalidTransition(#[from] ValidationError),
}

impl WizardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::WrongStep { .. } => ErrorCode::WrongStep,
            WizardError::GuardNotSatisfied { .. } => ErrorCode::GuardNotSatisfied,
            WizardError::AcceptanceNotChosen => ErrorCode::AcceptanceNotChosen,
            WizardError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
        }
    }
}
