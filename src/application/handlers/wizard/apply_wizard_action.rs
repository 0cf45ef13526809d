//! ApplyWizardActionHandler - Command handler for every user action on the wizard.
//!
//! Applies one action to the stored wizard inside the repository's critical
//! section and returns the fresh snapshot. A rejected action is not stored.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::foundation::ErrorCode;
use crate::domain::wizard::{Wizard, WizardError, WizardOperation, WizardSnapshot};
use crate::ports::{WizardRepository, WizardUpdateError};

/// A single user action forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardAction {
    SetItem { item: String },
    SetPrice { price: String },
    SelectMotive { motive_id: String },
    AdvanceToCommitment,
    SetAcceptThrow { accept_throw: bool },
    Decide,
    Reset,
}

impl WizardAction {
    pub fn operation(&self) -> WizardOperation {
        match self {
            WizardAction::SetItem { .. } => WizardOperation::SetItem,
            WizardAction::SetPrice { .. } => WizardOperation::SetPrice,
            WizardAction::SelectMotive { .. } => WizardOperation::SelectMotive,
            WizardAction::AdvanceToCommitment => WizardOperation::AdvanceToCommitment,
            WizardAction::SetAcceptThrow { .. } => WizardOperation::SetAcceptThrow,
            WizardAction::Decide => WizardOperation::Decide,
            WizardAction::Reset => WizardOperation::Reset,
        }
    }
}

/// Command to apply one action.
#[derive(Debug, Clone)]
pub struct ApplyWizardActionCommand {
    pub action: WizardAction,
}

/// Result of a successfully applied action.
#[derive(Debug, Clone)]
pub struct ApplyWizardActionResult {
    /// Snapshot after the action.
    pub snapshot: WizardSnapshot,
    /// False when the action was accepted but changed nothing (unknown motive id).
    pub applied: bool,
}

/// Error type for applying an action.
#[derive(Debug, Clone)]
pub enum ApplyWizardActionError {
    /// The wizard rejected the action; nothing was stored.
    Rejected(WizardError),
    /// Repository failure.
    Infrastructure(String),
}

impl ApplyWizardActionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApplyWizardActionError::Rejected(err) => err.code(),
            ApplyWizardActionError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl std::fmt::Display for ApplyWizardActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplyWizardActionError::Rejected(err) => write!(f, "{}", err),
            ApplyWizardActionError::Infrastructure(msg) => {
                write!(f, "Infrastructure error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ApplyWizardActionError {}

impl From<WizardError> for ApplyWizardActionError {
    fn from(err: WizardError) -> Self {
        ApplyWizardActionError::Rejected(err)
    }
}

impl From<WizardUpdateError> for ApplyWizardActionError {
    fn from(err: WizardUpdateError) -> Self {
        match err {
            WizardUpdateError::Rejected(err) => ApplyWizardActionError::Rejected(err),
            WizardUpdateError::Storage(err) => {
                ApplyWizardActionError::Infrastructure(err.to_string())
            }
        }
    }
}

/// Handler for wizard actions.
pub struct ApplyWizardActionHandler {
    repository: Arc<dyn WizardRepository>,
}

impl ApplyWizardActionHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ApplyWizardActionCommand,
    ) -> Result<ApplyWizardActionResult, ApplyWizardActionError> {
        let operation = cmd.action.operation();
        let action = cmd.action;

        let update = self
            .repository
            .update(Box::new(move |wizard: &mut Wizard| {
                let from = wizard.step();
                match apply(wizard, action) {
                    Ok(applied) => {
                        debug!(
                            %operation,
                            from = %from,
                            to = %wizard.step(),
                            applied,
                            "Wizard action applied"
                        );
                        Ok(applied)
                    }
                    Err(err) => {
                        warn!(%operation, step = %from, error = %err, "Wizard action rejected");
                        Err(err)
                    }
                }
            }))
            .await?;

        Ok(ApplyWizardActionResult {
            snapshot: update.wizard.snapshot(),
            applied: update.applied,
        })
    }
}

fn apply(wizard: &mut Wizard, action: WizardAction) -> Result<bool, WizardError> {
    match action {
        WizardAction::SetItem { item } => wizard.set_item(item)?,
        WizardAction::SetPrice { price } => {
            let amount = wizard.set_price(&price)?;
            debug!(price = %amount, "Price normalized");
        }
        WizardAction::SelectMotive { motive_id } => {
            if !wizard.select_motive_id(&motive_id)? {
                debug!(motive_id = %motive_id, "Ignoring unknown motive id");
                return Ok(false);
            }
        }
        WizardAction::AdvanceToCommitment => {
            wizard.advance_to_commitment()?;
        }
        WizardAction::SetAcceptThrow { accept_throw } => wizard.set_accept_throw(accept_throw)?,
        WizardAction::Decide => {
            let price = wizard.answers().price();
            let verdict = wizard.decide()?;
            info!(kind = ?verdict.kind(), %price, "Verdict issued");
        }
        WizardAction::Reset => {
            wizard.reset()?;
        }
    }
    Ok(true)
}
