//! Wizard repository port.
//!
//! Defines the contract for holding the single wizard instance between
//! user actions. Implementations keep it in memory; nothing outlives the
//! process.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::domain::wizard::{Wizard, WizardError};

/// A change applied to the stored wizard while it is held exclusively.
///
/// Returns `Ok(true)` to keep the change. `Ok(false)` and errors leave the
/// stored wizard as it was.
pub type WizardMutation = Box<dyn FnOnce(&mut Wizard) -> Result<bool, WizardError> + Send>;

/// Outcome of [`WizardRepository::update`].
#[derive(Debug, Clone)]
pub struct WizardUpdate {
    /// The stored wizard after the update.
    pub wizard: Wizard,
    /// Whether the mutation was kept.
    pub applied: bool,
}

/// Error type for [`WizardRepository::update`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardUpdateError {
    #[error(transparent)]
    Rejected(#[from] WizardError),

    #[error("{0}")]
    Storage(#[from] DomainError),
}

/// Repository port for the wizard aggregate.
///
/// Readers get a copy. Writers hand in a mutation that runs against the
/// stored wizard with no other writer in between, so concurrent actions
/// never overwrite each other.
#[async_trait]
pub trait WizardRepository: Send + Sync {
    /// Returns a copy of the current wizard.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the backing store is unavailable
    async fn load(&self) -> Result<Wizard, DomainError>;

    /// Runs `mutation` on the current wizard as one critical section.
    ///
    /// # Errors
    ///
    /// - `Rejected` if the mutation returns a `WizardError`; nothing is stored
    /// - `Storage` if the backing store is unavailable
    async fn update(&self, mutation: WizardMutation) -> Result<WizardUpdate, WizardUpdateError>;
}
