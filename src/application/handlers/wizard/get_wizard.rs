//! GetWizardHandler - Query handler for the current wizard snapshot.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::wizard::WizardSnapshot;
use crate::ports::WizardRepository;

/// Query for the current snapshot.
#[derive(Debug, Clone, Default)]
pub struct GetWizardQuery;

/// Result of the snapshot query.
pub type GetWizardResult = WizardSnapshot;

/// Error type for the snapshot query.
#[derive(Debug, Clone)]
pub enum GetWizardError {
    /// Infrastructure error.
    Infrastructure(String),
}

impl std::fmt::Display for GetWizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetWizardError::Infrastructure(msg) => write!(f, "Infrastructure error: {}", msg),
        }
    }
}

impl std::error::Error for GetWizardError {}

impl From<DomainError> for GetWizardError {
    fn from(err: DomainError) -> Self {
        GetWizardError::Infrastructure(err.to_string())
    }
}

/// Handler returning the render view of the wizard.
pub struct GetWizardHandler {
    repository: Arc<dyn WizardRepository>,
}

impl GetWizardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: GetWizardQuery) -> Result<GetWizardResult, GetWizardError> {
        Ok(self.repository.load().await?.snapshot())
    }
}
