//! Wizard command and query handlers.

// Command handlers
mod apply_wizard_action;

// Query handlers
mod get_motive_catalog;
mod get_wizard;

pub use apply_wizard_action::{
    ApplyWizardActionCommand, ApplyWizardActionError, ApplyWizardActionHandler,
    ApplyWizardActionResult, WizardAction,
};
pub use get_motive_catalog::{GetMotiveCatalogHandler, MotiveCatalog};
pub use get_wizard::{GetWizardError, GetWizardHandler, GetWizardQuery, GetWizardResult};
