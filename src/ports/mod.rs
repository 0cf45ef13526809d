//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WizardRepository` - Holds the wizard between user actions

mod wizard_repository;

pub use wizard_repository::{WizardMutation, WizardRepository, WizardUpdate, WizardUpdateError};
