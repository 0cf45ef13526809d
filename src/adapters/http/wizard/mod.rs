//! HTTP adapter for the wizard module.
//!
//! This module exposes the purchase-decision wizard via REST endpoints.
//! Every mutating endpoint responds with the full wizard snapshot.

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::{WizardApiError, WizardAppState};
pub use routes::wizard_router;
