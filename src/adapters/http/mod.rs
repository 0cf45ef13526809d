//! HTTP adapters - REST API implementations.

pub mod server;
pub mod wizard;

// Re-export key types for convenience
pub use server::build_app;
pub use wizard::{wizard_router, WizardAppState};
