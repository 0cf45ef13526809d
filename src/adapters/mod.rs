//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-process wizard storage
//! - `http` - Axum REST surface

pub mod http;
pub mod memory;

pub use self::http::{build_app, wizard_router, WizardAppState};
pub use memory::InMemoryWizardRepository;
