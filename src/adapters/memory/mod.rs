//! In-memory adapters.
//!
//! ## Available Adapters
//!
//! - `InMemoryWizardRepository` - Single wizard held for the process lifetime

mod in_memory_wizard_repository;

pub use in_memory_wizard_repository::InMemoryWizardRepository;
