//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, the state machine trait, and error types
//! that form the vocabulary of the purchase-decision domain.

mod errors;
mod money;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use money::Money;
pub use state_machine::StateMachine;
