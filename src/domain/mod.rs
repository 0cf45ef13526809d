//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (Money, state machine trait, errors)
//! - `verdict` - Pure decision service mapping price and commitment to a verdict
//! - `wizard` - Three-step wizard aggregate, motive catalog, render snapshot

pub mod foundation;
pub mod verdict;
pub mod wizard;
