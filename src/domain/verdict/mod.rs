//! Verdict Module - Pure decision service for the result step.
//!
//! All functions here are pure: they take a price and the commitment answer
//! and return a verdict. No ports or adapters are involved.
//!
//! # Components
//!
//! - `DecisionPolicy` - Small limit (500) and price ceiling (999999)
//! - `VerdictEngine` - Decision table lookup
//! - `Verdict` / `VerdictKind` - The recommendation shown to the user
//! - `ScopeHint` - Advisory small-amount hint

mod engine;
mod outcome;
mod policy;
mod scope_hint;

pub use engine::{decide, template_for, VerdictEngine, VerdictTemplate};
pub use outcome::{Verdict, VerdictKind};
pub use policy::{DecisionPolicy, PRICE_CEILING, SMALL_LIMIT};
pub use scope_hint::ScopeHint;
