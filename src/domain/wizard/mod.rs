//! Wizard module - the three-step purchase decision flow.
//!
//! # Flow
//!
//! ```text
//! Input ──advance──▶ Commitment ──decide──▶ Result
//!   ▲                    │                    │
//!   └──────reset─────────┴────────────────────┘
//! ```

mod aggregate;
mod answers;
mod errors;
mod motive;
mod price_input;
mod snapshot;
mod step;

pub use aggregate::Wizard;
pub use answers::Answers;
pub use errors::{MissingAnswer, WizardError, WizardOperation};
pub use motive::{motive_catalog, Motive, MotiveEntry};
pub use price_input::{parse as parse_price_text, sanitize as sanitize_price_text, PriceInput};
pub use snapshot::{AnswersView, CommitmentPrompt, WizardSnapshot, COMMITMENT_QUESTION, DISCLAIMER};
pub use step::WizardStep;
