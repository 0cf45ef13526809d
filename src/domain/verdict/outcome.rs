//! Verdict value object - the final recommendation shown on the result step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome category of a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    /// Buy it and stop re-litigating.
    Proceed,
    /// Defer the decision for 24 hours.
    CoolDown,
    /// Do not buy.
    DoNotPurchase,
}

impl VerdictKind {
    /// Returns the headline shown for this outcome.
    pub fn title(&self) -> &'static str {
        match self {
            VerdictKind::Proceed => "Proceed with purchase",
            VerdictKind::CoolDown => "Cool down 24 hours",
            VerdictKind::DoNotPurchase => "Do not purchase",
        }
    }
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A recommendation with title, explanation and a concrete follow-up action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    kind: VerdictKind,
    title: String,
    body: String,
    action: String,
}

impl Verdict {
    pub(crate) fn new(kind: VerdictKind, body: &str, action: &str) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            body: body.to_string(),
            action: action.to_string(),
        }
    }

    pub fn kind(&self) -> VerdictKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}
