//! Motive catalog - the six fixed reasons a user can give for a purchase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Why the user wants to buy the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Motive {
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
}

impl Motive {
    /// All motives in display order.
    pub const ALL: [Motive; 6] = [
        Motive::A1,
        Motive::A2,
        Motive::A3,
        Motive::A4,
        Motive::A5,
        Motive::A6,
    ];

    /// Looks up a motive by its identifier (`"A1"`..`"A6"`).
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }

    pub fn id(&self) -> &'static str {
        match self {
            Motive::A1 => "A1",
            Motive::A2 => "A2",
            Motive::A3 => "A3",
            Motive::A4 => "A4",
            Motive::A5 => "A5",
            Motive::A6 => "A6",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Motive::A1 => "Solve a problem",
            Motive::A2 => "Upgrade the experience",
            Motive::A3 => "Save effort",
            Motive::A4 => "Treat myself",
            Motive::A5 => "Forced by circumstance",
            Motive::A6 => "Gut feeling",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Motive::A1 => "There is a nuisance I want gone.",
            Motive::A2 => "It works today, but I want it a bit more comfortable.",
            Motive::A3 => "I don't want to fuss; I want less to worry about.",
            Motive::A4 => "I've been worn out lately and want a little joy.",
            Motive::A5 => "Things changed and I have to buy it.",
            Motive::A6 => "I can't say why, but I kind of want it.",
        }
    }

    /// Returns `"<id> | <title>"`.
    pub fn label(&self) -> String {
        format!("{} | {}", self.id(), self.title())
    }
}

impl fmt::Display for Motive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Motive {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s.trim()).ok_or_else(|| {
            ValidationError::invalid_format("motive_id", format!("unknown motive '{}'", s))
        })
    }
}

/// Read-only catalog row handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotiveEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub label: String,
}

impl From<Motive> for MotiveEntry {
    fn from(motive: Motive) -> Self {
        Self {
            id: motive.id().to_string(),
            title: motive.title().to_string(),
            description: motive.description().to_string(),
            label: motive.label(),
        }
    }
}

/// Returns the full catalog in display order.
pub fn motive_catalog() -> Vec<MotiveEntry> {
    Motive::ALL.into_iter().map(MotiveEntry::from).collect()
}
