//! Move records (`/move/{id}`)

use serde::{Deserialize, Serialize};

/// Reference to a move as listed on a creature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRef {
    pub name: String,

    /// Absolute URL of the move record
    pub url: String,
}

/// A move as returned by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,

    /// Base power; `null` for status moves
    #[serde(default)]
    pub power: Option<u32>,
}

impl Move {
    pub fn new(name: impl Into<String>, power: u32) -> Self {
        Self {
            name: name.into(),
            power: Some(power),
        }
    }

    /// Base power, with a missing value counted as 0
    pub fn power_or_zero(&self) -> u32 {
        self.power.unwrap_or(0)
    }
}
