//! Battle state value

use pokeduel_protocol::Move;

/// Log text when the move fetch raises
pub const BATTLE_ERROR: &str = "An error occurred during battle.";

/// Where the battle is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Phase {
    /// No pair selected
    #[default]
    Idle,
    /// Pair selected, no outcome yet
    Ready,
    /// Moves are being fetched
    Fetching,
    /// Both moves present, outcome in the log
    Resolved,
    /// The move fetch raised
    Errored,
}

/// Moves and log of the current battle
///
/// Cleared whenever the pair changes; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BattleState {
    pub move_a: Option<Move>,
    pub move_b: Option<Move>,
    pub log: String,
}

impl BattleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether both moves have been fetched
    pub fn has_both_moves(&self) -> bool {
        self.move_a.is_some() && self.move_b.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
