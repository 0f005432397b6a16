//! Render model for the battle
//!
//! A [`BattleView`] is a plain snapshot of what a front-end should show. It
//! is what the battle publishes through its watch channel.

use pokeduel_protocol::{Creature, Move};

use crate::types::{BattleState, Phase};

/// Shown while no pair is selected
pub const IDLE_PROMPT: &str = "Please click Select Pokémon";

/// Shown in the battle log while it is empty
pub const START_PROMPT: &str = "Click Start Battle!";

/// What a front-end should render
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BattleView {
    /// No creatures selected
    Idle { prompt: &'static str },

    /// Both creatures on the field
    Arena {
        a: CreaturePanel,
        b: CreaturePanel,
        log: String,
        phase: Phase,
    },
}

impl BattleView {
    pub fn idle() -> Self {
        BattleView::Idle {
            prompt: IDLE_PROMPT,
        }
    }

    /// Build the arena view; creature A faces front, creature B shows its back
    pub fn arena(a: &Creature, b: &Creature, state: &BattleState, phase: Phase) -> Self {
        BattleView::Arena {
            a: CreaturePanel::new(a, a.front_sprite(), state.move_a.as_ref()),
            b: CreaturePanel::new(b, b.back_sprite(), state.move_b.as_ref()),
            log: state.log.clone(),
            phase,
        }
    }

    /// Text for the battle log box, or the idle prompt
    pub fn log_text(&self) -> &str {
        match self {
            BattleView::Idle { prompt } => *prompt,
            BattleView::Arena { log, .. } if log.is_empty() => START_PROMPT,
            BattleView::Arena { log, .. } => log.as_str(),
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            BattleView::Idle { .. } => Phase::Idle,
            BattleView::Arena { phase, .. } => *phase,
        }
    }

    pub fn panels(&self) -> Option<(&CreaturePanel, &CreaturePanel)> {
        match self {
            BattleView::Idle { .. } => None,
            BattleView::Arena { a, b, .. } => Some((a, b)),
        }
    }
}

impl Default for BattleView {
    fn default() -> Self {
        Self::idle()
    }
}

/// One creature's box: name, sprite and the move it used
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CreaturePanel {
    pub name: String,
    pub sprite: Option<String>,
    pub badge: Option<String>,
}

impl CreaturePanel {
    fn new(creature: &Creature, sprite: Option<&str>, move_data: Option<&Move>) -> Self {
        Self {
            name: creature.name.clone(),
            sprite: sprite.map(str::to_string),
            badge: move_data.map(move_badge),
        }
    }
}

/// Badge text for a fetched move: "{name}: {power}"
pub fn move_badge(move_data: &Move) -> String {
    format!("{}: {}", move_data.name, move_data.power_or_zero())
}
