//! Battle domain types

mod outcome;
mod state;

pub use outcome::{DRAW_TEXT, Outcome, Side};
pub use state::{BATTLE_ERROR, BattleState, Phase};
