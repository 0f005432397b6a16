//! The battle component and its in-flight work

mod battle;
mod pending;

pub use battle::Battle;
pub use pending::{BattleReport, PendingBattle, pick_move};
