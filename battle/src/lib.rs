//! Single-round battle between two catalog creatures.
//!
//! # Overview
//!
//! `pokeduel-battle` sits on top of the fetch service and below the front-end:
//!
//! ```text
//! pokeduel-protocol (catalog records)
//!        │
//!        ▼
//! pokeduel-client (fetch service, MoveSource)
//!        │
//!        ▼
//! pokeduel-battle (battle state + resolution) ← THIS CRATE
//!        │
//!        └─> pokeduel-app (terminal front-end)
//! ```
//!
//! # Main Types
//!
//! - [`Battle`] - Owns the battle state; the only writer of it
//! - [`PendingBattle`] - Moves chosen by [`Battle::begin`], fetched with [`PendingBattle::run`]
//! - [`BattleReport`] - Result of a pending battle, applied with [`Battle::complete`]
//! - [`BattleState`] - Moves and log for the current pair
//! - [`Outcome`] - Draw or victory, from comparing move power
//! - [`BattleView`] - Render model published on a watch channel
//!
//! # Example Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use pokeduel_battle::Battle;
//! use pokeduel_client::CatalogClient;
//!
//! let client = CatalogClient::from_env()?;
//! let mut battle = Battle::new();
//!
//! let (a, b) = client.fetch_random_pair().await;
//! battle.set_creatures(a.map(Arc::new), b.map(Arc::new));
//!
//! battle.start_battle(&client).await;
//! println!("{}", battle.view().log_text());
//! ```

pub mod session;
pub mod types;
pub mod view;

pub use session::{Battle, BattleReport, PendingBattle, pick_move};
pub use types::{BATTLE_ERROR, BattleState, DRAW_TEXT, Outcome, Phase, Side};
pub use view::{BattleView, CreaturePanel, IDLE_PROMPT, START_PROMPT, move_badge};

// Re-export the catalog types a battle is built from
pub use pokeduel_protocol::{Creature, Move, MoveRef};
