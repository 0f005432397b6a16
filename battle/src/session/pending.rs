//! Move fetches started by [`Battle::begin`](super::Battle::begin)

use pokeduel_client::MoveSource;
use pokeduel_protocol::{Creature, Move, MoveRef};
use rand::Rng;
use rand::seq::SliceRandom;

/// Pick one of a creature's moves uniformly at random
pub fn pick_move<'c, R: Rng + ?Sized>(creature: &'c Creature, rng: &mut R) -> Option<&'c MoveRef> {
    creature.moves.choose(rng).map(|entry| &entry.r#move)
}

/// A battle whose moves have been chosen but not yet fetched
///
/// Holds no borrow of the [`Battle`](super::Battle), so it can be run on
/// another task while the battle keeps receiving input.
#[derive(Debug, Clone)]
pub struct PendingBattle {
    pub(crate) generation: u64,
    pub(crate) move_a: MoveRef,
    pub(crate) move_b: MoveRef,
}

impl PendingBattle {
    /// Generation of the pair this battle was started for
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The chosen moves, side A then side B
    pub fn moves(&self) -> (&MoveRef, &MoveRef) {
        (&self.move_a, &self.move_b)
    }

    /// Fetch both moves concurrently
    ///
    /// Fails fast: if either fetch raises, the report carries that error.
    pub async fn run<S: MoveSource>(self, source: &S) -> BattleReport {
        tracing::debug!(
            generation = self.generation,
            move_a = %self.move_a.name,
            move_b = %self.move_b.name,
            "Fetching moves"
        );

        let result = tokio::try_join!(
            source.load_move(&self.move_a.url),
            source.load_move(&self.move_b.url)
        );

        BattleReport {
            generation: self.generation,
            result,
        }
    }
}

/// Result of a [`PendingBattle`], applied with [`Battle::complete`](super::Battle::complete)
#[derive(Debug)]
pub struct BattleReport {
    pub(crate) generation: u64,
    pub(crate) result: anyhow::Result<(Option<Move>, Option<Move>)>,
}

impl BattleReport {
    pub fn new(generation: u64, result: anyhow::Result<(Option<Move>, Option<Move>)>) -> Self {
        Self { generation, result }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }
}
