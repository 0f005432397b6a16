//! Battle - the single-round battle component

use std::sync::Arc;

use pokeduel_client::MoveSource;
use pokeduel_protocol::Creature;
use rand::Rng;
use tokio::sync::watch;

use super::pending::{BattleReport, PendingBattle, pick_move};
use crate::types::{BATTLE_ERROR, BattleState, Outcome, Phase};
use crate::view::BattleView;

/// A single-round battle between two creatures
///
/// The battle is the only writer of its state. Every change is published as a
/// [`BattleView`] on a watch channel, see [`Battle::subscribe`].
///
/// Each selected pair gets a new generation number. Work started for an older
/// generation is discarded when it completes, and only one battle per
/// generation may be in flight at a time.
#[derive(Debug)]
pub struct Battle {
    creature_a: Option<Arc<Creature>>,
    creature_b: Option<Arc<Creature>>,

    state: BattleState,
    phase: Phase,

    /// Outcome of the last resolved round for this pair
    outcome: Option<Outcome>,

    /// Bumped whenever the pair changes
    generation: u64,

    view_tx: watch::Sender<BattleView>,
}

impl Battle {
    /// Create a battle with no creatures selected
    pub fn new() -> Self {
        let (view_tx, _) = watch::channel(BattleView::idle());
        Self {
            creature_a: None,
            creature_b: None,
            state: BattleState::new(),
            phase: Phase::Idle,
            outcome: None,
            generation: 0,
            view_tx,
        }
    }

    /// Observe the rendered battle
    pub fn subscribe(&self) -> watch::Receiver<BattleView> {
        self.view_tx.subscribe()
    }

    /// Render the current state
    pub fn view(&self) -> BattleView {
        match (&self.creature_a, &self.creature_b) {
            (Some(a), Some(b)) => BattleView::arena(a, b, &self.state, self.phase),
            _ => BattleView::idle(),
        }
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn creature_a(&self) -> Option<&Creature> {
        self.creature_a.as_deref()
    }

    pub fn creature_b(&self) -> Option<&Creature> {
        self.creature_b.as_deref()
    }

    /// Select a new pair of creatures
    ///
    /// If either side is a different creature than before, the state is reset
    /// unconditionally and any battle in flight becomes stale. Returns whether
    /// the pair changed.
    pub fn set_creatures(
        &mut self,
        creature_a: Option<Arc<Creature>>,
        creature_b: Option<Arc<Creature>>,
    ) -> bool {
        if same_creature(&self.creature_a, &creature_a)
            && same_creature(&self.creature_b, &creature_b)
        {
            return false;
        }

        if self.phase == Phase::Fetching {
            tracing::debug!(
                generation = self.generation,
                "Pair changed while fetching; in-flight battle will be ignored"
            );
        }

        self.creature_a = creature_a;
        self.creature_b = creature_b;
        self.generation += 1;
        self.state.clear();
        self.outcome = None;
        self.phase = if self.creature_a.is_some() && self.creature_b.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        };

        tracing::info!(
            generation = self.generation,
            a = self.creature_a.as_deref().map(|c| c.name.as_str()),
            b = self.creature_b.as_deref().map(|c| c.name.as_str()),
            "Selected creatures"
        );

        self.publish();
        true
    }

    /// Start a battle: choose one move per side
    ///
    /// Returns `None` if no pair is selected or a battle for this pair is
    /// already in flight. A creature without moves fails the battle.
    pub fn begin(&mut self) -> Option<PendingBattle> {
        self.begin_with_rng(&mut rand::thread_rng())
    }

    /// [`begin`](Self::begin) with an explicit random source
    pub fn begin_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<PendingBattle> {
        let (Some(a), Some(b)) = (&self.creature_a, &self.creature_b) else {
            tracing::debug!("Cannot start battle: no creatures selected");
            return None;
        };

        if self.phase == Phase::Fetching {
            tracing::debug!(
                generation = self.generation,
                "Battle already in progress"
            );
            return None;
        }

        let (Some(move_a), Some(move_b)) = (pick_move(a, rng), pick_move(b, rng)) else {
            tracing::warn!(
                a = %a.name,
                a_moves = a.move_count(),
                b = %b.name,
                b_moves = b.move_count(),
                "Cannot start battle: creature has no moves"
            );
            self.state.log = BATTLE_ERROR.to_string();
            self.phase = Phase::Errored;
            self.publish();
            return None;
        };

        let pending = PendingBattle {
            generation: self.generation,
            move_a: move_a.clone(),
            move_b: move_b.clone(),
        };

        self.phase = Phase::Fetching;
        self.publish();
        Some(pending)
    }

    /// Apply the result of a pending battle
    ///
    /// Returns `false` if the report belongs to an older pair and was ignored.
    pub fn complete(&mut self, report: BattleReport) -> bool {
        if report.generation != self.generation || self.phase != Phase::Fetching {
            tracing::debug!(
                report_generation = report.generation,
                generation = self.generation,
                "Discarding stale battle result"
            );
            return false;
        }

        match report.result {
            Err(e) => {
                tracing::warn!(error = %e, "Battle failed");
                self.state.log = BATTLE_ERROR.to_string();
                self.phase = Phase::Errored;
            }
            Ok((move_a, move_b)) => {
                self.state.move_a = move_a;
                self.state.move_b = move_b;
                self.resolve();
            }
        }

        self.publish();
        true
    }

    /// Run a whole battle against a move source
    pub async fn start_battle<S: MoveSource>(&mut self, source: &S) -> bool {
        let Some(pending) = self.begin() else {
            return false;
        };

        let report = pending.run(source).await;
        self.complete(report)
    }

    fn resolve(&mut self) {
        let (Some(a), Some(b)) = (&self.creature_a, &self.creature_b) else {
            return;
        };

        match (&self.state.move_a, &self.state.move_b) {
            (Some(move_a), Some(move_b)) => {
                let outcome = Outcome::resolve(move_a, move_b);
                self.state.log = outcome.describe(a, b, move_a, move_b);
                self.outcome = Some(outcome);
                self.phase = Phase::Resolved;

                tracing::info!(
                    move_a = %move_a.name,
                    power_a = move_a.power_or_zero(),
                    move_b = %move_b.name,
                    power_b = move_b.power_or_zero(),
                    outcome = ?outcome,
                    "Battle resolved"
                );
            }
            // A source that swallowed its own failure; nothing to compare
            _ => {
                tracing::warn!(
                    move_a = self.state.move_a.is_some(),
                    move_b = self.state.move_b.is_some(),
                    "Move missing after fetch; battle left unresolved"
                );
                self.outcome = None;
                self.phase = Phase::Ready;
            }
        }
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.view());
    }
}

impl Default for Battle {
    fn default() -> Self {
        Self::new()
    }
}

fn same_creature(current: &Option<Arc<Creature>>, next: &Option<Arc<Creature>>) -> bool {
    match (current, next) {
        (Some(current), Some(next)) => Arc::ptr_eq(current, next),
        (None, None) => true,
        _ => false,
    }
}
