//! Single-round resolution

use std::cmp::Ordering;

use pokeduel_protocol::{Creature, Move};

/// Log text for a draw
pub const DRAW_TEXT: &str = "Draw!";

/// One side of the battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Result of comparing the two moves' power
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    Draw,
    Victory { winner: Side },
}

impl Outcome {
    /// Compare base power, counting a missing power as 0
    pub fn resolve(move_a: &Move, move_b: &Move) -> Self {
        match move_a.power_or_zero().cmp(&move_b.power_or_zero()) {
            Ordering::Equal => Outcome::Draw,
            Ordering::Greater => Outcome::Victory { winner: Side::A },
            Ordering::Less => Outcome::Victory { winner: Side::B },
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Draw => None,
            Outcome::Victory { winner } => Some(*winner),
        }
    }

    /// Battle log line for this outcome
    pub fn describe(
        &self,
        creature_a: &Creature,
        creature_b: &Creature,
        move_a: &Move,
        move_b: &Move,
    ) -> String {
        let Outcome::Victory { winner } = *self else {
            return DRAW_TEXT.to_string();
        };
        let creature = |side: Side| match side {
            Side::A => creature_a,
            Side::B => creature_b,
        };
        let winning_move = match winner {
            Side::A => move_a,
            Side::B => move_b,
        };

        format!(
            "{} lands a decisive blow with {}, knocking out {}!",
            creature(winner).name,
            winning_move.name,
            creature(winner.opponent()).name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_move(name: &str) -> Move {
        Move {
            name: name.to_string(),
            power: None,
        }
    }

    #[test]
    fn test_resolve_draw() {
        let outcome = Outcome::resolve(&Move::new("tackle", 40), &Move::new("scratch", 40));
        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(outcome.winner(), None);
    }

    #[test]
    fn test_resolve_a_wins() {
        let outcome = Outcome::resolve(&Move::new("thunder", 110), &Move::new("scratch", 40));
        assert_eq!(outcome.winner(), Some(Side::A));
    }

    #[test]
    fn test_resolve_b_wins() {
        let outcome = Outcome::resolve(&Move::new("tackle", 40), &Move::new("scratch", 50));
        assert_eq!(outcome.winner(), Some(Side::B));
    }

    #[test]
    fn test_missing_power_counts_as_zero() {
        assert_eq!(
            Outcome::resolve(&status_move("growl"), &status_move("leer")),
            Outcome::Draw
        );
        assert_eq!(
            Outcome::resolve(&status_move("growl"), &Move::new("scratch", 40)).winner(),
            Some(Side::B)
        );
        assert_eq!(
            Outcome::resolve(&Move::new("dig", 0), &status_move("growl")),
            Outcome::Draw
        );
    }

    #[test]
    fn test_describe() {
        let bulbasaur = Creature::new("bulbasaur");
        let charmander = Creature::new("charmander");
        let tackle = Move::new("tackle", 40);
        let scratch = Move::new("scratch", 50);

        let b_wins = Outcome::Victory { winner: Side::B };
        assert_eq!(
            b_wins.describe(&bulbasaur, &charmander, &tackle, &scratch),
            "charmander lands a decisive blow with scratch, knocking out bulbasaur!"
        );

        let a_wins = Outcome::Victory { winner: Side::A };
        assert_eq!(
            a_wins.describe(&bulbasaur, &charmander, &tackle, &scratch),
            "bulbasaur lands a decisive blow with tackle, knocking out charmander!"
        );

        assert_eq!(
            Outcome::Draw.describe(&bulbasaur, &charmander, &tackle, &scratch),
            "Draw!"
        );
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
    }
}
