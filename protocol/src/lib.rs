use thiserror::Error;

pub mod catalog;

pub use catalog::{
    BASE_URL, Creature, MAX_CREATURE_ID, Move, MoveEntry, MoveRef, Sprites, creature_url,
    parse_creature, parse_move,
};

/// Which kind of catalog record failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Creature,
    Move,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Creature => f.write_str("creature"),
            RecordKind::Move => f.write_str("move"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid {kind} record: {source}")]
    InvalidJson {
        kind: RecordKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Empty {0} record")]
    EmptyBody(RecordKind),
}
