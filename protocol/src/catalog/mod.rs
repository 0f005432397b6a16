//! PokeAPI catalog records
//!
//! Only the fields the battle needs are decoded; everything else in the
//! upstream JSON is ignored.

mod creature;
mod moves;
mod tests;

pub use creature::{Creature, MoveEntry, Sprites};
pub use moves::{Move, MoveRef};

use crate::{DecodeError, RecordKind};

/// Public PokeAPI root
pub const BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Highest Gen 1 national dex number
pub const MAX_CREATURE_ID: u32 = 151;

/// Build the URL of a creature record: {base}/pokemon/{id}
pub fn creature_url(base: &str, id: u32) -> String {
    format!("{}/pokemon/{}", base.trim_end_matches('/'), id)
}

/// Decode a creature record from a response body
pub fn parse_creature(body: &str) -> Result<Creature, DecodeError> {
    decode(body, RecordKind::Creature)
}

/// Decode a move record from a response body
pub fn parse_move(body: &str) -> Result<Move, DecodeError> {
    decode(body, RecordKind::Move)
}

fn decode<T: serde::de::DeserializeOwned>(body: &str, kind: RecordKind) -> Result<T, DecodeError> {
    if body.trim().is_empty() {
        return Err(DecodeError::EmptyBody(kind));
    }

    serde_json::from_str(body).map_err(|source| DecodeError::InvalidJson { kind, source })
}
