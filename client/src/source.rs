use std::future::Future;

use anyhow::Result;
use pokeduel_protocol::Move;

/// Somewhere a battle can load moves from.
///
/// `Ok(None)` means the source already handled a failure itself; `Err` means
/// the fetch raised and the caller should treat the battle as failed.
pub trait MoveSource: Send + Sync {
    fn load_move(&self, url: &str) -> impl Future<Output = Result<Option<Move>>> + Send;
}
