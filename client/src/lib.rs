mod config;
mod error;
mod source;
mod transport;

#[cfg(test)]
mod testing;

use anyhow::Result;
use futures_util::future::try_join;
use rand::Rng;

pub use pokeduel_protocol::{
    BASE_URL, Creature, DecodeError, MAX_CREATURE_ID, Move, MoveEntry, MoveRef, Sprites,
};

pub use config::ClientConfig;
pub use error::FetchError;
pub use source::MoveSource;
pub use transport::{HttpTransport, Transport};

use pokeduel_protocol::{creature_url, parse_creature, parse_move};

/// Diagnostic tag for [`CatalogClient::fetch_random_pair`] failures
pub const FETCH_PAIR_OP: &str = "fetch_random_pair";

/// Diagnostic tag for [`CatalogClient::fetch_move`] failures
pub const FETCH_MOVE_OP: &str = "fetch_move";

/// Read-only client for the creature catalog
///
/// Failures never leave this type: every operation absorbs its errors,
/// emits one `WARN` diagnostic tagged with `op`, and returns `None`.
pub struct CatalogClient<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
}

impl CatalogClient<HttpTransport> {
    /// Create a client backed by `reqwest`
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }
}

impl<T: Transport> CatalogClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch two random creatures concurrently
    ///
    /// Partial success is not kept: if either request fails, both sides
    /// come back as `None`.
    pub async fn fetch_random_pair(&self) -> (Option<Creature>, Option<Creature>) {
        let (id_a, id_b) = self.random_ids();

        match self.try_fetch_pair(id_a, id_b).await {
            Ok((a, b)) => {
                tracing::debug!(id_a, id_b, a = %a.name, b = %b.name, "Fetched creature pair");
                (Some(a), Some(b))
            }
            Err(e) => {
                tracing::warn!(
                    op = FETCH_PAIR_OP,
                    url = e.url(),
                    error = %e,
                    "{} FAILED",
                    FETCH_PAIR_OP
                );
                (None, None)
            }
        }
    }

    /// Fetch a move record by absolute URL
    pub async fn fetch_move(&self, url: &str) -> Option<Move> {
        match self.fetch_record(url, parse_move).await {
            Ok(move_data) => Some(move_data),
            Err(e) => {
                tracing::warn!(
                    op = FETCH_MOVE_OP,
                    url = e.url(),
                    error = %e,
                    "{} FAILED",
                    FETCH_MOVE_OP
                );
                None
            }
        }
    }

    async fn try_fetch_pair(&self, id_a: u32, id_b: u32) -> Result<(Creature, Creature), FetchError> {
        let url_a = creature_url(&self.config.base_url, id_a);
        let url_b = creature_url(&self.config.base_url, id_b);

        try_join(
            self.fetch_record(&url_a, parse_creature),
            self.fetch_record(&url_b, parse_creature),
        )
        .await
    }

    async fn fetch_record<R>(
        &self,
        url: &str,
        parse: fn(&str) -> Result<R, DecodeError>,
    ) -> Result<R, FetchError> {
        let body = self.transport.get(url).await?;
        parse(&body).map_err(|e| FetchError::decode(url, e))
    }

    fn random_ids(&self) -> (u32, u32) {
        let mut rng = rand::thread_rng();
        let max = self.config.max_creature_id;
        (
            random_creature_id(&mut rng, max),
            random_creature_id(&mut rng, max),
        )
    }
}

impl<T: Transport> MoveSource for CatalogClient<T> {
    async fn load_move(&self, url: &str) -> Result<Option<Move>> {
        Ok(self.fetch_move(url).await)
    }
}

/// Draw a creature id uniformly from `1..=max`
pub fn random_creature_id<R: Rng + ?Sized>(rng: &mut R, max: u32) -> u32 {
    rng.gen_range(1..=max.max(1))
}
