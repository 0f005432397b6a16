//! Fetch service configuration.
use std::env;
use std::str::FromStr;

use pokeduel_protocol::{BASE_URL, MAX_CREATURE_ID};

/// Where creatures come from and which ids may be drawn.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Catalog root, without the `/pokemon` segment.
    pub base_url: String,

    /// Creature ids are drawn uniformly from `1..=max_creature_id`.
    pub max_creature_id: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            max_creature_id: MAX_CREATURE_ID,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKEDUEL_BASE_URL` - Catalog root (default: `https://pokeapi.co/api/v2`)
    /// - `POKEDUEL_MAX_CREATURE_ID` - Highest creature id to draw (default: 151, minimum 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = read::<String>(&lookup, "POKEDUEL_BASE_URL")
            && !url.trim().is_empty()
        {
            config.base_url = url.trim().to_string();
        }

        if let Some(max) = read::<u32>(&lookup, "POKEDUEL_MAX_CREATURE_ID") {
            config.max_creature_id = max.max(1);
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_creature_id(mut self, max: u32) -> Self {
        self.max_creature_id = max.max(1);
        self
    }
}

fn read<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.parse().ok()
}
