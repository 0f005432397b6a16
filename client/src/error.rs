use pokeduel_protocol::DecodeError;
use thiserror::Error;

/// Any failure while fetching a catalog record
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: DecodeError,
    },
}

impl FetchError {
    pub fn network(
        url: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Network {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn decode(url: &str, source: DecodeError) -> Self {
        Self::Decode {
            url: url.to_string(),
            source,
        }
    }

    /// URL of the request that failed
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }
}
