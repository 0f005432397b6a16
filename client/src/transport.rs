use std::future::Future;

use anyhow::{Context, Result};

use crate::error::FetchError;

const USER_AGENT: &str = concat!("pokeduel/", env!("CARGO_PKG_VERSION"));

/// Read-only HTTP access to the catalog
pub trait Transport: Send + Sync {
    /// GET an absolute URL and return the response body
    ///
    /// Non-success statuses are reported as [`FetchError::Status`].
    fn get(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http })
    }

    /// Use a preconfigured `reqwest` client
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::network(url, e))
    }
}
