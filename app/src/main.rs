//! Terminal client entry point.
mod app;
mod command;
mod render;

use anyhow::Result;
use app::App;
use pokeduel_client::CatalogClient;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(std::io::stderr)
        .init();

    let client = CatalogClient::from_env()?;
    let config = client.config();
    tracing::info!(
        base_url = %config.base_url,
        max_creature_id = config.max_creature_id,
        "pokeduel starting"
    );

    App::new(client)
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}

/// `RUST_LOG`-style directives, falling back to `info` when none are given
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_honours_global_level() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
    }
}
