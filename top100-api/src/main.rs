//! top100-api - Ranking-table scraper service
//!
//! Backend for the top-100 guessing game. Fetches two public ranking pages
//! on demand and serves their top rows as JSON.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use top100_api::config::{Cli, Config};
use top100_api::fetch::build_http_client;
use top100_api::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting top100-api v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = Config::resolve(&cli)?;
    info!("Population source: {}", config.population_url);
    info!("Songs source: {}", config.songs_url);

    let http = build_http_client()?;
    let state = AppState::new(http, config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("top100-api listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
