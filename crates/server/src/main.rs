//! TikTok metrics server binary.

use anyhow::{Context, Result};
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use std::net::SocketAddr;
use tokstats_core::config::AppConfig;
use tokstats_scraper::{HttpFetcher, ScrapeClient};
use tokstats_server::{AppState, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Tokstats - TikTok creator metrics API
#[derive(Parser, Debug)]
#[command(name = "tokstatsd")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "TOKSTATS_CONFIG",
        default_value = "config/server.toml"
    )]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Tokstats v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration; the file is optional since every field has a
    // default and env vars can override everything.
    let config_path = std::path::Path::new(&args.config);
    let mut figment = Figment::new();
    if config_path.exists() {
        tracing::info!(config_path = %args.config, "Loading configuration from file");
        figment = figment.merge(Toml::file(&args.config));
    } else {
        tracing::debug!("No config file found at {}", args.config);
    }

    let config: AppConfig = figment
        .merge(Env::prefixed("TOKSTATS_").split("__"))
        .extract()
        .context("failed to load configuration")?;

    config
        .scrape
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid scrape configuration")?;

    let cache = tokstats_cache::from_config(&config.cache)
        .await
        .context("failed to initialize cache store")?;
    tracing::info!("Cache store initialized");

    let fetcher = HttpFetcher::new(&config.scrape.user_agent)
        .context("failed to build HTTP fetcher")?;
    let scraper = ScrapeClient::new(
        cache.clone(),
        std::sync::Arc::new(fetcher),
        config.scrape.clone(),
    );

    let state = AppState::new(config.clone(), cache, scraper);
    let app = create_router(state);

    let addr: SocketAddr = config.server.bind.parse().context("invalid bind address")?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
