use anyhow::{anyhow, Context, Result};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use route_aggr::config::AppConfig;
use route_aggr::router::router::create_api_router;
use route_aggr::router::RouteAggregator;
use route_aggr::transport::GoogleMaps;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().context("initialize tracing subscriber")?;

    if let Err(err) = run().await {
        tracing::error!(error = ?err, "fatal aggregator error");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let config = AppConfig::load().context("load configuration from environment")?;
    let api_addr = config.socket_addr()?;

    let maps = GoogleMaps::new(
        config.maps_base_url.clone(),
        config.google_maps_api_key.clone(),
        config.request_timeout(),
    )
    .context("initialize Google Maps client")?;

    let aggregator = Arc::new(RouteAggregator::new(maps, config.region.clone()));
    let api_router = create_api_router(aggregator, &config.cors_origins())?;

    info!(
        address = %api_addr,
        region = %config.region,
        maps = %config.maps_base_url,
        timeout_secs = config.request_timeout_secs,
        origins = ?config.cors_origins(),
        "route aggregator online"
    );

    let listener = tokio::net::TcpListener::bind(&api_addr)
        .await
        .with_context(|| format!("bind API server address {api_addr}"))?;
    axum::serve(listener, api_router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API server error")?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "ctrl_c listener error");
    }
    info!("Shutdown signal received, exiting");
}

fn init_tracing() -> Result<()> {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,hyper=warn,tower_http=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("tracing subscriber init: {err}"))
}
