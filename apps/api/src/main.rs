mod activity;
mod agents;
mod config;
mod errors;
mod gateway;
mod models;
mod profile;
mod requests;
mod routes;
mod state;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::activity::simulator::ActivitySimulator;
use crate::activity::{ActivityFeed, SystemClock};
use crate::config::Config;
use crate::gateway::gemini::GeminiClient;
use crate::gateway::{StructuredResponseGateway, FLASH_MODEL, PRO_MODEL};
use crate::profile::InMemoryProfileStore;
use crate::requests::PendingRequests;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Autopilot API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize generative transport
    let gemini = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_base_url.clone())
        .context("Failed to build the Gemini HTTP client")?;
    info!(
        "Gemini client initialized (pro: {PRO_MODEL}, flash: {FLASH_MODEL}, base: {})",
        config.gemini_base_url
    );
    let gateway = StructuredResponseGateway::new(Arc::new(gemini));

    let activity = Arc::new(ActivityFeed::new(
        config.activity_log_capacity,
        Box::new(SystemClock),
    ));

    let simulator = if config.activity_simulator_enabled {
        let period = Duration::from_secs(config.activity_interval_secs);
        info!("Activity simulator ticking every {period:?}");
        Some(ActivitySimulator::new(activity.clone(), StdRng::from_entropy()).spawn(period))
    } else {
        None
    };

    // Build app state
    let state = AppState {
        gateway,
        profiles: Arc::new(InMemoryProfileStore::new()),
        activity,
        pending: PendingRequests::new(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the dashboard has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(task) = simulator {
        task.stop().await;
    }
    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
