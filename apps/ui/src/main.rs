mod assets;
mod config;
mod cv_client;
mod errors;
mod models;
mod render;
mod routes;
mod state;
mod view;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::cv_client::HttpCvSource;
use crate::routes::build_router;
use crate::state::AppState;
use crate::view::templates::PageTemplates;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing CV_API_URL)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV renderer v{}", env!("CARGO_PKG_VERSION"));

    let source = HttpCvSource::new(&config.api_url, config.api_timeout)
        .context("Failed to build HTTP client")?;
    info!(
        "CV source: {} (timeout {}s)",
        source.url(),
        config.api_timeout.as_secs()
    );

    let templates = PageTemplates::new().context("Failed to compile page templates")?;
    info!("Assets directory: {}", config.assets_dir.display());

    let state = AppState {
        source: Arc::new(source),
        assets_dir: config.assets_dir.clone(),
        templates: Arc::new(templates),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
