mod config;
mod errors;
mod models;
mod pdf_client;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::pdf_client::HttpPdfRenderer;
use crate::resume::ResumeSession;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting résumé builder API v{}", env!("CARGO_PKG_VERSION"));

    let pdf = HttpPdfRenderer::new(
        &config.pdf_service_url,
        Duration::from_secs(config.pdf_service_timeout_secs),
    )?;
    info!("PDF renderer initialized (endpoint: {})", pdf.endpoint());

    let state = AppState::new(ResumeSession::new(), Arc::new(pdf), config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the form's host once it has a fixed deployment URL

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
