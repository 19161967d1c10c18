mod config;
mod errors;
mod extraction;
mod models;
mod render;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::render::compiler::LatexCompiler;
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

    info!("Starting Resumify API v{}", env!("CARGO_PKG_VERSION"));

    // Per-request compile directories live under here
    tokio::fs::create_dir_all(&config.work_dir)
        .await
        .with_context(|| format!("Cannot create work dir {}", config.work_dir.display()))?;

    let typesetter = Arc::new(LatexCompiler::from_config(&config));
    info!(
        "Typesetter: {} (timeout {}s, cleanup after {}s, work dir {})",
        config.latex_compiler,
        config.compile_timeout_secs,
        config.cleanup_grace_secs,
        config.work_dir.display()
    );

    let state = AppState {
        config: config.clone(),
        typesetter,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
