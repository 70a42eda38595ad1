// Main entry point for the SEWA backend

use anyhow::{Context, Result};
use server_core::{build_app, Config, ServerDeps};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SEWA Ecosystem backend");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // In-process stores; the document database is an external collaborator
    // and this deployment runs against the memory-backed implementation.
    let deps = ServerDeps::in_memory();

    let app = build_app(deps);

    let addr = format!("{}:{}", config.bind_addr, config.port);
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
