// Main entry point for the research report server

use std::sync::Arc;

use anyhow::{Context, Result};
use research::ReportStore;
use server_core::{config::Config, server::build_app};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,research=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting research report server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(provider = ?config.llm_provider, "Configuration loaded");

    // Open the report store (runs the schema migration)
    tracing::info!("Opening report store...");
    let store = Arc::new(
        ReportStore::new(&config.database_url)
            .await
            .context("Failed to open report store")?,
    );
    tracing::info!("Report store ready");

    // Build application
    let app = build_app(&config, store);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
