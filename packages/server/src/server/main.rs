// Main entry point for the shop grader server

use anyhow::{Context, Result};
use etsy_client::EtsyClient;
use grader_core::{
    kernel::{EnvSecrets, EtsyAdapter, ServerDeps},
    server::build_app,
    Config,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log whether an environment variable is set, masking all but its first characters.
fn mask_env(name: &str) {
    match std::env::var(name) {
        Ok(val) if val.is_empty() => tracing::info!("  {}: (empty)", name),
        Ok(val) => {
            let show = val.char_indices().nth(4).map_or(val.len(), |(idx, _)| idx);
            let hidden = val[show..].chars().count();
            tracing::info!("  {}: {}{}  ({} chars)", name, &val[..show], "*".repeat(hidden), val.chars().count());
        }
        Err(_) => tracing::warn!("  {}: NOT SET", name),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,grader_core=debug,etsy_client=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Etsy Shop Grader");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(etsy_api_base_url = %config.etsy_api_base_url, "Configuration loaded");

    // The key is read per request; a missing key only fails grading calls.
    tracing::info!("Environment variables:");
    mask_env(&config.etsy_api_key_var);

    let client = EtsyClient::with_base_url(config.etsy_api_base_url.clone());
    let deps = ServerDeps::new(
        Arc::new(EtsyAdapter::new(client)),
        Arc::new(EnvSecrets),
        config.etsy_api_key_var.clone(),
    );

    // Build application
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Grader page: http://localhost:{}/", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
