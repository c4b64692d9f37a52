//! Jobfit - resume to job description matching service
//!
//! Forwards a (resume, job description) pair to an LLM completion
//! provider and memoizes the parsed report in a bounded, time-expiring
//! in-memory cache.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod provider;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use provider::OpenAiProvider;

/// Main entry point for the matching service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the response cache (fatal if the capacity is invalid)
/// 4. Create the completion provider
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobfit=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobfit matching service");

    // Load configuration from environment variables (fails without an API key)
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: model={}, cache_capacity={}, cache_ttl={}s, max_input_chars={}, port={}",
        config.model,
        config.cache_capacity,
        config.cache_ttl.as_secs(),
        config.max_input_chars,
        config.server_port
    );

    // Create application state; an invalid cache capacity aborts startup here
    let provider = Arc::new(OpenAiProvider::new(
        config.openai_api_key.clone(),
        config.model.clone(),
    ));
    let state = AppState::from_config(&config, provider)?;
    info!("Response cache initialized");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
