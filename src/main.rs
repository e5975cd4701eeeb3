//! Mindhaven server binary entry point.
//!
//! Wires configuration, storage, the Anthropic client, and the HTTP
//! router together, then serves until a shutdown signal arrives.
//!
//! Coverage is excluded because the main function cannot be unit tested
//! as it requires a bound socket and a live shutdown signal.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mindhaven::anthropic::{AnthropicClient, ClientConfig};
use mindhaven::config::Config;
use mindhaven::server::{router, AppState};
use mindhaven::storage::SqliteStorage;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("mindhaven starting...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Configuration loaded: database={}, bind_addr={}, model={}",
        config.database_path,
        config.bind_addr,
        config.model
    );

    let storage = match SqliteStorage::new(&config.database_path).await {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!("Storage error: {e}");
            std::process::exit(1);
        }
    };

    let client_config = ClientConfig::new()
        .with_model(&config.model)
        .with_timeout_ms(config.request_timeout_ms)
        .with_max_retries(config.max_retries);
    let client = match AnthropicClient::new(config.api_key.clone(), client_config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Client error: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(
        Arc::new(storage),
        Arc::new(client),
        config.rate_limit_max_requests,
        Duration::from_secs(config.rate_limit_window_secs),
    );
    let app = router(state);

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };

    tracing::info!("listening on {}", config.bind_addr);

    let serve = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal());

    if let Err(e) = serve.await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("mindhaven shutdown complete");
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("shutdown signal received");
}
