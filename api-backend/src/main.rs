//! Soluddy API Backend
//!
//! Read API and instruction builder for Soluddy donation vaults.
//! Decodes vault accounts fetched from the ledger RPC and serves them as JSON,
//! and builds unsigned vault instructions for client wallets.

mod error;
mod routes;
mod services;
mod types;

use axum::{
    http::{header, Method},
    Router,
};
use std::{sync::Arc, time::Duration};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use routes::{
    health_router, instructions_router, runtime_config_router, vaults_router, AppState,
};
use services::RpcClient;
use types::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soluddy_api_backend=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env()?);

    info!(port = config.port, "Starting Soluddy API Backend");
    info!(
        program_id = %config.program_id,
        rpc_url = %config.rpc_url,
        cors_origins = ?config.cors_origins,
        banned_slugs = config.banned_slugs.entries().len(),
        "Configuration loaded"
    );

    let rpc = RpcClient::new(
        config.rpc_url.clone(),
        Duration::from_secs(config.rpc_timeout_secs),
    )?;
    let state = AppState {
        config: config.clone(),
        accounts: Arc::new(rpc),
    };

    // Build CORS layer
    let cors = build_cors_layer(&config);

    // Build the router
    let app = Router::new()
        .merge(health_router(state.clone()))
        .merge(runtime_config_router(state.clone()))
        .merge(vaults_router(state.clone()))
        .merge(instructions_router(state))
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(64 * 1024)) // 64KB max request body
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build CORS layer from config
fn build_cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
