// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::health_handler;
use super::predict::predict_handler;
use crate::config::NodeConfig;
use crate::vision::XrayPredictor;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<XrayPredictor>,
}

impl AppState {
    pub fn new(predictor: XrayPredictor) -> Self {
        Self {
            predictor: Arc::new(predictor),
        }
    }
}

/// Build the HTTP router
///
/// Any origin may call the API. Upload size is unlimited unless
/// `max_upload_bytes` is configured.
pub fn create_router(state: AppState, config: &NodeConfig) -> Router {
    let body_limit = match config.max_upload_bytes {
        Some(max) => DefaultBodyLimit::max(max),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/predict", post(predict_handler))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn start_server(config: NodeConfig, predictor: XrayPredictor) -> Result<()> {
    let addr = config.socket_addr()?;
    let app = create_router(AppState::new(predictor), &config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("API server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
