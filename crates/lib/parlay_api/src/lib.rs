//! # parlay_api
//!
//! HTTP API library for Parlay.

pub mod config;
pub mod error;
pub mod handlers;

use std::time::Instant;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, webhook};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Process start, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(webhook::webhook_handler))
        .route("/healthz", get(health::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
