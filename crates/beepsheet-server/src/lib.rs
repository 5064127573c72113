//! beepsheet-server library interface
//!
//! HTTP front for the beep sheet pipeline. Serves an upload form, accepts a
//! CSV via multipart POST, and returns the rendered beeps as a `.tar.gz`
//! attachment. Exposed as a library so integration tests can drive the router
//! without binding a socket.

pub mod api;
pub mod config;
pub mod error;
pub mod ui;

pub use crate::config::ServerConfig;
pub use crate::error::{ApiError, ApiResult};

use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (upload limits, column names)
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .merge(api::page_routes())
        .merge(api::submit_routes())
        .merge(api::health_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
