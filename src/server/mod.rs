//! HTTP surface of the relay.
//!
//! Routes:
//! - `/api/popular` - popular-videos listing
//! - `/api/search?q=...` - search results
//! - `/api/video/{videoId}` - single-video detail with download formats
//! - `/api/comments/{videoId}` - comment listing
//! - `/health` - liveness, always `200 OK`

mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::config::Config;
use crate::upstream::UpstreamClient;
use handlers::{comments_handler, health_handler, popular_handler, search_handler, video_handler};

/// Shared state injected into every handler.
///
/// Nothing here is mutable; requests are fully independent.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client bound to the configured upstream instance.
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Builds the state from startup configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured instance origin is unusable or
    /// the HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self, crate::error::InitializationError> {
        Ok(Self {
            upstream: UpstreamClient::new(config)?,
        })
    }
}

/// Builds the relay router over the given state.
///
/// Kept separate from [`run_server`] so tests can serve the router on an
/// ephemeral port against a mock upstream.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/popular", get(popular_handler))
        .route("/api/search", get(search_handler))
        .route("/api/video/{video_id}", get(video_handler))
        .route("/api/comments/{video_id}", get(comments_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Creates and runs the relay server until it is shut down.
pub async fn run_server(config: Config) -> Result<(), anyhow::Error> {
    let state = Arc::new(AppState::from_config(&config)?);
    let upstream_origin = state.upstream.origin().to_string();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.bind, config.port))
        .await
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to bind relay to {}:{}: {}",
                config.bind,
                config.port,
                e
            )
        })?;

    log::info!(
        "Relay listening on http://{}/",
        listener.local_addr().map_err(anyhow::Error::from)?
    );
    log::info!("Upstream instance: {upstream_origin}");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Relay server error: {}", e))?;

    Ok(())
}
