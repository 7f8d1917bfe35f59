//! Request handlers.
//!
//! Each handler is one linear attempt: fetch from the upstream, hand the body
//! to the extraction layer, serialize the result. Errors convert through
//! `RelayError::into_response` into the two failure classes (400 / 500).

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use super::AppState;
use crate::error::RelayError;
use crate::extract;
use crate::models::{Comment, VideoDetail, VideoSummary};

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    q: Option<String>,
}

/// GET /api/popular
pub(super) async fn popular_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VideoSummary>>, RelayError> {
    let body = state.upstream.popular_page().await?;
    let summaries = extract::html::video_summaries(&body, state.upstream.origin());
    Ok(Json(summaries))
}

/// GET /api/search?q=...
pub(super) async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<VideoSummary>>, RelayError> {
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(RelayError::MissingParam("q"))?;
    let value = state.upstream.search(query).await?;
    let summaries = extract::api::search_results(value, state.upstream.origin())?;
    Ok(Json(summaries))
}

/// GET /api/video/{videoId}
pub(super) async fn video_handler(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<Json<VideoDetail>, RelayError> {
    let video_id = require_video_id(&video_id)?;
    let body = state.upstream.watch_page(video_id).await?;
    let detail = extract::html::video_detail(&body, state.upstream.origin(), video_id);
    Ok(Json(detail))
}

/// GET /api/comments/{videoId}
pub(super) async fn comments_handler(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<Json<Vec<Comment>>, RelayError> {
    let video_id = require_video_id(&video_id)?;
    let value = state.upstream.comments(video_id).await?;
    Ok(Json(extract::api::comments(value)?))
}

/// GET /health
///
/// Liveness only; answers regardless of upstream health.
pub(super) async fn health_handler() -> &'static str {
    "OK"
}

/// The router guarantees the path segment exists, but a blank or
/// whitespace-only id is still client error, not an upstream one.
fn require_video_id(raw: &str) -> Result<&str, RelayError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RelayError::MissingParam("videoId"));
    }
    Ok(trimmed)
}
