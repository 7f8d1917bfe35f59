//! Structured extraction for the instance's JSON endpoints.
//!
//! The search API and the comments route return JSON directly; here known
//! field names are mapped onto the output shapes. Items of unknown type (the
//! search API mixes channels and playlists into its results) are filtered
//! out entirely, as are items missing their video id.

use serde::Deserialize;

use crate::error::RelayError;
use crate::models::{Comment, VideoSummary};
use crate::urls::absolute_url;

/// One raw item of an `/api/v1/search` response.
///
/// Every field is optional: channel and playlist entries share the array and
/// carry a different shape. The `type` discriminator decides what gets kept.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItem {
    #[serde(rename = "type")]
    kind: Option<String>,
    title: Option<String>,
    video_id: Option<String>,
    author: Option<String>,
    view_count: Option<u64>,
    view_count_text: Option<String>,
    published_text: Option<String>,
    #[serde(default)]
    video_thumbnails: Vec<SearchThumbnail>,
}

#[derive(Debug, Deserialize)]
struct SearchThumbnail {
    quality: Option<String>,
    url: Option<String>,
}

/// The shape of the `/comments/<id>` JSON response.
#[derive(Debug, Default, Deserialize)]
struct CommentsPayload {
    #[serde(default)]
    comments: Vec<CommentItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentItem {
    author: Option<String>,
    content: Option<String>,
    published_text: Option<String>,
    like_count: Option<i64>,
}

/// Maps a search API response onto the listing shape.
///
/// # Errors
///
/// Returns `RelayError::Parse` when the body is not a JSON array at all;
/// individual items that fail to map are dropped instead.
pub fn search_results(
    value: serde_json::Value,
    origin: &str,
) -> Result<Vec<VideoSummary>, RelayError> {
    let items: Vec<serde_json::Value> = serde_json::from_value(value)?;
    let total = items.len();
    let summaries: Vec<VideoSummary> = items
        .into_iter()
        .filter_map(|item| summary_from_search_item(item, origin))
        .collect();
    log::debug!(
        "mapped {} of {} search items onto video summaries",
        summaries.len(),
        total
    );
    Ok(summaries)
}

fn summary_from_search_item(item: serde_json::Value, origin: &str) -> Option<VideoSummary> {
    let item: SearchItem = serde_json::from_value(item).ok()?;
    if item.kind.as_deref() != Some("video") {
        return None;
    }
    let video_id = item.video_id.filter(|id| !id.is_empty())?;

    // Prefer the medium rendition, fall back to whatever comes first.
    let thumbnail = item
        .video_thumbnails
        .iter()
        .find(|thumb| thumb.quality.as_deref() == Some("medium"))
        .or_else(|| item.video_thumbnails.first())
        .and_then(|thumb| thumb.url.as_deref())
        .map(|url| absolute_url(origin, url));

    let views = item
        .view_count_text
        .or_else(|| item.view_count.map(|count| format!("{count} views")));

    Some(VideoSummary {
        title: item.title,
        url: absolute_url(origin, &format!("/watch?v={video_id}")),
        video_id,
        thumbnail,
        author: item.author,
        views,
        uploaded_at: item.published_text,
    })
}

/// Maps a comments response onto the output shape.
///
/// # Errors
///
/// Returns `RelayError::Parse` when the body does not match the comments
/// shape.
pub fn comments(value: serde_json::Value) -> Result<Vec<Comment>, RelayError> {
    let payload: CommentsPayload = serde_json::from_value(value)?;
    Ok(payload
        .comments
        .into_iter()
        .map(|item| Comment {
            author: item.author,
            text: item.content,
            time: item.published_text,
            likes: item.like_count,
        })
        .collect())
}
