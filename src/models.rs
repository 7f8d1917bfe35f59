//! Output DTO shapes.
//!
//! These are transient, per-request records: built from one upstream page or
//! API response, serialized, and discarded. Field names follow the camelCase
//! wire contract. Nullable fields stay `Option` rather than defaulting to an
//! empty string so consumers can distinguish "absent upstream" from "empty".

use serde::Serialize;

/// One entry of a video listing (popular feed or search results).
///
/// Produced per list item; the only identity it carries is `video_id`. Items
/// whose id cannot be determined are never constructed (dropped at
/// extraction time).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    /// Video title, if the source exposed one.
    pub title: Option<String>,
    /// The upstream video identifier. Always non-empty.
    pub video_id: String,
    /// Absolute thumbnail URL.
    pub thumbnail: Option<String>,
    /// Channel name.
    pub author: Option<String>,
    /// View count as display text (e.g. "123K views").
    pub views: Option<String>,
    /// Upload age as display text (e.g. "2 days ago").
    pub uploaded_at: Option<String>,
    /// Absolute watch URL on the upstream instance.
    pub url: String,
}

/// A single download option exposed on the watch page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadFormat {
    /// Display label, e.g. "720p - video/mp4".
    pub format: String,
    /// Absolute download URL.
    pub url: String,
}

/// Full detail for a single video, scraped from its watch page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetail {
    /// Video title.
    pub title: Option<String>,
    /// Channel name.
    pub author: Option<String>,
    /// View count as display text.
    pub views: Option<String>,
    /// Publish date as display text.
    pub uploaded_at: Option<String>,
    /// Plain-text description.
    pub description: Option<String>,
    /// Download options in the order the page lists them.
    pub formats: Vec<DownloadFormat>,
    /// Absolute watch URL this detail was scraped from.
    pub source_watch_url: String,
}

/// One comment on a video.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment author display name.
    pub author: Option<String>,
    /// Comment body as plain text.
    pub text: Option<String>,
    /// Publish age as display text (e.g. "3 weeks ago").
    pub time: Option<String>,
    /// Like count.
    pub likes: Option<i64>,
}
