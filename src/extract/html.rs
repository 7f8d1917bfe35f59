//! Markup extraction for the feed and watch pages.
//!
//! The selector set below encodes where the data lives in the instance's
//! current markup. It is inherently fragile; when the upstream redesigns a
//! page, this file is the only place that needs to change.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::models::{DownloadFormat, VideoDetail, VideoSummary};
use crate::urls::absolute_url;

// CSS selector strings
const FEED_ITEM_SELECTOR_STR: &str = "div.h-box";
const WATCH_LINK_SELECTOR_STR: &str = "a[href^='/watch']";
const ITEM_TITLE_SELECTOR_STR: &str = "p:not(.length)";
const THUMBNAIL_SELECTOR_STR: &str = "img.thumbnail";
const CHANNEL_NAME_SELECTOR_STR: &str = "p.channel-name";
const VIDEO_DATA_SELECTOR_STR: &str = "p.video-data";

const WATCH_TITLE_SELECTOR_STR: &str = "h1";
const WATCH_AUTHOR_SELECTOR_STR: &str = "#channel-name";
const WATCH_VIEWS_SELECTOR_STR: &str = "#views";
const WATCH_PUBLISHED_SELECTOR_STR: &str = "#published-date";
const WATCH_DESCRIPTION_SELECTOR_STR: &str = "#descriptionWrapper";
const DOWNLOAD_OPTION_SELECTOR_STR: &str = "select#download_widget option";

static FEED_ITEM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(FEED_ITEM_SELECTOR_STR));
static WATCH_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(WATCH_LINK_SELECTOR_STR));
static ITEM_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(ITEM_TITLE_SELECTOR_STR));
static THUMBNAIL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(THUMBNAIL_SELECTOR_STR));
static CHANNEL_NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(CHANNEL_NAME_SELECTOR_STR));
static VIDEO_DATA_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(VIDEO_DATA_SELECTOR_STR));
static WATCH_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(WATCH_TITLE_SELECTOR_STR));
static WATCH_AUTHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(WATCH_AUTHOR_SELECTOR_STR));
static WATCH_VIEWS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(WATCH_VIEWS_SELECTOR_STR));
static WATCH_PUBLISHED_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(WATCH_PUBLISHED_SELECTOR_STR));
static WATCH_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(WATCH_DESCRIPTION_SELECTOR_STR));
static DOWNLOAD_OPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector(DOWNLOAD_OPTION_SELECTOR_STR));

/// Parses a CSS selector that is a compile-time constant.
///
/// # Panics
///
/// Panics if the selector cannot be parsed, which indicates a programming
/// error in the constants above.
fn parse_static_selector(selector_str: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!("Failed to parse static CSS selector '{selector_str}': {e}")
    })
}

/// Collects an element's text content, trimmed, or `None` when empty.
fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text: String = element.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Pulls the `v` query parameter out of a `/watch?v=...` href.
fn video_id_from_watch_href(href: &str) -> Option<String> {
    let (_, query) = href.split_once('?')?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

/// Extracts the video listing from a feed page (e.g. `/feed/popular`).
///
/// Items whose watch link or video id cannot be found are dropped silently;
/// every other missing element merely yields a `None` field.
pub fn video_summaries(html: &str, origin: &str) -> Vec<VideoSummary> {
    let document = Html::parse_document(html);
    let summaries: Vec<VideoSummary> = document
        .select(&FEED_ITEM_SELECTOR)
        .filter_map(|item| summary_from_item(item, origin))
        .collect();
    log::debug!("extracted {} video summaries from feed page", summaries.len());
    summaries
}

fn summary_from_item(item: ElementRef<'_>, origin: &str) -> Option<VideoSummary> {
    let link = item.select(&WATCH_LINK_SELECTOR).next()?;
    let href = link.value().attr("href")?;
    let video_id = video_id_from_watch_href(href)?;

    let title = link.select(&ITEM_TITLE_SELECTOR).next().and_then(element_text);
    let thumbnail = item
        .select(&THUMBNAIL_SELECTOR)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(|src| absolute_url(origin, src));
    let author = item
        .select(&CHANNEL_NAME_SELECTOR)
        .next()
        .and_then(element_text);

    // The feed card carries two small data lines: upload age on the left,
    // view count on the right. Telling them apart by content survives the
    // two being reordered.
    let data_lines: Vec<String> = item
        .select(&VIDEO_DATA_SELECTOR)
        .filter_map(element_text)
        .collect();
    let views = data_lines.iter().find(|line| line.contains("views")).cloned();
    let uploaded_at = data_lines
        .iter()
        .find(|line| !line.contains("views"))
        .cloned();

    Some(VideoSummary {
        title,
        video_id,
        thumbnail,
        author,
        views,
        uploaded_at,
        url: absolute_url(origin, href),
    })
}

/// Extracts the detail record from a watch page.
///
/// Never fails: every field the page does not expose comes back `None`, and
/// an unrecognizable page yields a record with only `source_watch_url` set.
pub fn video_detail(html: &str, origin: &str, video_id: &str) -> VideoDetail {
    let document = Html::parse_document(html);

    let formats: Vec<DownloadFormat> = document
        .select(&DOWNLOAD_OPTION_SELECTOR)
        .filter_map(|option| {
            let format = element_text(option)?;
            let value = option.value().attr("value")?;
            if value.is_empty() {
                return None;
            }
            Some(DownloadFormat {
                format,
                url: absolute_url(origin, value),
            })
        })
        .collect();

    VideoDetail {
        title: document
            .select(&WATCH_TITLE_SELECTOR)
            .next()
            .and_then(element_text),
        author: document
            .select(&WATCH_AUTHOR_SELECTOR)
            .next()
            .and_then(element_text),
        views: document
            .select(&WATCH_VIEWS_SELECTOR)
            .next()
            .and_then(element_text),
        uploaded_at: document
            .select(&WATCH_PUBLISHED_SELECTOR)
            .next()
            .and_then(element_text),
        description: document
            .select(&WATCH_DESCRIPTION_SELECTOR)
            .next()
            .and_then(element_text),
        formats,
        source_watch_url: absolute_url(origin, &format!("/watch?v={video_id}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://yewtu.be";

    fn feed_card(video_id: &str, title: &str) -> String {
        format!(
            r#"<div class="pure-u-1 pure-u-md-1-4"><div class="h-box">
                <a href="/watch?v={video_id}">
                  <div class="thumbnail">
                    <img class="thumbnail" src="/vi/{video_id}/mqdefault.jpg"/>
                    <p class="length">10:53</p>
                  </div>
                  <p dir="auto">{title}</p>
                </a>
                <div class="video-card-row">
                  <a href="/channel/UCabc"><p class="channel-name" dir="auto">Some Channel</p></a>
                </div>
                <div class="video-card-row flexible">
                  <div class="flex-left"><p class="video-data" dir="auto">Shared 2 days ago</p></div>
                  <div class="flex-right"><p class="video-data" dir="auto">1.2M views</p></div>
                </div>
            </div></div>"#
        )
    }

    #[test]
    fn test_video_summaries_maps_all_fields() {
        let html = format!("<html><body>{}</body></html>", feed_card("abc123", "First"));
        let summaries = video_summaries(&html, ORIGIN);
        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.video_id, "abc123");
        assert_eq!(summary.title.as_deref(), Some("First"));
        assert_eq!(summary.author.as_deref(), Some("Some Channel"));
        assert_eq!(summary.views.as_deref(), Some("1.2M views"));
        assert_eq!(summary.uploaded_at.as_deref(), Some("Shared 2 days ago"));
        assert_eq!(
            summary.thumbnail.as_deref(),
            Some("https://yewtu.be/vi/abc123/mqdefault.jpg")
        );
        assert_eq!(summary.url, "https://yewtu.be/watch?v=abc123");
    }

    #[test]
    fn test_video_summaries_drops_items_without_video_id() {
        // Second card links to /watch without a v= parameter: no identity,
        // so it must vanish without taking its siblings with it.
        let broken = r#"<div class="h-box"><a href="/watch?t=42"><p dir="auto">No id</p></a></div>"#;
        let html = format!(
            "<html><body>{}{}{}</body></html>",
            feed_card("one", "One"),
            broken,
            feed_card("two", "Two")
        );
        let summaries = video_summaries(&html, ORIGIN);
        assert_eq!(summaries.len(), 2);
        assert!(summaries.iter().all(|s| !s.video_id.is_empty()));
        assert_eq!(summaries[0].video_id, "one");
        assert_eq!(summaries[1].video_id, "two");
    }

    #[test]
    fn test_video_summaries_tolerates_missing_fields() {
        let html = r#"<html><body><div class="h-box">
            <a href="/watch?v=bare"><p dir="auto">Bare</p></a>
        </div></body></html>"#;
        let summaries = video_summaries(html, ORIGIN);
        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.video_id, "bare");
        assert!(summary.thumbnail.is_none());
        assert!(summary.author.is_none());
        assert!(summary.views.is_none());
        assert!(summary.uploaded_at.is_none());
    }

    #[test]
    fn test_video_summaries_empty_page() {
        assert!(video_summaries("<html><body></body></html>", ORIGIN).is_empty());
    }

    #[test]
    fn test_video_detail_maps_fields_and_formats() {
        let html = r#"<html><body>
            <h1 dir="auto">Detail Title</h1>
            <a href="/channel/UCx"><span id="channel-name">Detail Channel</span></a>
            <p id="views">123,456</p>
            <p id="published-date"><b>Jan 1, 2024</b></p>
            <div id="descriptionWrapper"><p>A description.</p></div>
            <select id="download_widget">
              <option value="/latest_version?id=vid&itag=22">720p - video/mp4</option>
              <option value="/latest_version?id=vid&itag=140">audio only - audio/m4a</option>
              <option value="">broken</option>
            </select>
        </body></html>"#;
        let detail = video_detail(html, ORIGIN, "vid");
        assert_eq!(detail.title.as_deref(), Some("Detail Title"));
        assert_eq!(detail.author.as_deref(), Some("Detail Channel"));
        assert_eq!(detail.views.as_deref(), Some("123,456"));
        assert_eq!(detail.uploaded_at.as_deref(), Some("Jan 1, 2024"));
        assert_eq!(detail.description.as_deref(), Some("A description."));
        assert_eq!(detail.source_watch_url, "https://yewtu.be/watch?v=vid");

        // The value-less option is skipped, order is preserved.
        assert_eq!(detail.formats.len(), 2);
        assert_eq!(detail.formats[0].format, "720p - video/mp4");
        assert_eq!(
            detail.formats[0].url,
            "https://yewtu.be/latest_version?id=vid&itag=22"
        );
        assert!(detail
            .formats
            .iter()
            .all(|f| !f.format.is_empty() && !f.url.is_empty()));
    }

    #[test]
    fn test_video_detail_unrecognizable_page() {
        let detail = video_detail("<html><body><p>nope</p></body></html>", ORIGIN, "xyz");
        assert!(detail.title.is_none());
        assert!(detail.formats.is_empty());
        assert_eq!(detail.source_watch_url, "https://yewtu.be/watch?v=xyz");
    }

    #[test]
    fn test_video_id_from_watch_href() {
        assert_eq!(
            video_id_from_watch_href("/watch?v=abc&t=10"),
            Some("abc".to_string())
        );
        assert_eq!(video_id_from_watch_href("/watch?t=10"), None);
        assert_eq!(video_id_from_watch_href("/watch?v="), None);
        assert_eq!(video_id_from_watch_href("/watch"), None);
    }
}
