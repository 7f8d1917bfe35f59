//! Outbound HTTP client bound to a single upstream instance.
//!
//! One method per upstream page/endpoint, each performing exactly one GET.
//! There is deliberately no timeout, retry, or backoff here: every failure
//! kind (connect error, non-2xx, unreadable body) collapses into the same
//! `RelayError` and becomes a generic 500 at the surface.

use reqwest::ClientBuilder;
use url::Url;

use crate::config::Config;
use crate::error::{InitializationError, RelayError};

/// HTTP client plus the configured instance origin.
///
/// Built once at startup and shared by all handlers; it holds no per-request
/// state.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    origin: String,
}

impl UpstreamClient {
    /// Creates a client for the instance named in `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::InvalidInstance` if the configured
    /// origin is not an http(s) URL, or `HttpClientError` if the underlying
    /// client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let parsed =
            Url::parse(&config.instance).map_err(|e| InitializationError::InvalidInstance {
                origin: config.instance.clone(),
                reason: e.to_string(),
            })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(InitializationError::InvalidInstance {
                    origin: config.instance.clone(),
                    reason: format!("unsupported scheme '{other}'"),
                })
            }
        }

        let client = ClientBuilder::new()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            origin: config.instance.trim_end_matches('/').to_string(),
        })
    }

    /// The instance origin without a trailing slash.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Performs one GET against the instance and checks the status.
    async fn get(&self, path_and_query: &str) -> Result<reqwest::Response, RelayError> {
        let url = format!("{}{}", self.origin, path_and_query);
        log::debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("upstream {url} answered {status}");
            return Err(RelayError::UpstreamStatus(status));
        }
        Ok(response)
    }

    /// Fetches the popular-videos feed page markup.
    pub async fn popular_page(&self) -> Result<String, RelayError> {
        Ok(self.get("/feed/popular").await?.text().await?)
    }

    /// Calls the JSON search API with the given query.
    pub async fn search(&self, query: &str) -> Result<serde_json::Value, RelayError> {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("q", query)
            .finish();
        Ok(self
            .get(&format!("/api/v1/search?{encoded}"))
            .await?
            .json()
            .await?)
    }

    /// Fetches the watch page markup for one video.
    pub async fn watch_page(&self, video_id: &str) -> Result<String, RelayError> {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("v", video_id)
            .finish();
        Ok(self.get(&format!("/watch?{encoded}")).await?.text().await?)
    }

    /// Fetches the comment listing for one video.
    ///
    /// The instance answers this route with JSON even though it lives outside
    /// `/api/v1` (the web frontend loads comments from it via XHR).
    pub async fn comments(&self, video_id: &str) -> Result<serde_json::Value, RelayError> {
        Ok(self
            .get(&format!("/comments/{video_id}"))
            .await?
            .json()
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_new_rejects_non_http_origin() {
        let config = Config {
            instance: "ftp://example.com".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            UpstreamClient::new(&config),
            Err(InitializationError::InvalidInstance { .. })
        ));
    }

    #[test]
    fn test_new_rejects_unparseable_origin() {
        let config = Config {
            instance: "not a url".to_string(),
            ..Config::default()
        };
        assert!(UpstreamClient::new(&config).is_err());
    }

    #[test]
    fn test_origin_drops_trailing_slash() {
        let config = Config {
            instance: "https://yewtu.be/".to_string(),
            ..Config::default()
        };
        let client = UpstreamClient::new(&config).expect("client should build");
        assert_eq!(client.origin(), "https://yewtu.be");
    }
}
