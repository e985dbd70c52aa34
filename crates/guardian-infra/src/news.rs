//! RSS-to-JSON proxy client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use guardian_core::domain::NewsItem;
use guardian_core::ports::{NewsError, NewsSource};

/// Public proxy that re-serves an RSS feed as JSON, so a browser client can
/// read feeds whose origins send no CORS headers.
pub const DEFAULT_PROXY: &str = "https://api.rss2json.com/v1/api.json";

/// What the proxy wraps around the feed items.
#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    status: String,
    #[serde(default)]
    items: Vec<NewsItem>,
}

fn unwrap_envelope(envelope: ProxyEnvelope) -> Result<Vec<NewsItem>, NewsError> {
    if envelope.status != "ok" || envelope.items.is_empty() {
        return Err(NewsError::FeedUnavailable);
    }
    Ok(envelope.items)
}

/// `NewsSource` over the rss2json proxy.
pub struct Rss2JsonClient {
    http: Client,
    proxy_url: String,
}

impl Rss2JsonClient {
    pub fn new() -> Self {
        Self::with_proxy(DEFAULT_PROXY)
    }

    /// Point the client at a different proxy endpoint.
    pub fn with_proxy(proxy_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            proxy_url: proxy_url.into(),
        }
    }
}

impl Default for Rss2JsonClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsSource for Rss2JsonClient {
    async fn fetch(&self, feed_url: &str) -> Result<Vec<NewsItem>, NewsError> {
        let response = self
            .http
            .get(&self.proxy_url)
            .query(&[("rss_url", feed_url)])
            .send()
            .await
            .map_err(|err| NewsError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, feed_url, "news proxy rejected the request");
            return Err(NewsError::Status(status.as_u16()));
        }

        let envelope: ProxyEnvelope = response
            .json()
            .await
            .map_err(|err| NewsError::Payload(err.to_string()))?;

        let items = unwrap_envelope(envelope)?;
        tracing::debug!(feed_url, items = items.len(), "news feed fetched");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(raw: &str) -> ProxyEnvelope {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_ok_envelope_yields_items() {
        let raw = r#"{
            "status": "ok",
            "items": [
                {"title": "A", "link": "https://example.org/a", "pubDate": "2026-08-07 09:30:00"},
                {"title": "B", "link": "https://example.org/b", "pubDate": "2026-08-07 08:00:00"}
            ]
        }"#;
        let items = unwrap_envelope(envelope(raw)).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "A");
    }

    #[test]
    fn test_error_status_is_feed_unavailable() {
        let raw = r#"{"status": "error", "items": []}"#;
        assert!(matches!(
            unwrap_envelope(envelope(raw)),
            Err(NewsError::FeedUnavailable)
        ));
    }

    #[test]
    fn test_ok_but_empty_is_feed_unavailable() {
        let raw = r#"{"status": "ok", "items": []}"#;
        assert!(matches!(
            unwrap_envelope(envelope(raw)),
            Err(NewsError::FeedUnavailable)
        ));
    }

    #[test]
    fn test_envelope_tolerates_extra_proxy_fields() {
        let raw = r#"{
            "status": "ok",
            "feed": {"url": "https://hnrss.org/newest", "title": "Hacker News"},
            "items": [{"title": "A", "link": "https://example.org/a"}]
        }"#;
        assert_eq!(unwrap_envelope(envelope(raw)).unwrap().len(), 1);
    }
}
