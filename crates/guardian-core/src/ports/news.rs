use async_trait::async_trait;
use thiserror::Error;

use crate::domain::NewsItem;

/// An external news feed, reached through the RSS-to-JSON proxy.
///
/// This is the one asynchronous boundary in the system. Fetches are
/// fire-and-forget: no cancellation, no retry. Supersession of in-flight
/// requests is handled above this trait, by [`crate::news::NewsDesk`].
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch the latest items of `feed_url`, in the order the proxy returns
    /// them (newest first).
    async fn fetch(&self, feed_url: &str) -> Result<Vec<NewsItem>, NewsError>;
}

/// News fetch errors.
#[derive(Debug, Error)]
pub enum NewsError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The proxy answered with a non-success HTTP status.
    #[error("news proxy returned HTTP {0}")]
    Status(u16),

    /// The proxy answered, but the feed is unavailable or has no items.
    #[error("news feed is unavailable or empty")]
    FeedUnavailable,

    /// The proxy payload did not deserialize.
    #[error("malformed proxy payload: {0}")]
    Payload(String),

    /// A newer refresh started while this one was in flight; the result
    /// must be discarded, not merged.
    #[error("superseded by a newer refresh")]
    Superseded,
}
