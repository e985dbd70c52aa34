//! News desk - refresh coordination for the proxy-backed feeds.
//!
//! The site keeps a single outstanding news request per page: a refresh
//! triggered while an earlier one is still in flight supersedes it, and the
//! stale result is discarded rather than merged.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::NewsItem;
use crate::ports::{NewsError, NewsSource};

/// Coordinates refreshes so only the latest outstanding request lands.
pub struct NewsDesk<N: NewsSource> {
    source: N,
    generation: AtomicU64,
}

impl<N: NewsSource> NewsDesk<N> {
    pub fn new(source: N) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
        }
    }

    /// Fetch `feed_url` through the source. Yields
    /// [`NewsError::Superseded`] when a newer refresh started while this one
    /// was in flight - including when the stale fetch itself failed, since
    /// its error is as dead as its data.
    pub async fn refresh(&self, feed_url: &str) -> Result<Vec<NewsItem>, NewsError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.source.fetch(feed_url).await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            return Err(NewsError::Superseded);
        }
        result
    }
}
