//! Site configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::news::DEFAULT_PROXY;

/// Feeds and storage locations, overridable through the environment.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory the durable state store writes under.
    pub data_dir: PathBuf,
    /// Feed behind the cyber-news page.
    pub news_feed_url: String,
    /// Feed behind the home-page featured headline.
    pub featured_feed_url: String,
    /// RSS-to-JSON proxy endpoint.
    pub news_proxy_url: String,
}

impl SiteConfig {
    /// Load configuration, reading a `.env` file when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            data_dir: env::var("GUARDIAN_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            news_feed_url: env::var("GUARDIAN_NEWS_FEED")
                .unwrap_or_else(|_| "https://hnrss.org/newest".to_string()),
            featured_feed_url: env::var("GUARDIAN_FEATURED_FEED").unwrap_or_else(|_| {
                "https://www.wired.com/feed/category/security/latest/rss".to_string()
            }),
            news_proxy_url: env::var("GUARDIAN_NEWS_PROXY")
                .unwrap_or_else(|_| DEFAULT_PROXY.to_string()),
        }
    }
}
