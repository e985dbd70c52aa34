use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// First `src` attribute of an `<img>` tag, for feeds that only carry their
/// artwork inline in the description markup.
static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img[^>]*\ssrc\s*=\s*["']([^"']+)["']"#)
        .expect("img-src pattern is statically valid")
});

/// One article as the RSS-to-JSON proxy returns it.
///
/// The proxy flattens whatever the upstream feed carries, so everything past
/// title and link is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    /// Proxy date format, `"YYYY-MM-DD HH:MM:SS"` in UTC.
    #[serde(rename = "pubDate", default)]
    pub pub_date: String,
    #[serde(default)]
    pub author: Option<String>,
    /// Full item content; may contain HTML.
    #[serde(default)]
    pub content: Option<String>,
    /// Short description; may contain HTML.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub enclosure: Option<Enclosure>,
}

/// Media attachment as flattened by the proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enclosure {
    #[serde(default)]
    pub link: Option<String>,
}

impl NewsItem {
    /// Publication time, when the proxy's date field parses.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(&self.pub_date, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Best-effort artwork: the enclosure link, then the thumbnail, then the
    /// first `<img src>` inside the description markup.
    pub fn image_url(&self) -> Option<String> {
        if let Some(link) = self
            .enclosure
            .as_ref()
            .and_then(|enclosure| enclosure.link.as_deref())
            .filter(|link| !link.is_empty())
        {
            return Some(link.to_string());
        }
        if let Some(thumb) = self.thumbnail.as_deref().filter(|t| !t.is_empty()) {
            return Some(thumb.to_string());
        }
        let description = self.description.as_deref()?;
        IMG_SRC
            .captures(description)
            .map(|captures| captures[1].to_string())
    }
}
