//! View models for the community feed and the news pages.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

use guardian_core::domain::{NewsItem, Post, PostCategory, SessionId};
use guardian_core::timefmt::format_relative_age;

/// At most this many articles make it onto the news page.
pub const MAX_ARTICLES: usize = 12;

/// Summary clip length, in characters.
const SUMMARY_LEN: usize = 200;

/// Stock summary for feeds that ship items without body text.
const SUMMARY_FALLBACK: &str = "Click to view the full article and discussion.";

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is statically valid"));

/// One community post, ready to bind into the feed list.
#[derive(Debug, Clone, Serialize)]
pub struct FeedPostView {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Badge text, e.g. "BREACH ALERT".
    pub tag_label: &'static str,
    /// Style token for the badge.
    pub tag_class: &'static str,
    /// Style token for the list item.
    pub item_class: &'static str,
    /// Display author, e.g. "Guardian#3087".
    pub author_label: String,
    pub age_label: String,
    /// Whether the viewing session may delete this post.
    pub can_delete: bool,
}

/// Map a feed snapshot for `viewer`. Input order is preserved - the store
/// already lists newest first.
pub fn feed_view(posts: &[Post], viewer: &SessionId, now: DateTime<Utc>) -> Vec<FeedPostView> {
    posts
        .iter()
        .map(|post| FeedPostView {
            id: post.id.clone(),
            title: post.title.clone(),
            body: post.content.clone(),
            tag_label: tag_label(post.category),
            tag_class: tag_class(post.category),
            item_class: item_class(post.category),
            author_label: format!("Guardian#{}", post.guardian_id),
            age_label: format_relative_age(post.timestamp, now),
            can_delete: post.user_session_id == viewer.as_str(),
        })
        .collect()
}

fn tag_label(category: PostCategory) -> &'static str {
    match category {
        PostCategory::Danger => "BREACH ALERT",
        PostCategory::Tip => "SECURITY TIP",
        PostCategory::Question => "GENERAL QUERY",
    }
}

fn tag_class(category: PostCategory) -> &'static str {
    match category {
        PostCategory::Danger => "bg-danger",
        PostCategory::Tip => "bg-success",
        PostCategory::Question => "bg-info",
    }
}

fn item_class(category: PostCategory) -> &'static str {
    match category {
        PostCategory::Danger => "post-danger",
        PostCategory::Tip => "post-tip",
        PostCategory::Question => "post-question",
    }
}

/// One card on the news page.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleCardView {
    pub title: String,
    /// "Published: Aug 7, 2026 09:30 | By: author" - the author part is
    /// omitted when the feed carries none.
    pub meta_line: String,
    pub summary: String,
    pub link: String,
}

/// Map proxy items into cards, newest first, capped at [`MAX_ARTICLES`].
pub fn article_cards(items: &[NewsItem]) -> Vec<ArticleCardView> {
    items
        .iter()
        .take(MAX_ARTICLES)
        .map(|item| ArticleCardView {
            title: item.title.clone(),
            meta_line: meta_line(item),
            summary: summary(item),
            link: item.link.clone(),
        })
        .collect()
}

fn meta_line(item: &NewsItem) -> String {
    let date = item
        .published_at()
        .map(|at| at.format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_else(|| item.pub_date.clone());
    match item.author.as_deref().filter(|author| !author.is_empty()) {
        Some(author) => format!("Published: {date} | By: {author}"),
        None => format!("Published: {date}"),
    }
}

fn summary(item: &NewsItem) -> String {
    match item.content.as_deref().filter(|content| !content.is_empty()) {
        Some(content) => {
            let text = TAG.replace_all(content, "");
            let clipped: String = text.chars().take(SUMMARY_LEN).collect();
            format!("{clipped}...")
        }
        None => SUMMARY_FALLBACK.to_string(),
    }
}

/// The home-page featured headline.
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedStoryView {
    pub title: String,
    pub link: String,
    pub image_url: Option<String>,
    /// "Aug 7, 2026 // 09:30 UTC" - 24-hour time.
    pub date_meta: String,
}

/// Build the featured story from the first (latest) item, if any.
pub fn featured_story(items: &[NewsItem]) -> Option<FeaturedStoryView> {
    let item = items.first()?;
    let date_meta = item
        .published_at()
        .map(|at| at.format("%b %-d, %Y // %H:%M UTC").to_string())
        .unwrap_or_else(|| "NO DATA LINK".to_string());
    Some(FeaturedStoryView {
        title: item.title.clone(),
        link: item.link.clone(),
        image_url: item.image_url(),
        date_meta,
    })
}
