use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category a community post is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    Danger,
    Tip,
    Question,
}

impl PostCategory {
    /// Stable lowercase name, as used in post ids and stored state.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Danger => "danger",
            PostCategory::Tip => "tip",
            PostCategory::Question => "question",
        }
    }
}

/// Post entity - a single community submission.
///
/// Serialized field names are pinned to the persisted-state layout, so
/// arrays written by earlier releases of the site load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique within the store; user posts get `user-<millis>-<category>`.
    pub id: String,
    pub title: String,
    pub content: String,
    /// Random 4-digit display pseudonym, regenerated per post.
    pub guardian_id: String,
    pub category: PostCategory,
    pub timestamp: DateTime<Utc>,
    /// The author's session token; gates deletion, nothing else.
    pub user_session_id: String,
}
