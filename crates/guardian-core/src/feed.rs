//! The community feed store and moderator.
//!
//! Owns the post list: validates drafts, persists the whole list as one JSON
//! array under a single durable key, and enforces ownership on deletion.
//! Validation and submission are separate operations so the caller can put a
//! user-confirmation step between them; the caller carries the draft across
//! that boundary, the store holds no staging state.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{Post, PostCategory, SYSTEM_SESSION, SessionId};
use crate::error::{DeleteError, ValidationError};
use crate::moderation::{FeedPolicy, content_units};
use crate::ports::{Clock, Entropy, StateStore, StoreError};

/// Durable storage key the whole post list lives under.
pub const POSTS_KEY: &str = "cyberwareCommunityPosts";

/// The feed store, constructed over an injected storage backend, clock, and
/// entropy source. Holds no post list of its own: every operation re-reads
/// the backing store and rewrites it whole on mutation, so readers always
/// derive their view from persisted state.
pub struct CommunityFeed<S, C, E>
where
    S: StateStore,
    C: Clock,
    E: Entropy,
{
    store: S,
    clock: C,
    entropy: E,
    policy: FeedPolicy,
}

impl<S, C, E> CommunityFeed<S, C, E>
where
    S: StateStore,
    C: Clock,
    E: Entropy,
{
    /// Open the feed over `store` with the default submission policy,
    /// seeding the three example posts when the posts key is absent.
    pub fn open(store: S, clock: C, entropy: E) -> Result<Self, StoreError> {
        Self::with_policy(store, clock, entropy, FeedPolicy::default())
    }

    /// Open the feed with a custom submission policy.
    pub fn with_policy(
        store: S,
        clock: C,
        entropy: E,
        policy: FeedPolicy,
    ) -> Result<Self, StoreError> {
        let feed = Self {
            store,
            clock,
            entropy,
            policy,
        };
        if feed.store.get(POSTS_KEY)?.is_none() {
            feed.persist(&seed_posts(feed.clock.now()))?;
        }
        Ok(feed)
    }

    /// Fresh snapshot of every post, newest first. Same-timestamp posts keep
    /// their stored order.
    pub fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.load()?;
        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(posts)
    }

    /// Check a draft against the submission policy.
    ///
    /// Checks run in a fixed order - emptiness, then banned vocabulary, then
    /// length - and the first failure wins, so the poster fixes one problem
    /// at a time.
    pub fn validate_draft(&self, title: &str, content: &str) -> Result<(), ValidationError> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() || content.is_empty() {
            return Err(ValidationError::EmptyField);
        }
        if self.policy.screen(title).is_some() || self.policy.screen(content).is_some() {
            return Err(ValidationError::ContentViolation);
        }
        let units = content_units(content);
        if units < self.policy.min_content_len || units > self.policy.max_content_len {
            return Err(ValidationError::LengthViolation {
                min: self.policy.min_content_len,
                max: self.policy.max_content_len,
            });
        }
        Ok(())
    }

    /// Commit a draft the caller already validated and confirmed.
    ///
    /// Deliberately does not re-run [`Self::validate_draft`]: the explicit
    /// confirmation step sits between the two calls. Assigns the id, a fresh
    /// guardian pseudonym, and the current timestamp, then appends and
    /// persists the whole list.
    pub fn submit_post(
        &self,
        title: &str,
        content: &str,
        category: PostCategory,
        author: &SessionId,
    ) -> Result<Post, StoreError> {
        let now = self.clock.now();
        let post = Post {
            id: format!("user-{}-{}", now.timestamp_millis(), category.as_str()),
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            guardian_id: self.entropy.guardian_pin(),
            category,
            timestamp: now,
            user_session_id: author.as_str().to_string(),
        };

        let mut posts = self.load()?;
        posts.push(post.clone());
        self.persist(&posts)?;
        Ok(post)
    }

    /// Remove `id` on behalf of `requestor`. Hard delete, no undo.
    pub fn delete_post(&self, id: &str, requestor: &SessionId) -> Result<(), DeleteError> {
        let mut posts = self.load()?;
        let Some(index) = posts.iter().position(|post| post.id == id) else {
            return Err(DeleteError::NotFound(id.to_string()));
        };
        if posts[index].user_session_id != requestor.as_str() {
            return Err(DeleteError::Forbidden(id.to_string()));
        }
        posts.remove(index);
        self.persist(&posts)?;
        Ok(())
    }

    fn load(&self) -> Result<Vec<Post>, StoreError> {
        match self.store.get(POSTS_KEY)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|err| StoreError::Corrupt(err.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, posts: &[Post]) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string(posts).map_err(|err| StoreError::Corrupt(err.to_string()))?;
        self.store.set(POSTS_KEY, &raw)
    }
}

/// The three example posts a fresh feed starts with, authored by the
/// synthetic system session so no real session can delete them.
fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: "static-1".to_string(),
            title: "Major Ransomware Attack on a Small Business?".to_string(),
            content: "My friend's company was hit; all files encrypted. They didn't have \
                      backups. Is there any way to fight this without paying the ransom?"
                .to_string(),
            guardian_id: "3087".to_string(),
            category: PostCategory::Danger,
            timestamp: now - Duration::hours(3),
            user_session_id: SYSTEM_SESSION.to_string(),
        },
        Post {
            id: "static-2".to_string(),
            title: "Don't Forget to Check Your Router Firmware!".to_string(),
            content: "Just updated my router; found out I was running five versions behind. \
                      Router security is often the weakest link in a home network. Patch \
                      everything!"
                .to_string(),
            guardian_id: "5193".to_string(),
            category: PostCategory::Tip,
            timestamp: now - Duration::hours(24),
            user_session_id: SYSTEM_SESSION.to_string(),
        },
        Post {
            id: "static-3".to_string(),
            title: "Are hardware security keys worth the investment?".to_string(),
            content: "I use an authenticator app, but keep seeing YubiKeys recommended. For a \
                      normal user, is the extra cost justified for better protection?"
                .to_string(),
            guardian_id: "1402".to_string(),
            category: PostCategory::Question,
            timestamp: now - Duration::hours(48),
            user_session_id: SYSTEM_SESSION.to_string(),
        },
    ]
}
