use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::{Clock, Entropy, StateStore, StoreError};

/// Tab-scoped storage key holding the session token.
pub const SESSION_KEY: &str = "cyberwareUserSessionId";

/// Author recorded on the seeded posts. Never equals a generated token, so
/// seeded posts are never user-deletable.
pub const SYSTEM_SESSION: &str = "system-static";

/// Opaque per-tab identity gating post deletion.
///
/// Not an authentication credential: it lives only as long as the tab's
/// storage area and is never shown to other visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The synthetic author of the seeded posts.
    pub fn system() -> Self {
        Self(SYSTEM_SESSION.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn mint(now: DateTime<Utc>, nonce: &str) -> Self {
        Self(format!("sess-{}-{}", now.timestamp_millis(), nonce))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Return the tab's session token, minting and storing one on first use.
///
/// `store` must be the tab-scoped area: the token is deliberately not shared
/// across tabs or restarts.
pub fn ensure_session(
    store: &dyn StateStore,
    clock: &dyn Clock,
    entropy: &dyn Entropy,
) -> Result<SessionId, StoreError> {
    if let Some(existing) = store.get(SESSION_KEY)? {
        return Ok(SessionId::new(existing));
    }
    let id = SessionId::mint(clock.now(), &entropy.session_nonce());
    store.set(SESSION_KEY, id.as_str())?;
    Ok(id)
}
