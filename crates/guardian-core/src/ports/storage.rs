use thiserror::Error;

/// String key/value store - abstraction over the browser's per-origin
/// storage areas, durable or tab-scoped.
///
/// Operations are synchronous: a mutation runs to completion before control
/// returns to the triggering event, so no reader ever observes a partial
/// write. Concurrent writers from two tabs may still race on a shared
/// durable backend; last writer wins.
pub trait StateStore: Send + Sync {
    /// Read the value under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the whole value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Drop `key` and its value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Storage operation errors.
///
/// Callers treat any of these as a generic operation failure - there is no
/// retry or queuing tier above the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Backend(String),

    #[error("stored state is not valid JSON: {0}")]
    Corrupt(String),
}
