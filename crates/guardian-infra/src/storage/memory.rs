//! In-memory state store - the tab-scoped (session) storage area.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use guardian_core::ports::{StateStore, StoreError};

/// HashMap-backed store. Values live exactly as long as the instance, which
/// is the lifetime contract of a tab's session storage. Clones share the
/// underlying map.
#[derive(Clone)]
pub struct InMemoryStore {
    cells: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            cells: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::Backend("state store lock poisoned".to_string())
}

impl StateStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let cells = self.cells.read().map_err(|_| poisoned())?;
        Ok(cells.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut cells = self.cells.write().map_err(|_| poisoned())?;
        cells.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut cells = self.cells.write().map_err(|_| poisoned())?;
        cells.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = InMemoryStore::new();
        store.set("key1", "value1").unwrap();
        assert_eq!(store.get("key1").unwrap(), Some("value1".to_string()));
    }

    #[test]
    fn test_overwrite_replaces_whole_value() {
        let store = InMemoryStore::new();
        store.set("key1", "old").unwrap();
        store.set("key1", "new").unwrap();
        assert_eq!(store.get("key1").unwrap(), Some("new".to_string()));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = InMemoryStore::new();
        store.set("key1", "value1").unwrap();
        store.remove("key1").unwrap();
        store.remove("key1").unwrap();
        assert_eq!(store.get("key1").unwrap(), None);
    }

    #[test]
    fn test_clones_share_cells() {
        let store = InMemoryStore::new();
        let alias = store.clone();
        store.set("key1", "value1").unwrap();
        assert_eq!(alias.get("key1").unwrap(), Some("value1".to_string()));
    }
}
