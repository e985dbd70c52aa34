//! JSON-file state store - the durable per-origin (local) storage area.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use guardian_core::ports::{StateStore, StoreError};

/// One file per key under a root directory. Writes land in a temp file first
/// and move into place with a rename, so a reader never observes a partial
/// value - the whole-value atomic rewrite the feed's persistence contract
/// requires.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `root`, creating the directory when missing.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|err| backend(&root, err))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

fn backend(path: &Path, err: io::Error) -> StoreError {
    StoreError::Backend(format!("{}: {}", path.display(), err))
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(backend(&path, err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let target = self.path_for(key);
        let staging = self
            .root
            .join(format!(".{key}.{}.tmp", Uuid::new_v4().simple()));
        fs::write(&staging, value).map_err(|err| backend(&staging, err))?;
        fs::rename(&staging, &target).map_err(|err| backend(&target, err))?;
        tracing::debug!(key, bytes = value.len(), "state written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(backend(&path, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    struct TempRoot(PathBuf);

    impl TempRoot {
        fn new() -> Self {
            let dir = env::temp_dir().join(format!("guardian-store-{}", Uuid::new_v4().simple()));
            Self(dir)
        }
    }

    impl Drop for TempRoot {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let root = TempRoot::new();
        let store = JsonFileStore::open(&root.0).unwrap();
        store.set("cyberwareCommunityPosts", r#"[{"id":"static-1"}]"#).unwrap();
        assert_eq!(
            store.get("cyberwareCommunityPosts").unwrap(),
            Some(r#"[{"id":"static-1"}]"#.to_string())
        );
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let root = TempRoot::new();
        let store = JsonFileStore::open(&root.0).unwrap();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_overwrite_replaces_whole_value() {
        let root = TempRoot::new();
        let store = JsonFileStore::open(&root.0).unwrap();
        store.set("key", "old").unwrap();
        store.set("key", "new").unwrap();
        assert_eq!(store.get("key").unwrap(), Some("new".to_string()));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let root = TempRoot::new();
        let store = JsonFileStore::open(&root.0).unwrap();
        store.set("key", "value").unwrap();
        store.remove("key").unwrap();
        store.remove("key").unwrap();
        assert_eq!(store.get("key").unwrap(), None);
    }

    #[test]
    fn test_no_staging_files_left_behind() {
        let root = TempRoot::new();
        let store = JsonFileStore::open(&root.0).unwrap();
        store.set("key", "value").unwrap();
        let leftovers = fs::read_dir(&root.0)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_survives_reopen() {
        let root = TempRoot::new();
        {
            let store = JsonFileStore::open(&root.0).unwrap();
            store.set("key", "durable").unwrap();
        }
        let store = JsonFileStore::open(&root.0).unwrap();
        assert_eq!(store.get("key").unwrap(), Some("durable".to_string()));
    }
}
