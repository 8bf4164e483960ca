//! # Filesystem-backed key-value store
//!
//! [`FileStore`] persists each key as its own small file so native builds
//! keep the admin session across restarts, the way `localStorage` does in the
//! browser.
//!
//! ```text
//! <base_dir>/
//! ├── token      # bearer token
//! └── role       # role string
//! ```
//!
//! Callers pick the base directory, usually `dirs::data_dir()/workshop-admin`.

use std::path::PathBuf;

use crate::credentials::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            tracing::warn!("Failed to persist {key}: {e}");
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }

    fn clear(&self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("workshop-admin"));

        // Nothing yet, base dir does not even exist
        assert!(store.get("token").is_none());

        store.set("token", "abc");
        store.set("role", "ADMIN");
        assert_eq!(store.get("token").as_deref(), Some("abc"));

        // Survives a fresh handle on the same directory
        let reopened = FileStore::new(dir.path().join("workshop-admin"));
        assert_eq!(reopened.get("role").as_deref(), Some("ADMIN"));

        store.remove("token");
        assert!(store.get("token").is_none());
        assert!(store.get("role").is_some());

        store.clear();
        assert!(store.get("role").is_none());
    }
}
