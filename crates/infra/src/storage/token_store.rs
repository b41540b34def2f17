//! Token store implementations
//!
//! The bearer token is the only client-side state that outlives the
//! process. [`FileTokenStore`] keeps it in a single file; an unreadable or
//! missing file means no session. [`MemoryTokenStore`] backs tests and
//! ephemeral sessions.

use std::fs;
use std::io;
use std::path::PathBuf;

use oneflow_core::auth::ports::{TokenStore, TokenStoreError};
use parking_lot::Mutex;
use tracing::debug;

/// Single-token persistence in a file.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn store(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|err| TokenStoreError(err.to_string()))?;
            }
        }
        fs::write(&self.path, token).map_err(|err| TokenStoreError(err.to_string()))?;
        debug!(path = %self.path.display(), "token persisted");
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "token cleared");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(TokenStoreError(err.to_string())),
        }
    }
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_string())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().clone()
    }

    fn store(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileTokenStore::new(dir.path().join("token"));

        assert_eq!(store.load(), None);
        store.store("session-token").expect("store succeeds");
        assert_eq!(store.load().as_deref(), Some("session-token"));

        store.clear().expect("clear succeeds");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileTokenStore::new(dir.path().join("nested/state/token"));

        store.store("t").expect("store succeeds");
        assert_eq!(store.load().as_deref(), Some("t"));
    }

    #[test]
    fn test_clearing_missing_file_is_ok() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileTokenStore::new(dir.path().join("token"));
        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_whitespace_only_file_is_no_session() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("token");
        fs::write(&path, "\n  \n").expect("write succeeds");

        let store = FileTokenStore::new(path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryTokenStore::with_token("t");
        assert_eq!(store.load().as_deref(), Some("t"));
        store.clear().expect("clear succeeds");
        assert_eq!(store.load(), None);
    }
}
