//! # Storage Backends
//!
//! The key-value seam under the repositories.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      StorageBackend                                     │
//! │                                                                         │
//! │   read(key)  -> Option<bytes>     None = collection does not exist     │
//! │   write(key, bytes)               replaces the whole value             │
//! │                                                                         │
//! │   ┌──────────────────────────┐      ┌──────────────────────────┐       │
//! │   │ FileBackend              │      │ MemoryBackend            │       │
//! │   │ <dir>/<key>              │      │ RwLock<HashMap<..>>      │       │
//! │   │ temp file + rename       │      │ tests, embedding         │       │
//! │   └──────────────────────────┘      └──────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No locking across read/write pairs: a load-mutate-save cycle from two
//! writers is last-writer-wins.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Raw key-value persistence for whole collections.
pub trait StorageBackend: Send + Sync + fmt::Debug {
    /// Returns the stored bytes for `key`, or `None` if nothing was stored.
    fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Replaces the stored bytes for `key`.
    fn write(&self, key: &str, bytes: &[u8]) -> StoreResult<()>;
}

// =============================================================================
// File Backend
// =============================================================================

/// One file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Opens a data directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::io(root.display().to_string(), e))?;
        Ok(FileBackend { root })
    }

    /// Returns the data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Collection file not found");
                Ok(None)
            }
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        let path = self.path_for(key);

        // Temp file in the same directory so the rename stays on one filesystem
        let mut tmp = tempfile::NamedTempFile::new_in(&self.root).map_err(|e| StoreError::io(key, e))?;
        tmp.write_all(bytes).map_err(|e| StoreError::io(key, e))?;
        tmp.as_file().sync_all().map_err(|e| StoreError::io(key, e))?;
        tmp.persist(&path).map_err(|e| StoreError::io(key, e.error))?;

        debug!(path = %path.display(), bytes = bytes.len(), "Collection file written");
        Ok(())
    }
}

// =============================================================================
// Memory Backend
// =============================================================================

/// In-process backend, used by tests and embedders that persist elsewhere.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Debug for MemoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<String> = self
            .entries
            .read()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default();
        f.debug_struct("MemoryBackend").field("keys", &keys).finish()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_backend_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        assert!(backend.read("stores.json").unwrap().is_none());
    }

    #[test]
    fn test_file_backend_write_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.write("stores.json", b"[1]").unwrap();
        backend.write("stores.json", b"[2]").unwrap();

        assert_eq!(backend.read("stores.json").unwrap(), Some(b"[2]".to_vec()));
        assert_eq!(fs::read(dir.path().join("stores.json")).unwrap(), b"[2]");
        // only the collection file is left behind, no stray temp files
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_file_backend_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let backend = FileBackend::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(backend.root(), nested.as_path());
    }

    #[test]
    fn test_memory_backend() {
        let backend = MemoryBackend::new();
        assert!(backend.read("products.json").unwrap().is_none());

        backend.write("products.json", b"[]").unwrap();
        assert_eq!(backend.read("products.json").unwrap(), Some(b"[]".to_vec()));
    }
}
