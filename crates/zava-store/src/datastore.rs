//! # Datastore
//!
//! Backend selection and the handle that hands out repositories.
//!
//! ## Data Directory Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where do collections live?                         │
//! │                                                                         │
//! │  1. Explicit directory (config file / ZAVA_DATA_DIR, resolved upstream) │
//! │           │ none                                                        │
//! │           ▼                                                             │
//! │  2. /code/data  if it exists (container image layout)                   │
//! │           │ missing                                                     │
//! │           ▼                                                             │
//! │  3. ./data      (local development)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::backend::{FileBackend, MemoryBackend, StorageBackend};
use crate::error::StoreResult;
use crate::repository::{InventoryRepository, ProductRepository, StoreRepository};

/// Data directory used inside the container image.
pub const CONTAINER_DATA_DIR: &str = "/code/data";

/// Data directory used for local development, relative to the working dir.
pub const LOCAL_DATA_DIR: &str = "data";

// =============================================================================
// Configuration
// =============================================================================

/// Storage configuration.
///
/// ## Example
/// ```rust
/// use zava_store::DataConfig;
///
/// let config = DataConfig::new("/var/lib/zava").pretty(false);
/// assert!(!config.pretty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    /// Directory holding one JSON file per collection.
    pub data_dir: PathBuf,

    /// Pretty-print collections (2-space indent).
    /// Default: true
    pub pretty: bool,
}

impl DataConfig {
    /// Creates a configuration for an explicit data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        DataConfig {
            data_dir: data_dir.into(),
            pretty: true,
        }
    }

    /// Uses `data_dir` if given, otherwise the default resolution order.
    pub fn resolve(data_dir: Option<PathBuf>) -> Self {
        DataConfig::new(data_dir.unwrap_or_else(default_data_dir))
    }

    /// Sets whether collections are pretty-printed.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Container directory if present, else the local development directory.
pub fn default_data_dir() -> PathBuf {
    let container = Path::new(CONTAINER_DATA_DIR);
    if container.is_dir() {
        container.to_path_buf()
    } else {
        PathBuf::from(LOCAL_DATA_DIR)
    }
}

// =============================================================================
// Datastore
// =============================================================================

/// Handle over one storage backend.
///
/// Cloning is cheap (shared `Arc`). Nothing is cached: each repository call
/// goes to the backend.
///
/// ## Usage
/// ```rust
/// use zava_store::Datastore;
///
/// let db = Datastore::in_memory();
/// assert!(db.products().load().unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Datastore {
    backend: Arc<dyn StorageBackend>,
    pretty: bool,
}

impl Datastore {
    /// Opens a file-backed datastore, creating the data directory if needed.
    pub fn open(config: &DataConfig) -> StoreResult<Self> {
        info!(path = %config.data_dir.display(), "Opening data directory");
        let backend = FileBackend::open(&config.data_dir)?;
        Ok(Datastore {
            backend: Arc::new(backend),
            pretty: config.pretty,
        })
    }

    /// Creates an empty in-memory datastore (for tests).
    pub fn in_memory() -> Self {
        Datastore::with_backend(Arc::new(MemoryBackend::new()))
    }

    /// Wraps an injected backend.
    pub fn with_backend(backend: Arc<dyn StorageBackend>) -> Self {
        Datastore {
            backend,
            pretty: true,
        }
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    /// Returns the products repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(Arc::clone(&self.backend), self.pretty)
    }

    /// Returns the stores repository.
    pub fn stores(&self) -> StoreRepository {
        StoreRepository::new(Arc::clone(&self.backend), self.pretty)
    }

    /// Returns the inventory repository.
    pub fn inventory(&self) -> InventoryRepository {
        InventoryRepository::new(Arc::clone(&self.backend), self.pretty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use zava_core::InventoryRecord;

    #[test]
    fn test_config_builder() {
        let config = DataConfig::new("/tmp/zava").pretty(false);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/zava"));
        assert!(!config.pretty);
    }

    #[test]
    fn test_resolve_prefers_explicit_dir() {
        let config = DataConfig::resolve(Some(PathBuf::from("/srv/zava")));
        assert_eq!(config.data_dir, PathBuf::from("/srv/zava"));
        assert!(config.pretty);
    }

    #[test]
    fn test_open_file_datastore_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let db = Datastore::open(&DataConfig::new(dir.path())).unwrap();

        let record = InventoryRecord {
            id: 1,
            product_id: 1,
            store_id: 1,
            quantity: 10,
        };
        db.inventory().save(std::slice::from_ref(&record)).unwrap();

        // a second handle over the same directory sees the write
        let reopened = Datastore::open(&DataConfig::new(dir.path())).unwrap();
        assert_eq!(reopened.inventory().load().unwrap(), vec![record]);
        assert!(dir.path().join("inventory.json").is_file());
    }

    #[test]
    fn test_clones_share_backend() {
        let db = Datastore::in_memory();
        let other = db.clone();
        other.inventory().save(&[]).unwrap();
        assert!(db.backend().read("inventory.json").unwrap().is_some());
    }
}
