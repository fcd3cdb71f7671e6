//! # Repository Module
//!
//! Typed load/save over one collection.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Load → Mutate → Save                                 │
//! │                                                                         │
//! │  Entity service                                                        │
//! │       │                                                                 │
//! │       │  let mut stores = db.stores().load()?;                         │
//! │       │  stores.push(new_store);                                       │
//! │       │  db.stores().save(&stores)?;                                   │
//! │       ▼                                                                 │
//! │  CollectionRepository<Store>                                           │
//! │  ├── load(&self)          → Vec<Store> (empty if never saved)          │
//! │  └── save(&self, &[Store]) → replaces the whole collection             │
//! │       │                                                                 │
//! │       │  JSON array, order preserved                                   │
//! │       ▼                                                                 │
//! │  StorageBackend (file / memory)                                        │
//! │                                                                         │
//! │  No partial writes, no merge, nothing cached between calls.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`] - `products` collection
//! - [`StoreRepository`] - `stores` collection
//! - [`InventoryRepository`] - `inventory` collection

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;
use zava_core::{InventoryRecord, Product, Store};

use crate::backend::StorageBackend;
use crate::collection::Stored;
use crate::error::{StoreError, StoreResult};

/// Repository for the products collection.
pub type ProductRepository = CollectionRepository<Product>;

/// Repository for the stores collection.
pub type StoreRepository = CollectionRepository<Store>;

/// Repository for the inventory collection.
pub type InventoryRepository = CollectionRepository<InventoryRecord>;

/// Whole-collection load/save for one record type.
pub struct CollectionRepository<T> {
    backend: Arc<dyn StorageBackend>,
    pretty: bool,
    _record: PhantomData<fn() -> T>,
}

impl<T: Stored> CollectionRepository<T> {
    /// Creates a repository over a backend.
    pub fn new(backend: Arc<dyn StorageBackend>, pretty: bool) -> Self {
        CollectionRepository {
            backend,
            pretty,
            _record: PhantomData,
        }
    }

    /// Loads the full collection in stored order.
    ///
    /// ## Returns
    /// * `Ok(vec![])` - Collection never saved (or stored as blank)
    /// * `Ok(records)` - Decoded records
    /// * `Err(StoreError::Decode)` - Stored bytes are not a JSON array of `T`
    pub fn load(&self) -> StoreResult<Vec<T>> {
        let collection = T::COLLECTION;

        let Some(bytes) = self.backend.read(collection.key())? else {
            debug!(%collection, "Collection absent, loading as empty");
            return Ok(Vec::new());
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let records: Vec<T> = serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
            name: collection.key().to_string(),
            source,
        })?;

        debug!(%collection, count = records.len(), "Collection loaded");
        Ok(records)
    }

    /// Replaces the full collection.
    pub fn save(&self, records: &[T]) -> StoreResult<()> {
        let collection = T::COLLECTION;

        let encoded = if self.pretty {
            serde_json::to_vec_pretty(records)
        } else {
            serde_json::to_vec(records)
        }
        .map_err(|source| StoreError::Encode {
            name: collection.key().to_string(),
            source,
        })?;

        self.backend.write(collection.key(), &encoded)?;

        debug!(%collection, count = records.len(), "Collection saved");
        Ok(())
    }
}

impl<T> Clone for CollectionRepository<T> {
    fn clone(&self) -> Self {
        CollectionRepository {
            backend: Arc::clone(&self.backend),
            pretty: self.pretty,
            _record: PhantomData,
        }
    }
}

impl<T: Stored> fmt::Debug for CollectionRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionRepository")
            .field("collection", &T::COLLECTION)
            .field("backend", &self.backend)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{FileBackend, MemoryBackend};

    fn store(id: i64, name: &str) -> Store {
        Store {
            id,
            name: name.to_string(),
            city: "Seattle".to_string(),
            country: "USA".to_string(),
            address: format!("{} Pike St", id),
        }
    }

    #[test]
    fn test_load_absent_collection_is_empty() {
        let repo = StoreRepository::new(Arc::new(MemoryBackend::new()), true);
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_preserves_order() {
        let repo = StoreRepository::new(Arc::new(MemoryBackend::new()), true);
        let stores = vec![store(3, "C"), store(1, "A"), store(2, "B")];
        repo.save(&stores).unwrap();
        assert_eq!(repo.load().unwrap(), stores);
    }

    #[test]
    fn test_save_replaces_whole_collection() {
        let repo = StoreRepository::new(Arc::new(MemoryBackend::new()), false);
        repo.save(&[store(1, "A"), store(2, "B")]).unwrap();
        repo.save(&[store(2, "B")]).unwrap();
        assert_eq!(repo.load().unwrap(), vec![store(2, "B")]);
    }

    #[test]
    fn test_collections_are_independent() {
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
        let stores = StoreRepository::new(Arc::clone(&backend), true);
        let inventory = InventoryRepository::new(Arc::clone(&backend), true);

        stores.save(&[store(1, "A")]).unwrap();
        assert!(inventory.load().unwrap().is_empty());
    }

    #[test]
    fn test_reads_existing_json_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("inventory.json"),
            r#"[
  {"id": 1, "productId": 1, "storeId": 2, "quantity": 10}
]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("products.json"), "  \n").unwrap();

        let backend: Arc<dyn StorageBackend> = Arc::new(FileBackend::open(dir.path()).unwrap());
        let inventory = InventoryRepository::new(Arc::clone(&backend), true).load().unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory[0].store_id, 2);

        let products = ProductRepository::new(backend, true).load().unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_corrupt_collection_is_decode_error() {
        let backend = MemoryBackend::new();
        backend.write("stores.json", b"{not json").unwrap();
        let repo = StoreRepository::new(Arc::new(backend), true);
        assert!(matches!(repo.load(), Err(StoreError::Decode { .. })));
    }

    #[test]
    fn test_pretty_output_uses_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(FileBackend::open(dir.path()).unwrap());
        StoreRepository::new(backend, true).save(&[store(1, "A")]).unwrap();

        let text = std::fs::read_to_string(dir.path().join("stores.json")).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": 1"));
    }
}
