//! # zava-store: Persistence Layer for Zava Inventory
//!
//! This crate provides collection storage for the Zava Inventory system.
//! Each collection is loaded and saved as a whole; callers load, mutate and
//! save the full sequence.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Zava Inventory Data Flow                            │
//! │                                                                         │
//! │  Entity service (add_product)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    zava-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐   ┌───────────┐  │   │
//! │  │   │   Datastore   │    │   Repositories     │   │  Backend  │  │   │
//! │  │   │ (datastore.rs)│    │ (repository/)      │   │(backend.rs│  │   │
//! │  │   │               │    │                    │   │           │  │   │
//! │  │   │ DataConfig    │───►│ ProductRepository  │──►│ File      │  │   │
//! │  │   │ backend handle│    │ StoreRepository    │   │ Memory    │  │   │
//! │  │   │               │    │ InventoryRepository│   │           │  │   │
//! │  │   └───────────────┘    └────────────────────┘   └───────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   data/products.json   data/stores.json   data/inventory.json   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`backend`] - `StorageBackend` trait, file and in-memory implementations
//! - [`collection`] - Collection names and the `Stored` record binding
//! - [`repository`] - Typed load/save over one collection
//! - [`datastore`] - Handle that hands out repositories
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zava_store::{DataConfig, Datastore};
//!
//! let db = Datastore::open(&DataConfig::new("./data"))?;
//! let mut stores = db.stores().load()?;
//! stores.retain(|s| s.id != 3);
//! db.stores().save(&stores)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod collection;
pub mod datastore;
pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use collection::{Collection, Stored};
pub use datastore::{DataConfig, Datastore};
pub use error::{StoreError, StoreResult};
pub use repository::{CollectionRepository, InventoryRepository, ProductRepository, StoreRepository};
