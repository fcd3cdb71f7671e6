//! # zava-service: Entity Services for Zava Inventory
//!
//! The callable operations of the inventory backend, plus the ambient pieces
//! a host process needs (configuration, logging, response envelope).
//!
//! ## Module Organization
//! ```text
//! zava_service/
//! ├── lib.rs          ◄─── You are here (ZavaInventory bundle)
//! ├── services/
//! │   ├── product.rs  ◄─── list / get / add / update / remove products
//! │   ├── store.rs    ◄─── list / get / add / update / remove stores
//! │   └── inventory.rs◄─── stock cells and joined listings
//! ├── response.rs     ◄─── Output payloads + Envelope
//! ├── error.rs        ◄─── ApiError / ErrorCode
//! ├── config.rs       ◄─── AppConfig (TOML + env)
//! └── logging.rs      ◄─── tracing subscriber setup
//! ```
//!
//! ## Request Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Transport (external)                                                   │
//! │       │  create_record(1, 1, 10)                                        │
//! │       ▼                                                                 │
//! │  InventoryService ── Result<InventoryChanged, ApiError>                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Envelope::from_result ──► { "success": true, "message": ..., ... }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use zava_core::NewProduct;
//! use zava_service::{Envelope, ZavaInventory};
//! use zava_store::Datastore;
//!
//! let app = ZavaInventory::new(Datastore::in_memory());
//! let result = app.products().add_product(NewProduct::new("Blue Pen", "Stationery", 1.50));
//! let json = serde_json::to_value(Envelope::from_result(result)).unwrap();
//! assert_eq!(json["product"]["sku"], "BP-001");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod response;
pub mod services;

pub use config::{AppConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use response::Envelope;
pub use services::{InventoryService, ProductService, StoreService};

use zava_store::{Datastore, StoreResult};

/// All three services over one datastore.
#[derive(Debug, Clone)]
pub struct ZavaInventory {
    products: ProductService,
    stores: StoreService,
    inventory: InventoryService,
}

impl ZavaInventory {
    /// Creates the services over a datastore.
    pub fn new(db: Datastore) -> Self {
        ZavaInventory {
            products: ProductService::new(db.clone()),
            stores: StoreService::new(db.clone()),
            inventory: InventoryService::new(db),
        }
    }

    /// Opens the datastore described by the configuration.
    pub fn from_config(config: &AppConfig) -> StoreResult<Self> {
        Ok(ZavaInventory::new(Datastore::open(&config.data_config())?))
    }

    pub fn products(&self) -> &ProductService {
        &self.products
    }

    pub fn stores(&self) -> &StoreService {
        &self.stores
    }

    pub fn inventory(&self) -> &InventoryService {
        &self.inventory
    }
}

// =============================================================================
// End-to-end Tests
// =============================================================================
