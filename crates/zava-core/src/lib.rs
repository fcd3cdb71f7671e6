//! # zava-core: Pure Inventory Logic for Zava Inventory
//!
//! This crate is the **relational heart** of Zava Inventory. Three collections
//! (products, stores, inventory records) are stored independently with no
//! foreign keys; everything that keeps them consistent lives here as pure
//! functions over slices.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Zava Inventory Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Transport (external: RPC / tool dispatch)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Envelope::from_result                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    zava-service                                 │   │
//! │  │    ProductService, StoreService, InventoryService               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ zava-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ identity  │  │ uniqueness │  │   join    │  │   │
//! │  │   │  Product  │  │  next_id  │  │is_duplicate│  │ per-store │  │   │
//! │  │   │  Store    │  │   SKU     │  │ normalize  │  │ enrich    │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    zava-store (Persistence Layer)               │   │
//! │  │              JSON collections, load / save whole sequence       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Records (Product, Store, InventoryRecord), inputs and patches
//! - [`identity`] - Next-id allocation and SKU generation
//! - [`uniqueness`] - Normalized business-key collision checks
//! - [`join`] - Cross-collection views with the unknown-placeholder policy
//! - [`validation`] - Field rules for creates and patches
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use zava_core::identity::{generate_sku, next_id};
//! use zava_core::uniqueness::is_duplicate;
//! use zava_core::Product;
//!
//! let products: Vec<Product> = Vec::new();
//! let id = next_id(&products).unwrap();
//! assert_eq!(id, 1);
//! assert_eq!(generate_sku("Blue Pen", id), "BP-001");
//! assert!(!is_duplicate(&products, "Blue Pen", "Stationery", None));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod identity;
pub mod join;
pub mod types;
pub mod uniqueness;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;
