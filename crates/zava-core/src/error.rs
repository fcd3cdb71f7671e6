//! # Error Types
//!
//! Domain-specific error types for zava-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  zava-core errors (this file)                                          │
//! │  ├── CoreError        - Duplicate / not found / missing collection     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  zava-store errors (separate crate)                                    │
//! │  └── StoreError       - Load / save failures                           │
//! │                                                                         │
//! │  zava-service errors                                                   │
//! │  └── ApiError         - What the caller sees (code + message)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Envelope               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages carry the offending ids and values; the service layer forwards
//! them verbatim to callers.

use thiserror::Error;

use crate::types::RecordId;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations across the three collections.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Another product already uses the normalized `(name, category)` key.
    #[error("A product with the name '{name}' and category '{category}' already exists.")]
    DuplicateProduct { name: String, category: String },

    /// Another store already uses the normalized `(name, address)` key.
    #[error("A store with the name '{name}' and address '{address}' already exists.")]
    DuplicateStore { name: String, address: String },

    /// An inventory record for the `(product_id, store_id)` pair exists.
    #[error("Inventory record already exists for product ID {product_id} at store ID {store_id}")]
    DuplicateInventory {
        product_id: RecordId,
        store_id: RecordId,
    },

    /// No record with this id in the named collection.
    ///
    /// ## When This Occurs
    /// - get / update / remove with an id that was never assigned
    /// - the record was removed (hard delete, ids are not reused)
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: RecordId },

    /// No inventory record joins this product and store.
    ///
    /// Distinct from a dangling product/store reference: those are tolerated
    /// and rendered as placeholders, a missing record is not.
    #[error("No inventory record found for product ID {product_id} at store ID {store_id}")]
    InventoryRecordNotFound {
        product_id: RecordId,
        store_id: RecordId,
    },

    /// A collection the operation depends on is empty or absent.
    #[error("No {collection} data available ({collection} collection missing or empty)")]
    DependencyMissing { collection: &'static str },

    /// The highest stored id leaves no room for another record.
    #[error("No id available after {max}")]
    IdsExhausted { max: RecordId },

    /// An update was requested without any patch field supplied.
    #[error("No fields provided to update")]
    NoFieldsProvided,

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a NotFound error for an entity kind and id.
    pub fn not_found(entity: &'static str, id: RecordId) -> Self {
        CoreError::NotFound { entity, id }
    }

    /// Creates a DependencyMissing error for a collection name.
    pub fn dependency_missing(collection: &'static str) -> Self {
        CoreError::DependencyMissing { collection }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any mutation; the entity prefix ("Product", "Store") is
/// part of the message so callers can show it as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required text field is empty on create.
    #[error("{entity} {field} is required and must be a string.")]
    Required {
        entity: &'static str,
        field: &'static str,
    },

    /// A supplied patch field is empty.
    #[error("{entity} {field} must be a non-empty string.")]
    Empty {
        entity: &'static str,
        field: &'static str,
    },

    /// Price is negative, NaN or infinite.
    #[error("{entity} price {requirement} a non-negative number.")]
    InvalidPrice {
        entity: &'static str,
        requirement: &'static str,
    },

    /// Quantity is negative.
    #[error("Quantity is required and must be a non-negative integer.")]
    InvalidQuantity { value: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
