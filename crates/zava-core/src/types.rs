//! # Domain Types
//!
//! Records, create inputs and update patches for the three collections.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │      Store      │   │  InventoryRecord    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │   │  id             │   │  id                 │   │
//! │  │  name ┐ unique  │   │  name    ┐ uniq │   │  productId ┐ unique │   │
//! │  │  category ┘     │   │  address ┘      │   │  storeId   ┘        │   │
//! │  │  price, sku     │   │  city, country  │   │  quantity ≥ 0       │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! │          ▲                      ▲                  │        │           │
//! │          └──────── soft reference (not enforced) ──┴────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Records serialize with camelCase keys (`productId`, `storeId`) so the
//! stored JSON collections stay readable by other tools.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identity shared by all three collections.
pub type RecordId = i64;

/// Anything stored in a collection keyed by an integer id.
pub trait Record {
    /// Returns the record's identity.
    fn id(&self) -> RecordId;
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Monotonic identity (max + 1).
    pub id: RecordId,

    /// Display name. Half of the `(name, category)` business key.
    pub name: String,

    /// Category. Half of the `(name, category)` business key.
    pub category: String,

    /// Unit price, never negative.
    pub price: f64,

    /// Stock keeping unit, derived once at creation and never regenerated.
    pub sku: String,

    /// Free text; may be empty.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Builds the stand-in shown when an inventory row references a product
    /// that no longer exists.
    pub fn placeholder(id: RecordId) -> Self {
        Product {
            id,
            name: format!("Unknown Product (ID: {})", id),
            category: "Unknown".to_string(),
            price: 0.0,
            sku: "N/A".to_string(),
            description: "Product not found in products collection".to_string(),
        }
    }
}

impl Record for Product {
    fn id(&self) -> RecordId {
        self.id
    }
}

// =============================================================================
// Store
// =============================================================================

/// A physical store holding stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: RecordId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub address: String,
}

impl Store {
    /// Builds the stand-in shown when an inventory row references a store
    /// that no longer exists.
    pub fn placeholder(id: RecordId) -> Self {
        Store {
            id,
            name: format!("Unknown Store (ID: {})", id),
            city: "Unknown".to_string(),
            country: "Unknown".to_string(),
            address: "Store not found in stores collection".to_string(),
        }
    }
}

impl Record for Store {
    fn id(&self) -> RecordId {
        self.id
    }
}

// =============================================================================
// Inventory Record
// =============================================================================

/// Stock of one product at one store.
///
/// `product_id` and `store_id` are soft references: they are stored without
/// checking that the product or store exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: RecordId,
    pub product_id: RecordId,
    pub store_id: RecordId,
    pub quantity: i64,
}

impl InventoryRecord {
    /// Returns true if this record belongs to the `(product_id, store_id)` cell.
    #[inline]
    pub fn is_cell(&self, product_id: RecordId, store_id: RecordId) -> bool {
        self.product_id == product_id && self.store_id == store_id
    }
}

impl Record for InventoryRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

// =============================================================================
// Create Inputs
// =============================================================================

/// Input for adding a product. The id and SKU are assigned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl NewProduct {
    /// Creates an input with an empty description.
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        NewProduct {
            name: name.into(),
            category: category.into(),
            price,
            description: String::new(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Input for adding a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStore {
    pub name: String,
    pub city: String,
    pub country: String,
    pub address: String,
}

impl NewStore {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        NewStore {
            name: name.into(),
            city: city.into(),
            country: country.into(),
            address: address.into(),
        }
    }
}

// =============================================================================
// Patches
// =============================================================================

/// Partial update for a product.
///
/// `None` means "not supplied"; `Some("")` is supplied and will fail
/// validation. The SKU is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProductPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.description.is_none()
    }

    /// True when the patch touches the `(name, category)` business key.
    pub fn touches_key(&self) -> bool {
        self.name.is_some() || self.category.is_some()
    }
}

/// Partial update for a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl StorePatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.city.is_none() && self.country.is_none() && self.address.is_none()
    }

    /// True when the patch touches the `(name, address)` business key.
    pub fn touches_key(&self) -> bool {
        self.name.is_some() || self.address.is_some()
    }
}

// =============================================================================
// Updated Field Names
// =============================================================================

/// A product field changed by an update, reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Name,
    Category,
    Price,
    Description,
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductField::Name => write!(f, "name"),
            ProductField::Category => write!(f, "category"),
            ProductField::Price => write!(f, "price"),
            ProductField::Description => write!(f, "description"),
        }
    }
}

/// A store field changed by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreField {
    Name,
    City,
    Country,
    Address,
}

impl fmt::Display for StoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreField::Name => write!(f, "name"),
            StoreField::City => write!(f, "city"),
            StoreField::Country => write!(f, "country"),
            StoreField::Address => write!(f, "address"),
        }
    }
}

/// Joins field names as `"name, price"` for update messages.
pub fn join_fields<F: fmt::Display>(fields: &[F]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Unit Tests
// =============================================================================
