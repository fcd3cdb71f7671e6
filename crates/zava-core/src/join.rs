//! # Join / Enrichment Engine
//!
//! Cross-collection views over products, stores and inventory records.
//!
//! ## Views
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Join Directions                                 │
//! │                                                                         │
//! │  inventory_per_store(product)      one row per STORE (dense)           │
//! │      stores ──► inventory cell? ──► quantity or 0                      │
//! │                                                                         │
//! │  enrich_inventory_by_store(store)  rows of that store (sparse)         │
//! │      inventory ──► products lookup ──► product metadata / placeholder  │
//! │      Σ quantity == 0  ⇒  empty                                         │
//! │                                                                         │
//! │  enrich_inventory_by_product(p)    rows of that product (sparse)       │
//! │      inventory ──► stores lookup ──► store metadata / placeholder      │
//! │      reports the true Σ quantity (may be 0)                            │
//! │                                                                         │
//! │  join_single_cell(p, s)            exactly one record or an error      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Placeholder Policy
//! Inventory rows may reference products or stores that were removed. Those
//! references are not errors: the row is kept and the missing side is filled
//! from [`Product::placeholder`] / [`Store::placeholder`].
//!
//! ## Zero Collapse
//! The by-store view treats "rows that all hold zero" the same as "no rows".
//! The by-product view does not. Both behaviors are kept on purpose until
//! callers agree on one.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::{InventoryRecord, Product, RecordId, Store};
use crate::uniqueness::find_cell;

// =============================================================================
// View Types
// =============================================================================

/// Stock of one product at one store, present for every store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStock {
    pub store_id: RecordId,
    pub store_name: String,
    pub quantity: i64,
}

/// A product with its dense per-store stock table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithStock {
    #[serde(flatten)]
    pub product: Product,
    pub inventory_per_store: Vec<StoreStock>,
}

/// An inventory row of a store, enriched with product metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStockRow {
    pub id: RecordId,
    pub store_id: RecordId,
    pub product_id: RecordId,
    pub quantity: i64,
    pub product_name: String,
    pub product_category: String,
    pub product_price: f64,
    pub product_sku: String,
    pub product_description: String,
}

impl ProductStockRow {
    fn new(record: &InventoryRecord, product: &Product) -> Self {
        ProductStockRow {
            id: record.id,
            store_id: record.store_id,
            product_id: record.product_id,
            quantity: record.quantity,
            product_name: product.name.clone(),
            product_category: product.category.clone(),
            product_price: product.price,
            product_sku: product.sku.clone(),
            product_description: product.description.clone(),
        }
    }
}

/// An inventory row of a product, enriched with store metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStockRow {
    pub id: RecordId,
    pub store_id: RecordId,
    pub product_id: RecordId,
    pub quantity: i64,
    pub store_name: String,
    pub store_city: String,
    pub store_country: String,
    pub store_address: String,
}

impl StoreStockRow {
    fn new(record: &InventoryRecord, store: &Store) -> Self {
        StoreStockRow {
            id: record.id,
            store_id: record.store_id,
            product_id: record.product_id,
            quantity: record.quantity,
            store_name: store.name.clone(),
            store_city: store.city.clone(),
            store_country: store.country.clone(),
            store_address: store.address.clone(),
        }
    }
}

/// All inventory rows of one product and their summed quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInventory {
    pub rows: Vec<StoreStockRow>,
    pub total_quantity: i64,
}

/// One inventory record with both sides of the join attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryCell {
    pub inventory: InventoryRecord,
    pub product: Product,
    pub store: Store,
}

// =============================================================================
// Lookups
// =============================================================================

fn products_by_id(products: &[Product]) -> HashMap<RecordId, &Product> {
    products.iter().map(|p| (p.id, p)).collect()
}

fn stores_by_id(stores: &[Store]) -> HashMap<RecordId, &Store> {
    stores.iter().map(|s| (s.id, s)).collect()
}

/// Sums quantities of a set of rows, saturating at `i64::MAX`.
///
/// Quantities are non-negative, so the result is zero exactly when every
/// row holds zero.
pub fn total_quantity<'a>(records: impl IntoIterator<Item = &'a InventoryRecord>) -> i64 {
    records
        .into_iter()
        .fold(0i64, |total, r| total.saturating_add(r.quantity))
}

// =============================================================================
// Joins
// =============================================================================

/// Builds one `StoreStock` row per store, in store order.
///
/// Always returns `stores.len()` rows; stores without a record for the
/// product report quantity 0.
pub fn inventory_per_store(
    product_id: RecordId,
    stores: &[Store],
    inventory: &[InventoryRecord],
) -> Vec<StoreStock> {
    stores
        .iter()
        .map(|store| StoreStock {
            store_id: store.id,
            store_name: store.name.clone(),
            quantity: find_cell(inventory, product_id, store.id)
                .map(|r| r.quantity)
                .unwrap_or(0),
        })
        .collect()
}

/// Attaches the dense per-store stock table to a product.
pub fn with_inventory_per_store(
    product: Product,
    stores: &[Store],
    inventory: &[InventoryRecord],
) -> ProductWithStock {
    let inventory_per_store = inventory_per_store(product.id, stores, inventory);
    ProductWithStock {
        product,
        inventory_per_store,
    }
}

/// Lists a store's inventory with product metadata attached.
///
/// Returns an empty vector both when the store has no rows and when every
/// row holds zero.
pub fn enrich_inventory_by_store(
    store_id: RecordId,
    inventory: &[InventoryRecord],
    products: &[Product],
) -> Vec<ProductStockRow> {
    let rows: Vec<&InventoryRecord> = inventory.iter().filter(|r| r.store_id == store_id).collect();

    if total_quantity(rows.iter().copied()) == 0 {
        return Vec::new();
    }

    let lookup = products_by_id(products);
    rows.into_iter()
        .map(|record| match lookup.get(&record.product_id) {
            Some(product) => ProductStockRow::new(record, product),
            None => ProductStockRow::new(record, &Product::placeholder(record.product_id)),
        })
        .collect()
}

/// Lists a product's inventory with store metadata attached and the true
/// summed quantity.
pub fn enrich_inventory_by_product(
    product_id: RecordId,
    inventory: &[InventoryRecord],
    stores: &[Store],
) -> ProductInventory {
    let lookup = stores_by_id(stores);
    let records: Vec<&InventoryRecord> = inventory
        .iter()
        .filter(|r| r.product_id == product_id)
        .collect();

    let rows = records
        .iter()
        .map(|record| match lookup.get(&record.store_id) {
            Some(store) => StoreStockRow::new(record, store),
            None => StoreStockRow::new(record, &Store::placeholder(record.store_id)),
        })
        .collect();

    ProductInventory {
        rows,
        total_quantity: total_quantity(records),
    }
}

/// Joins the single `(product_id, store_id)` cell with both metadata sides.
///
/// ## Errors
/// `CoreError::InventoryRecordNotFound` when no record exists for the pair.
/// Missing product or store metadata is filled with placeholders instead.
pub fn join_single_cell(
    product_id: RecordId,
    store_id: RecordId,
    inventory: &[InventoryRecord],
    products: &[Product],
    stores: &[Store],
) -> CoreResult<InventoryCell> {
    let record = find_cell(inventory, product_id, store_id).ok_or(
        CoreError::InventoryRecordNotFound {
            product_id,
            store_id,
        },
    )?;

    let product = products
        .iter()
        .find(|p| p.id == product_id)
        .cloned()
        .unwrap_or_else(|| Product::placeholder(product_id));
    let store = stores
        .iter()
        .find(|s| s.id == store_id)
        .cloned()
        .unwrap_or_else(|| Store::placeholder(store_id));

    Ok(InventoryCell {
        inventory: record.clone(),
        product,
        store,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
