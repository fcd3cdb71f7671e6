//! # Inventory Service
//!
//! Stock records per `(product, store)` cell and the joined views over them.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list_by_store(s)         inventory ⋈ products   Σ == 0 ⇒ empty listing │
//! │  list_by_product(p)       inventory ⋈ stores     true Σ reported        │
//! │  get_by_product_and_store inventory ⋈ products ⋈ stores, one cell       │
//! │  update_quantity          set quantity of an existing cell              │
//! │  create_record            new cell, pair must be free                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Product and store ids on a record are not checked against their
//! collections at write time. Dangling ids surface as placeholders when read.

use tracing::{debug, info, warn};

use zava_core::identity::next_id;
use zava_core::join::{enrich_inventory_by_product, enrich_inventory_by_store, join_single_cell, InventoryCell};
use zava_core::uniqueness::find_cell;
use zava_core::validation::validate_quantity;
use zava_core::{CoreError, InventoryRecord, RecordId};
use zava_store::Datastore;

use crate::error::ApiResult;
use crate::response::{InventoryChanged, ProductInventoryList, StoreInventory};

/// Inventory operations over a datastore.
#[derive(Debug, Clone)]
pub struct InventoryService {
    db: Datastore,
}

impl InventoryService {
    pub fn new(db: Datastore) -> Self {
        InventoryService { db }
    }

    /// Lists a store's inventory with product metadata.
    ///
    /// A store without rows, or whose rows all hold zero, yields an empty
    /// success rather than an error.
    pub fn list_by_store(&self, store_id: RecordId) -> ApiResult<StoreInventory> {
        let inventory = self.db.inventory().load()?;
        let products = self.db.products().load()?;

        let rows = enrich_inventory_by_store(store_id, &inventory, &products);
        if rows.is_empty() {
            warn!(store_id, "No inventory found for store");
            return Ok(StoreInventory {
                message: Some(format!("No inventory found for store ID {}", store_id)),
                count: 0,
                inventory: rows,
            });
        }

        info!(store_id, count = rows.len(), "Inventory listed for store");
        Ok(StoreInventory {
            message: None,
            count: rows.len(),
            inventory: rows,
        })
    }

    /// Lists a product's inventory with store metadata and the summed quantity.
    ///
    /// ## Errors
    /// `DEPENDENCY_MISSING` if the inventory or stores collection is empty,
    /// checked in that order.
    pub fn list_by_product(&self, product_id: RecordId) -> ApiResult<ProductInventoryList> {
        let inventory = self.db.inventory().load()?;
        let stores = self.db.stores().load()?;

        require_collection(!inventory.is_empty(), "inventory")?;
        require_collection(!stores.is_empty(), "stores")?;

        let view = enrich_inventory_by_product(product_id, &inventory, &stores);
        if view.rows.is_empty() {
            warn!(product_id, "No inventory records found for product");
            return Ok(ProductInventoryList {
                message: Some(format!("No inventory records found for product ID {}", product_id)),
                count: 0,
                total_quantity: None,
                inventory: Vec::new(),
            });
        }

        info!(
            product_id,
            count = view.rows.len(),
            total_quantity = view.total_quantity,
            "Inventory listed for product"
        );
        Ok(ProductInventoryList {
            message: None,
            count: view.rows.len(),
            total_quantity: Some(view.total_quantity),
            inventory: view.rows,
        })
    }

    /// Gets one `(product, store)` cell with both sides attached.
    ///
    /// ## Errors
    /// - `DEPENDENCY_MISSING` if inventory, products or stores is empty
    ///   (checked in that order)
    /// - `NOT_FOUND` if no record exists for the pair
    pub fn get_by_product_and_store(
        &self,
        product_id: RecordId,
        store_id: RecordId,
    ) -> ApiResult<InventoryCell> {
        let inventory = self.db.inventory().load()?;
        let products = self.db.products().load()?;
        let stores = self.db.stores().load()?;

        require_collection(!inventory.is_empty(), "inventory")?;
        require_collection(!products.is_empty(), "products")?;
        require_collection(!stores.is_empty(), "stores")?;

        let cell = join_single_cell(product_id, store_id, &inventory, &products, &stores).map_err(|e| {
            warn!(product_id, store_id, error = %e, "Inventory lookup failed");
            e
        })?;

        debug!(product_id, store_id, quantity = cell.inventory.quantity, "Inventory record retrieved");
        Ok(cell)
    }

    /// Sets the quantity of an existing cell.
    ///
    /// ## Check Order
    /// 1. Quantity is non-negative
    /// 2. Inventory collection is not empty
    /// 3. A record exists for the pair
    pub fn update_quantity(
        &self,
        product_id: RecordId,
        store_id: RecordId,
        quantity: i64,
    ) -> ApiResult<InventoryChanged> {
        if let Err(e) = validate_quantity(quantity) {
            warn!(product_id, store_id, quantity, "Failed to update inventory: invalid quantity");
            return Err(e.into());
        }

        let repo = self.db.inventory();
        let mut inventory = repo.load()?;
        require_collection(!inventory.is_empty(), "inventory")?;

        let Some(record) = inventory.iter_mut().find(|r| r.is_cell(product_id, store_id)) else {
            warn!(product_id, store_id, "Failed to update inventory: no record");
            return Err(CoreError::InventoryRecordNotFound {
                product_id,
                store_id,
            }
            .into());
        };
        record.quantity = quantity;
        let record = record.clone();
        repo.save(&inventory)?;

        info!(product_id, store_id, quantity, "Inventory updated");
        Ok(InventoryChanged {
            message: None,
            inventory: record,
        })
    }

    /// Creates the record for a free `(product, store)` pair.
    ///
    /// ## Check Order
    /// 1. Quantity is non-negative
    /// 2. No record exists for the pair
    pub fn create_record(
        &self,
        product_id: RecordId,
        store_id: RecordId,
        quantity: i64,
    ) -> ApiResult<InventoryChanged> {
        if let Err(e) = validate_quantity(quantity) {
            warn!(product_id, store_id, quantity, "Failed to create inventory: invalid quantity");
            return Err(e.into());
        }

        let repo = self.db.inventory();
        let mut inventory = repo.load()?;

        if find_cell(&inventory, product_id, store_id).is_some() {
            warn!(product_id, store_id, "Inventory record already exists");
            return Err(CoreError::DuplicateInventory {
                product_id,
                store_id,
            }
            .into());
        }

        let record = InventoryRecord {
            id: next_id(&inventory)?,
            product_id,
            store_id,
            quantity,
        };
        inventory.push(record.clone());
        repo.save(&inventory)?;

        info!(id = record.id, product_id, store_id, quantity, "Inventory record created");
        Ok(InventoryChanged {
            message: Some(format!(
                "Inventory record created for product ID {} at store ID {}",
                product_id, store_id
            )),
            inventory: record,
        })
    }
}

/// Fails with `DependencyMissing` unless the named collection has records.
fn require_collection(present: bool, collection: &'static str) -> Result<(), CoreError> {
    if present {
        return Ok(());
    }
    warn!(collection, "Required collection is empty");
    Err(CoreError::dependency_missing(collection))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use zava_core::{Product, Store};

    fn seeded() -> (InventoryService, Datastore) {
        let db = Datastore::in_memory();
        db.products()
            .save(&[Product {
                id: 1,
                name: "Blue Pen".to_string(),
                category: "Stationery".to_string(),
                price: 1.5,
                sku: "BP-001".to_string(),
                description: String::new(),
            }])
            .unwrap();
        db.stores()
            .save(&[
                Store {
                    id: 1,
                    name: "Downtown".to_string(),
                    city: "Seattle".to_string(),
                    country: "USA".to_string(),
                    address: "1 Pike St".to_string(),
                },
                Store {
                    id: 2,
                    name: "Airport".to_string(),
                    city: "SeaTac".to_string(),
                    country: "USA".to_string(),
                    address: "Terminal A".to_string(),
                },
            ])
            .unwrap();
        (InventoryService::new(db.clone()), db)
    }

    #[test]
    fn test_create_record() {
        let (inventory, db) = seeded();

        let created = inventory.create_record(1, 1, 10).unwrap();
        assert_eq!(created.inventory.id, 1);
        assert_eq!(
            created.message.as_deref(),
            Some("Inventory record created for product ID 1 at store ID 1")
        );

        // foreign ids are not checked
        let created = inventory.create_record(99, 42, 0).unwrap();
        assert_eq!(created.inventory.id, 2);
        assert_eq!(db.inventory().load().unwrap().len(), 2);
    }

    #[test]
    fn test_create_record_checks() {
        let (inventory, _) = seeded();
        inventory.create_record(1, 1, 10).unwrap();

        let err = inventory.create_record(1, 1, 5).unwrap_err();
        assert_eq!(err.code, ErrorCode::Duplicate);
        assert_eq!(
            err.message,
            "Inventory record already exists for product ID 1 at store ID 1"
        );

        // quantity is checked before the pair
        let err = inventory.create_record(1, 1, -1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_list_by_store() {
        let (inventory, _) = seeded();
        inventory.create_record(1, 1, 10).unwrap();
        inventory.create_record(7, 1, 2).unwrap();

        let listing = inventory.list_by_store(1).unwrap();
        assert_eq!(listing.count, 2);
        assert!(listing.message.is_none());
        assert_eq!(listing.inventory[0].product_name, "Blue Pen");
        assert_eq!(listing.inventory[0].product_sku, "BP-001");
        assert_eq!(listing.inventory[1].product_name, "Unknown Product (ID: 7)");
    }

    #[test]
    fn test_list_by_store_zero_collapse() {
        let (inventory, _) = seeded();
        inventory.create_record(1, 2, 0).unwrap();

        let listing = inventory.list_by_store(2).unwrap();
        assert_eq!(listing.count, 0);
        assert!(listing.inventory.is_empty());
        assert_eq!(listing.message.as_deref(), Some("No inventory found for store ID 2"));

        let listing = inventory.list_by_store(3).unwrap();
        assert_eq!(listing.count, 0);
    }

    #[test]
    fn test_list_by_store_with_huge_quantities() {
        let (inventory, _) = seeded();
        inventory.create_record(1, 1, i64::MAX).unwrap();
        inventory.create_record(2, 1, i64::MAX).unwrap();
        inventory.create_record(3, 1, 2).unwrap();

        let listing = inventory.list_by_store(1).unwrap();
        assert_eq!(listing.count, 3);
        assert!(listing.message.is_none());

        inventory.create_record(1, 2, i64::MAX).unwrap();
        let listing = inventory.list_by_product(1).unwrap();
        assert_eq!(listing.total_quantity, Some(i64::MAX));
    }

    #[test]
    fn test_create_record_when_ids_exhausted() {
        let (inventory, db) = seeded();
        db.inventory()
            .save(&[InventoryRecord {
                id: i64::MAX,
                product_id: 1,
                store_id: 1,
                quantity: 1,
            }])
            .unwrap();

        let err = inventory.create_record(1, 2, 5).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.starts_with("An error occurred: "));
        assert_eq!(db.inventory().load().unwrap().len(), 1);
    }

    #[test]
    fn test_list_by_product() {
        let (inventory, _) = seeded();

        let err = inventory.list_by_product(1).unwrap_err();
        assert_eq!(err.code, ErrorCode::DependencyMissing);
        assert_eq!(
            err.message,
            "No inventory data available (inventory collection missing or empty)"
        );

        inventory.create_record(1, 1, 0).unwrap();
        inventory.create_record(1, 2, 0).unwrap();
        let listing = inventory.list_by_product(1).unwrap();
        assert_eq!(listing.count, 2);
        // true total, no zero collapse in this direction
        assert_eq!(listing.total_quantity, Some(0));
        assert_eq!(listing.inventory[1].store_name, "Airport");

        let listing = inventory.list_by_product(5).unwrap();
        assert_eq!(listing.count, 0);
        assert_eq!(listing.total_quantity, None);
        assert_eq!(
            listing.message.as_deref(),
            Some("No inventory records found for product ID 5")
        );
    }

    #[test]
    fn test_list_by_product_requires_stores() {
        let (inventory, db) = seeded();
        inventory.create_record(1, 1, 4).unwrap();
        db.stores().save(&[]).unwrap();

        let err = inventory.list_by_product(1).unwrap_err();
        assert_eq!(
            err.message,
            "No stores data available (stores collection missing or empty)"
        );
    }

    #[test]
    fn test_get_by_product_and_store() {
        let (inventory, db) = seeded();
        inventory.create_record(1, 2, 8).unwrap();

        let cell = inventory.get_by_product_and_store(1, 2).unwrap();
        assert_eq!(cell.inventory.quantity, 8);
        assert_eq!(cell.product.sku, "BP-001");
        assert_eq!(cell.store.name, "Airport");

        let err = inventory.get_by_product_and_store(1, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(
            err.message,
            "No inventory record found for product ID 1 at store ID 1"
        );

        db.products().save(&[]).unwrap();
        let err = inventory.get_by_product_and_store(1, 2).unwrap_err();
        assert_eq!(
            err.message,
            "No products data available (products collection missing or empty)"
        );
    }

    #[test]
    fn test_update_quantity() {
        let (inventory, db) = seeded();

        let err = inventory.update_quantity(1, 1, 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::DependencyMissing);

        inventory.create_record(1, 1, 10).unwrap();
        let updated = inventory.update_quantity(1, 1, 3).unwrap();
        assert_eq!(updated.inventory.quantity, 3);
        assert!(updated.message.is_none());
        assert_eq!(db.inventory().load().unwrap()[0].quantity, 3);

        let err = inventory.update_quantity(1, 2, 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = inventory.update_quantity(1, 1, -5).unwrap_err();
        assert_eq!(err.message, "Quantity is required and must be a non-negative integer.");
        assert_eq!(db.inventory().load().unwrap()[0].quantity, 3);
    }
}
