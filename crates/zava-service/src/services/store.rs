//! # Store Service
//!
//! Store operations: list, get, add, update, remove.
//!
//! Removing a store keeps its inventory rows; the by-product listing then
//! reports them against an "Unknown Store" placeholder.

use tracing::{debug, info, warn};

use zava_core::identity::next_id;
use zava_core::uniqueness::is_duplicate;
use zava_core::validation::{validate_new_store, validate_store_patch};
use zava_core::{join_fields, CoreError, NewStore, RecordId, Store, StoreField, StorePatch};
use zava_store::Datastore;

use crate::error::ApiResult;
use crate::response::{StoreAdded, StoreDetail, StoreList, StoreRemoved, StoreUpdated};

/// Store operations over a datastore.
#[derive(Debug, Clone)]
pub struct StoreService {
    db: Datastore,
}

impl StoreService {
    pub fn new(db: Datastore) -> Self {
        StoreService { db }
    }

    pub fn list_stores(&self) -> ApiResult<StoreList> {
        let stores = self.db.stores().load()?;
        info!(count = stores.len(), "Stores listed");
        Ok(StoreList {
            count: stores.len(),
            stores,
        })
    }

    pub fn get_store(&self, id: RecordId) -> ApiResult<StoreDetail> {
        let stores = self.db.stores().load()?;

        let Some(store) = stores.into_iter().find(|s| s.id == id) else {
            warn!(id, "Store not found");
            return Err(CoreError::not_found("Store", id).into());
        };

        debug!(id, "Store retrieved");
        Ok(StoreDetail { store })
    }

    /// Adds a store.
    ///
    /// ## Check Order
    /// 1. Duplicate `(name, address)`
    /// 2. Name, city, country, address
    pub fn add_store(&self, input: NewStore) -> ApiResult<StoreAdded> {
        let repo = self.db.stores();
        let mut stores = repo.load()?;

        if is_duplicate(&stores, &input.name, &input.address, None) {
            warn!(name = %input.name, address = %input.address, "Duplicate store rejected");
            return Err(CoreError::DuplicateStore {
                name: input.name,
                address: input.address,
            }
            .into());
        }

        if let Err(e) = validate_new_store(&input) {
            warn!(error = %e, "Failed to add store");
            return Err(e.into());
        }

        let store = Store {
            id: next_id(&stores)?,
            name: input.name,
            city: input.city,
            country: input.country,
            address: input.address,
        };
        stores.push(store.clone());
        repo.save(&stores)?;

        info!(id = store.id, name = %store.name, "Store added");
        Ok(StoreAdded {
            message: format!("Store '{}' added successfully", store.name),
            store,
        })
    }

    /// Applies a partial update to a store.
    ///
    /// ## Check Order
    /// 1. Store exists
    /// 2. Duplicate merged `(name, address)` if name or address supplied
    /// 3. Supplied fields (name, city, country, address)
    /// 4. At least one field supplied
    pub fn update_store(&self, id: RecordId, patch: StorePatch) -> ApiResult<StoreUpdated> {
        let repo = self.db.stores();
        let mut stores = repo.load()?;

        let Some(index) = stores.iter().position(|s| s.id == id) else {
            warn!(id, "Failed to update store: not found");
            return Err(CoreError::not_found("Store", id).into());
        };

        if patch.touches_key() {
            let current = &stores[index];
            let name = patch.name.as_deref().unwrap_or(&current.name);
            let address = patch.address.as_deref().unwrap_or(&current.address);
            if is_duplicate(&stores, name, address, Some(id)) {
                warn!(id, name = %name, address = %address, "Duplicate store rejected on update");
                return Err(CoreError::DuplicateStore {
                    name: name.to_string(),
                    address: address.to_string(),
                }
                .into());
            }
        }

        if let Err(e) = validate_store_patch(&patch) {
            warn!(id, error = %e, "Failed to update store");
            return Err(e.into());
        }

        if patch.is_empty() {
            warn!(id, "Failed to update store: no fields provided");
            return Err(CoreError::NoFieldsProvided.into());
        }

        let store = &mut stores[index];
        let mut updated_fields = Vec::new();
        if let Some(name) = patch.name {
            store.name = name;
            updated_fields.push(StoreField::Name);
        }
        if let Some(city) = patch.city {
            store.city = city;
            updated_fields.push(StoreField::City);
        }
        if let Some(country) = patch.country {
            store.country = country;
            updated_fields.push(StoreField::Country);
        }
        if let Some(address) = patch.address {
            store.address = address;
            updated_fields.push(StoreField::Address);
        }
        let store = store.clone();
        repo.save(&stores)?;

        let fields = join_fields(&updated_fields);
        info!(id, fields = %fields, "Store updated");
        Ok(StoreUpdated {
            message: format!("Store ID {} updated successfully. Updated fields: {}", id, fields),
            store,
            updated_fields,
        })
    }

    /// Removes a store. Inventory rows that reference it are kept.
    pub fn remove_store(&self, id: RecordId) -> ApiResult<StoreRemoved> {
        let repo = self.db.stores();
        let mut stores = repo.load()?;

        if stores.is_empty() {
            warn!(id, "Failed to remove store: stores collection is empty");
            return Err(CoreError::dependency_missing("stores").into());
        }

        let Some(index) = stores.iter().position(|s| s.id == id) else {
            warn!(id, "Failed to remove store: not found");
            return Err(CoreError::not_found("Store", id).into());
        };

        let removed = stores.remove(index);
        repo.save(&stores)?;

        info!(id, name = %removed.name, "Store removed");
        Ok(StoreRemoved {
            message: format!("Store '{}' (ID: {}) removed successfully", removed.name, id),
            removed_store: removed,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
