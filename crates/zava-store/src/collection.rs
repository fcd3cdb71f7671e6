//! # Collections
//!
//! The three named tables and the binding from record type to table.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use zava_core::{InventoryRecord, Product, Record, Store};

/// A named, ordered set of records persisted as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Stores,
    Inventory,
}

impl Collection {
    /// Short name used in messages ("products", "stores", "inventory").
    pub const fn label(&self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Stores => "stores",
            Collection::Inventory => "inventory",
        }
    }

    /// Storage key handed to the backend.
    pub const fn key(&self) -> &'static str {
        match self {
            Collection::Products => "products.json",
            Collection::Stores => "stores.json",
            Collection::Inventory => "inventory.json",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A record type that lives in exactly one collection.
pub trait Stored: Record + Serialize + DeserializeOwned {
    const COLLECTION: Collection;
}

impl Stored for Product {
    const COLLECTION: Collection = Collection::Products;
}

impl Stored for Store {
    const COLLECTION: Collection = Collection::Stores;
}

impl Stored for InventoryRecord {
    const COLLECTION: Collection = Collection::Inventory;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_keys() {
        assert_eq!(Collection::Products.key(), "products.json");
        assert_eq!(Collection::Stores.key(), "stores.json");
        assert_eq!(Collection::Inventory.key(), "inventory.json");
        assert_eq!(Collection::Inventory.to_string(), "inventory");
    }

    #[test]
    fn test_record_binding() {
        assert_eq!(<Product as Stored>::COLLECTION, Collection::Products);
        assert_eq!(<InventoryRecord as Stored>::COLLECTION, Collection::Inventory);
    }
}
