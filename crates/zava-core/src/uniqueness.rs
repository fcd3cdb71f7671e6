//! # Uniqueness Checker
//!
//! Products and stores carry a two-field business key. Keys are compared
//! after trimming surrounding whitespace and lowercasing, so `"Widget "` /
//! `"Tools"` collides with `"widget"` / `"TOOLS"`.
//!
//! Inventory records use the exact `(product_id, store_id)` pair instead;
//! see [`find_cell`].

use crate::types::{InventoryRecord, Product, Record, RecordId, Store};

/// Records with a two-field normalized business key.
pub trait UniqueKey: Record {
    /// Returns the two raw (un-normalized) key fields.
    fn unique_key(&self) -> (&str, &str);
}

impl UniqueKey for Product {
    fn unique_key(&self) -> (&str, &str) {
        (&self.name, &self.category)
    }
}

impl UniqueKey for Store {
    fn unique_key(&self) -> (&str, &str) {
        (&self.name, &self.address)
    }
}

/// Normalizes a key field: trimmed and lowercased.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Returns true if any record other than `exclude_id` has the same
/// normalized key as `(first, second)`.
///
/// ## Example
/// ```rust
/// use zava_core::uniqueness::is_duplicate;
/// use zava_core::Product;
///
/// let products = vec![Product {
///     id: 1,
///     name: "Widget ".into(),
///     category: "Tools".into(),
///     price: 2.0,
///     sku: "WID-001".into(),
///     description: String::new(),
/// }];
/// assert!(is_duplicate(&products, "widget", "TOOLS", None));
/// assert!(!is_duplicate(&products, "widget", "TOOLS", Some(1)));
/// ```
pub fn is_duplicate<T: UniqueKey>(
    records: &[T],
    first: &str,
    second: &str,
    exclude_id: Option<RecordId>,
) -> bool {
    let first = normalize(first);
    let second = normalize(second);

    records
        .iter()
        .filter(|record| exclude_id != Some(record.id()))
        .any(|record| {
            let (a, b) = record.unique_key();
            normalize(a) == first && normalize(b) == second
        })
}

/// Finds the inventory record for a `(product_id, store_id)` cell.
pub fn find_cell(
    inventory: &[InventoryRecord],
    product_id: RecordId,
    store_id: RecordId,
) -> Option<&InventoryRecord> {
    inventory.iter().find(|r| r.is_cell(product_id, store_id))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: RecordId, name: &str, category: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price: 1.0,
            sku: format!("SKU-{:03}", id),
            description: String::new(),
        }
    }

    fn store(id: RecordId, name: &str, address: &str) -> Store {
        Store {
            id,
            name: name.to_string(),
            city: "Seattle".to_string(),
            country: "USA".to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let products = vec![product(1, "Widget ", "Tools")];
        assert!(is_duplicate(&products, "widget", "TOOLS", None));
        assert!(is_duplicate(&products, "  WIDGET", " tools ", None));
    }

    #[test]
    fn test_both_fields_must_match() {
        let products = vec![product(1, "Widget", "Tools")];
        assert!(!is_duplicate(&products, "Widget", "Garden", None));
        assert!(!is_duplicate(&products, "Gadget", "Tools", None));
    }

    #[test]
    fn test_exclude_id_skips_self() {
        let products = vec![product(1, "Widget", "Tools"), product(2, "Gadget", "Tools")];
        assert!(!is_duplicate(&products, "widget", "tools", Some(1)));
        assert!(is_duplicate(&products, "gadget", "tools", Some(1)));
    }

    #[test]
    fn test_store_key_is_name_and_address() {
        let stores = vec![store(1, "Zava Downtown", "1 Pike St")];
        assert!(is_duplicate(&stores, "zava downtown", "1 PIKE ST ", None));
        // city is not part of the key
        assert!(!is_duplicate(&stores, "Zava Downtown", "2 Pike St", None));
    }

    #[test]
    fn test_empty_collection() {
        let stores: Vec<Store> = Vec::new();
        assert!(!is_duplicate(&stores, "a", "b", None));
    }

    #[test]
    fn test_find_cell() {
        let inventory = vec![
            InventoryRecord { id: 1, product_id: 1, store_id: 2, quantity: 4 },
            InventoryRecord { id: 2, product_id: 2, store_id: 1, quantity: 6 },
        ];
        assert_eq!(find_cell(&inventory, 2, 1).map(|r| r.id), Some(2));
        assert!(find_cell(&inventory, 1, 1).is_none());
    }
}
