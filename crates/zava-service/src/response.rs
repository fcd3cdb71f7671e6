//! # Responses
//!
//! Output payloads of the service operations and the envelope a transport
//! sends back to its caller.
//!
//! ## Envelope Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Ok(ProductAdded { message, product })                                  │
//! │     ──► { "success": true, "message": "...", "product": { ... } }       │
//! │                                                                         │
//! │  Err(ApiError { code, message })                                        │
//! │     ──► { "success": false, "error": "...", "code": "NOT_FOUND" }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payload fields are flattened into the envelope, so every payload must
//! serialize as a JSON object.

use serde::Serialize;

use zava_core::join::{ProductStockRow, ProductWithStock, StoreStockRow};
use zava_core::{InventoryRecord, Product, ProductField, Store, StoreField};

use crate::error::{ApiError, ErrorCode};

// =============================================================================
// Envelope
// =============================================================================

/// Structured result of one operation.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Success {
        success: bool,
        #[serde(flatten)]
        data: T,
    },
    Failure {
        success: bool,
        error: String,
        code: ErrorCode,
    },
}

impl<T: Serialize> Envelope<T> {
    /// Maps a service result into the envelope.
    ///
    /// ## Example
    /// ```rust
    /// use zava_service::{ApiError, Envelope};
    ///
    /// let result: Result<serde_json::Value, ApiError> = Err(ApiError::validation("bad"));
    /// let json = serde_json::to_value(Envelope::from_result(result)).unwrap();
    /// assert_eq!(json["success"], false);
    /// assert_eq!(json["error"], "bad");
    /// ```
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Envelope::Success { success: true, data },
            Err(err) => Envelope::Failure {
                success: false,
                error: err.message,
                code: err.code,
            },
        }
    }

    /// Returns true for the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }
}

// =============================================================================
// Product Payloads
// =============================================================================

/// Every product with its per-store stock table.
#[derive(Debug, Clone, Serialize)]
pub struct ProductList {
    pub count: usize,
    pub products: Vec<ProductWithStock>,
}

/// One product with its per-store stock table.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub product: ProductWithStock,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductAdded {
    pub message: String,
    pub product: Product,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductUpdated {
    pub message: String,
    pub product: Product,
    pub updated_fields: Vec<ProductField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductRemoved {
    pub message: String,
    pub removed_product: Product,
}

// =============================================================================
// Store Payloads
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct StoreList {
    pub count: usize,
    pub stores: Vec<Store>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreDetail {
    pub store: Store,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreAdded {
    pub message: String,
    pub store: Store,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreUpdated {
    pub message: String,
    pub store: Store,
    pub updated_fields: Vec<StoreField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreRemoved {
    pub message: String,
    pub removed_store: Store,
}

// =============================================================================
// Inventory Payloads
// =============================================================================

/// A store's inventory rows with product metadata.
///
/// `message` is only set when the listing is empty.
#[derive(Debug, Clone, Serialize)]
pub struct StoreInventory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub count: usize,
    pub inventory: Vec<ProductStockRow>,
}

/// A product's inventory rows with store metadata.
///
/// `total_quantity` is omitted when the product has no rows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInventoryList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_quantity: Option<i64>,
    pub inventory: Vec<StoreStockRow>,
}

/// A single inventory record after a create or quantity update.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryChanged {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub inventory: InventoryRecord,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Store {
        Store {
            id: 1,
            name: "Zava Downtown".to_string(),
            city: "Seattle".to_string(),
            country: "USA".to_string(),
            address: "1 Pike St".to_string(),
        }
    }

    #[test]
    fn test_success_envelope_flattens_payload() {
        let result: Result<StoreAdded, ApiError> = Ok(StoreAdded {
            message: "Store 'Zava Downtown' added successfully".to_string(),
            store: store(),
        });
        let json = serde_json::to_value(Envelope::from_result(result)).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Store 'Zava Downtown' added successfully");
        assert_eq!(json["store"]["city"], "Seattle");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_envelope() {
        let result: Result<StoreDetail, ApiError> =
            Err(ApiError::new(ErrorCode::NotFound, "Store with ID 9 not found"));
        let envelope = Envelope::from_result(result);
        assert!(!envelope.is_success());

        let json = serde_json::to_value(envelope).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Store with ID 9 not found");
        assert_eq!(json["code"], "NOT_FOUND");
        assert!(json.get("store").is_none());
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let empty = ProductInventoryList {
            message: Some("No inventory records found for product ID 4".to_string()),
            count: 0,
            total_quantity: None,
            inventory: Vec::new(),
        };
        let json = serde_json::to_value(&empty).unwrap();
        assert!(json.get("totalQuantity").is_none());
        assert_eq!(json["count"], 0);

        let updated = InventoryChanged {
            message: None,
            inventory: InventoryRecord {
                id: 1,
                product_id: 2,
                store_id: 3,
                quantity: 5,
            },
        };
        let json = serde_json::to_value(&updated).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["inventory"]["productId"], 2);
    }

    #[test]
    fn test_updated_fields_serialize_as_names() {
        let updated = StoreUpdated {
            message: String::new(),
            store: store(),
            updated_fields: vec![StoreField::Name, StoreField::Address],
        };
        let json = serde_json::to_value(&updated).unwrap();
        assert_eq!(json["updated_fields"], serde_json::json!(["name", "address"]));
    }
}
