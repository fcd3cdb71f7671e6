//! # Product Service
//!
//! Catalogue operations: list, get, add, update, remove.
//!
//! ## Add Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    add_product("Blue Pen", "Stationery", 1.50)          │
//! │                                                                         │
//! │  load products                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  (name, category) taken? ──► yes ──► DUPLICATE                          │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  name, category, price valid? ──► no ──► VALIDATION_ERROR               │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  id = max + 1, sku = "BP-001"                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  append + save products                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Removing a product never touches the inventory collection; rows that
//! point at a removed product show up as "Unknown Product" in the joins.

use tracing::{debug, info, warn};

use zava_core::identity::{generate_sku, next_id};
use zava_core::join::with_inventory_per_store;
use zava_core::uniqueness::is_duplicate;
use zava_core::validation::{validate_new_product, validate_product_patch};
use zava_core::{join_fields, CoreError, NewProduct, Product, ProductField, ProductPatch, RecordId};
use zava_store::Datastore;

use crate::error::ApiResult;
use crate::response::{ProductAdded, ProductDetail, ProductList, ProductRemoved, ProductUpdated};

/// Product operations over a datastore.
#[derive(Debug, Clone)]
pub struct ProductService {
    db: Datastore,
}

impl ProductService {
    pub fn new(db: Datastore) -> Self {
        ProductService { db }
    }

    /// Lists every product with its per-store stock.
    pub fn list_products(&self) -> ApiResult<ProductList> {
        let products = self.db.products().load()?;
        let stores = self.db.stores().load()?;
        let inventory = self.db.inventory().load()?;

        let products: Vec<_> = products
            .into_iter()
            .map(|product| with_inventory_per_store(product, &stores, &inventory))
            .collect();

        info!(count = products.len(), "Products listed");
        Ok(ProductList {
            count: products.len(),
            products,
        })
    }

    /// Gets one product with its per-store stock.
    pub fn get_product(&self, id: RecordId) -> ApiResult<ProductDetail> {
        let products = self.db.products().load()?;

        let Some(product) = products.into_iter().find(|p| p.id == id) else {
            warn!(id, "Product not found");
            return Err(CoreError::not_found("Product", id).into());
        };

        let stores = self.db.stores().load()?;
        let inventory = self.db.inventory().load()?;

        debug!(id, "Product retrieved");
        Ok(ProductDetail {
            product: with_inventory_per_store(product, &stores, &inventory),
        })
    }

    /// Adds a product, assigning its id and SKU.
    ///
    /// ## Check Order
    /// 1. Duplicate `(name, category)`
    /// 2. Name, category, price
    pub fn add_product(&self, input: NewProduct) -> ApiResult<ProductAdded> {
        let repo = self.db.products();
        let mut products = repo.load()?;

        if is_duplicate(&products, &input.name, &input.category, None) {
            warn!(name = %input.name, category = %input.category, "Duplicate product rejected");
            return Err(CoreError::DuplicateProduct {
                name: input.name,
                category: input.category,
            }
            .into());
        }

        if let Err(e) = validate_new_product(&input) {
            warn!(error = %e, "Failed to add product");
            return Err(e.into());
        }

        let id = next_id(&products)?;
        let product = Product {
            id,
            sku: generate_sku(&input.name, id),
            name: input.name,
            category: input.category,
            price: input.price,
            description: input.description,
        };
        products.push(product.clone());
        repo.save(&products)?;

        info!(id, sku = %product.sku, name = %product.name, "Product added");
        Ok(ProductAdded {
            message: format!(
                "Product '{}' added successfully with SKU {}",
                product.name, product.sku
            ),
            product,
        })
    }

    /// Applies a partial update to a product.
    ///
    /// ## Check Order
    /// 1. Duplicate merged `(name, category)`, only if the product exists and
    ///    the patch supplies name or category
    /// 2. Product exists
    /// 3. Supplied fields (name, category, price)
    /// 4. At least one field supplied
    ///
    /// The SKU is left untouched even when the name changes.
    pub fn update_product(&self, id: RecordId, patch: ProductPatch) -> ApiResult<ProductUpdated> {
        let repo = self.db.products();
        let mut products = repo.load()?;
        let position = products.iter().position(|p| p.id == id);

        if let Some(index) = position.filter(|_| patch.touches_key()) {
            let current = &products[index];
            let name = patch.name.as_deref().unwrap_or(&current.name);
            let category = patch.category.as_deref().unwrap_or(&current.category);
            if is_duplicate(&products, name, category, Some(id)) {
                warn!(id, name = %name, category = %category, "Duplicate product rejected on update");
                return Err(CoreError::DuplicateProduct {
                    name: name.to_string(),
                    category: category.to_string(),
                }
                .into());
            }
        }

        let Some(index) = position else {
            warn!(id, "Failed to update product: not found");
            return Err(CoreError::not_found("Product", id).into());
        };

        if let Err(e) = validate_product_patch(&patch) {
            warn!(id, error = %e, "Failed to update product");
            return Err(e.into());
        }

        if patch.is_empty() {
            warn!(id, "Failed to update product: no fields provided");
            return Err(CoreError::NoFieldsProvided.into());
        }

        let product = &mut products[index];
        let mut updated_fields = Vec::new();
        if let Some(name) = patch.name {
            product.name = name;
            updated_fields.push(ProductField::Name);
        }
        if let Some(category) = patch.category {
            product.category = category;
            updated_fields.push(ProductField::Category);
        }
        if let Some(price) = patch.price {
            product.price = price;
            updated_fields.push(ProductField::Price);
        }
        if let Some(description) = patch.description {
            product.description = description;
            updated_fields.push(ProductField::Description);
        }
        let product = product.clone();
        repo.save(&products)?;

        let fields = join_fields(&updated_fields);
        info!(id, fields = %fields, "Product updated");
        Ok(ProductUpdated {
            message: format!("Product ID {} updated successfully. Updated fields: {}", id, fields),
            product,
            updated_fields,
        })
    }

    /// Removes a product. Its inventory records are kept.
    pub fn remove_product(&self, id: RecordId) -> ApiResult<ProductRemoved> {
        let repo = self.db.products();
        let mut products = repo.load()?;

        let Some(index) = products.iter().position(|p| p.id == id) else {
            warn!(id, "Failed to remove product: not found");
            return Err(CoreError::not_found("Product", id).into());
        };

        let removed = products.remove(index);
        repo.save(&products)?;

        info!(id, name = %removed.name, "Product removed");
        Ok(ProductRemoved {
            message: format!("Product '{}' (ID: {}) removed successfully", removed.name, id),
            removed_product: removed,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
