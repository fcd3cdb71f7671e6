//! # Validation Module
//!
//! Field rules applied by the entity services before any mutation.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field                    Create                 Patch (if supplied)    │
//! │  ───────────────────────  ─────────────────────  ────────────────────── │
//! │  product name/category    non-empty              non-empty              │
//! │  product price            finite, >= 0           finite, >= 0           │
//! │  product description      any                    any                    │
//! │  store name/city/         non-empty              non-empty              │
//! │    country/address                                                      │
//! │  inventory quantity       >= 0                   >= 0                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Whitespace-only text is accepted; only the empty string is rejected.
//! Uniqueness is checked separately (see [`crate::uniqueness`]) and runs first.

use crate::error::ValidationError;
use crate::types::{NewProduct, NewStore, ProductPatch, StorePatch};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const PRODUCT: &str = "Product";
const STORE: &str = "Store";

// =============================================================================
// Field Validators
// =============================================================================

/// Rejects an empty required field on create.
pub fn validate_required(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required { entity, field });
    }
    Ok(())
}

/// Rejects an empty value supplied in a patch.
pub fn validate_patch_text(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Empty { entity, field });
    }
    Ok(())
}

/// Validates a create-time product price.
///
/// ## Example
/// ```rust
/// use zava_core::validation::validate_price;
///
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(1.5).is_ok());
/// assert!(validate_price(-0.01).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    check_price(price, "is required and must be")
}

/// Validates a price supplied in a patch.
pub fn validate_patch_price(price: f64) -> ValidationResult<()> {
    check_price(price, "must be")
}

fn check_price(price: f64, requirement: &'static str) -> ValidationResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice {
            entity: PRODUCT,
            requirement,
        });
    }
    Ok(())
}

/// Validates a stock quantity. Zero is allowed.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::InvalidQuantity { value: quantity });
    }
    Ok(())
}

// =============================================================================
// Input Validators
// =============================================================================

/// Validates a product create input: name, then category, then price.
pub fn validate_new_product(input: &NewProduct) -> ValidationResult<()> {
    validate_required(PRODUCT, "name", &input.name)?;
    validate_required(PRODUCT, "category", &input.category)?;
    validate_price(input.price)
}

/// Validates a store create input: name, city, country, address.
pub fn validate_new_store(input: &NewStore) -> ValidationResult<()> {
    validate_required(STORE, "name", &input.name)?;
    validate_required(STORE, "city", &input.city)?;
    validate_required(STORE, "country", &input.country)?;
    validate_required(STORE, "address", &input.address)
}

/// Validates the supplied fields of a product patch: name, category, price.
///
/// Fields left as `None` are skipped; the description accepts any string.
pub fn validate_product_patch(patch: &ProductPatch) -> ValidationResult<()> {
    if let Some(name) = &patch.name {
        validate_patch_text(PRODUCT, "name", name)?;
    }
    if let Some(category) = &patch.category {
        validate_patch_text(PRODUCT, "category", category)?;
    }
    if let Some(price) = patch.price {
        validate_patch_price(price)?;
    }
    Ok(())
}

/// Validates the supplied fields of a store patch in field order.
pub fn validate_store_patch(patch: &StorePatch) -> ValidationResult<()> {
    let fields = [
        ("name", &patch.name),
        ("city", &patch.city),
        ("country", &patch.country),
        ("address", &patch.address),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            validate_patch_text(STORE, field, value)?;
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
