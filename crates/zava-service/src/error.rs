//! # API Error Type
//!
//! Unified error type for the entity services.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Zava Inventory                         │
//! │                                                                         │
//! │  Caller (transport)           Rust Backend                              │
//! │  ──────────────────           ────────────                              │
//! │                                                                         │
//! │  update_store(3, patch)                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Service Method                                                  │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Storage fault? ──── StoreError::Io(..) ───────────┐            │  │
//! │  │         │            (logged, generic message)      │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Rule violated? ──── CoreError::NotFound ──────── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Envelope::from_result(..)                                              │
//! │    { "success": false, "error": "Store with ID 3 not found",            │
//! │      "code": "NOT_FOUND" }                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;
use zava_core::{CoreError, ValidationError};
use zava_store::StoreError;

/// Error returned from every service operation.
///
/// ## Serialization
/// ```json
/// {
///   "code": "DUPLICATE",
///   "message": "A store with the name 'Zava Downtown' and address '1 Pike St' already exists."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message, shown as-is
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input failed a field rule
    ValidationError,

    /// Business key already taken
    Duplicate,

    /// Record with the requested id (or id pair) does not exist
    NotFound,

    /// A collection the operation reads from is empty
    DependencyMissing,

    /// Update called without any field
    NoFieldsProvided,

    /// Loading or saving a collection failed
    StorageError,
}

/// Result type for service operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates the generic failure used for unexpected internal faults.
    pub fn internal(detail: impl fmt::Display) -> Self {
        ApiError::new(ErrorCode::StorageError, format!("An error occurred: {}", detail))
    }
}

/// Converts domain errors to API errors. Messages pass through unchanged,
/// except for id exhaustion, which is reported as the generic failure.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if let CoreError::IdsExhausted { .. } = err {
            tracing::error!(error = %err, "Id allocation failed");
            return ApiError::internal(err);
        }
        let code = match &err {
            CoreError::DuplicateProduct { .. }
            | CoreError::DuplicateStore { .. }
            | CoreError::DuplicateInventory { .. } => ErrorCode::Duplicate,
            CoreError::NotFound { .. } | CoreError::InventoryRecordNotFound { .. } => ErrorCode::NotFound,
            CoreError::DependencyMissing { .. } => ErrorCode::DependencyMissing,
            CoreError::NoFieldsProvided => ErrorCode::NoFieldsProvided,
            CoreError::Validation(_) => ErrorCode::ValidationError,
            CoreError::IdsExhausted { .. } => ErrorCode::StorageError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts storage faults to the generic failure, logging the detail.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "Storage operation failed");
        ApiError::internal(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_codes() {
        let err: ApiError = CoreError::not_found("Product", 7).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product with ID 7 not found");

        let err: ApiError = CoreError::DuplicateInventory {
            product_id: 1,
            store_id: 2,
        }
        .into();
        assert_eq!(err.code, ErrorCode::Duplicate);

        let err: ApiError = CoreError::NoFieldsProvided.into();
        assert_eq!(err.code, ErrorCode::NoFieldsProvided);
        assert_eq!(err.message, "No fields provided to update");

        let err: ApiError = CoreError::dependency_missing("inventory").into();
        assert_eq!(err.code, ErrorCode::DependencyMissing);

        let err: ApiError = CoreError::IdsExhausted { max: i64::MAX }.into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(
            err.message,
            format!("An error occurred: No id available after {}", i64::MAX)
        );
    }

    #[test]
    fn test_validation_error_passes_message() {
        let err: ApiError = ValidationError::InvalidQuantity { value: -3 }.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Quantity is required and must be a non-negative integer.");
    }

    #[test]
    fn test_store_error_is_generic_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ApiError = StoreError::io("stores.json", io).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.starts_with("An error occurred: "));
        assert!(err.message.contains("stores.json"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::DependencyMissing).unwrap();
        assert_eq!(json, "\"DEPENDENCY_MISSING\"");
        let json = serde_json::to_string(&ErrorCode::NoFieldsProvided).unwrap();
        assert_eq!(json, "\"NO_FIELDS_PROVIDED\"");
    }
}
