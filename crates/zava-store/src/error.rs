//! # Storage Error Types
//!
//! Error types for collection load/save.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the collection name                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (zava-service) ← Generic "An error occurred" failure         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing collection is NOT an error: it loads as an empty sequence.

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the underlying storage failed.
    ///
    /// ## When This Occurs
    /// - Permission denied on the data directory
    /// - Disk full while writing the temp file
    /// - Rename of the temp file failed
    #[error("I/O error on {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Stored bytes are not a valid collection.
    #[error("Failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Records could not be encoded.
    #[error("Failed to encode {name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory backend's lock was poisoned by a panicking writer.
    #[error("Storage lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl StoreError {
    /// Creates an Io error for a storage key or path.
    pub fn io(name: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            name: name.into(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
