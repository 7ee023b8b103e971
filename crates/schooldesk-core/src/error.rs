//! Storage and test-store error types.
//!
//! `StorageError` is defined here, next to the `KeyValueStore` trait, so
//! backends in `schooldesk-storage` and the test store share one error
//! vocabulary without string matching.

use thiserror::Error;

/// Errors raised by a key-value storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be used by this backend (e.g. contains a path separator).
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Reading or writing the value behind a key failed.
    #[error("I/O error on key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Any other backend failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors raised by the practice-test store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The text stored under the key is not a valid practice-test list.
    #[error("stored practice tests under {key:?} are corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory collection could not be serialized.
    #[error("failed to serialize practice tests: {0}")]
    Serialize(#[source] serde_json::Error),

    /// `update_test` was called with an id that is not in the collection.
    #[error("practice test not found: {0}")]
    NotFound(String),

    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// Returns `true` if the error left both memory and storage untouched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
