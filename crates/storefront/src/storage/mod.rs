//! Durable local key-value storage.
//!
//! Stores persist their state as strings under fixed keys (see [`keys`]).
//! Reads happen once when a store is initialized; writes happen on every
//! mutation, and clearing a store deletes its key. Backends are synchronous
//! and best-effort: callers log failures and keep their in-memory state
//! authoritative.

mod file;
mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Fixed storage keys.
pub mod keys {
    /// JSON array of cart entries.
    pub const CART: &str = "cart";
    /// JSON array of product ids.
    pub const WISHLIST: &str = "wishlist";
    /// Raw theme name (`light` or `dark`).
    pub const THEME: &str = "theme";
}

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error on key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Value could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An in-memory lock was poisoned by a panicking writer.
    #[error("Storage lock poisoned")]
    Poisoned,

    /// Key contains characters that are not allowed.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// A string-valued key-value store.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a storage backend.
pub type SharedStorage = Arc<dyn KeyValueStorage>;

/// Validate a key for backends that map keys onto file names.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Load and decode a JSON value.
///
/// Missing keys, unreadable storage and malformed JSON all yield `None`;
/// the latter two are logged.
pub(crate) fn load_json<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read persisted state");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding malformed persisted state");
            None
        }
    }
}

/// Encode a value as JSON and write it. Failures are logged and swallowed.
pub(crate) fn save_json<T: Serialize + ?Sized>(storage: &dyn KeyValueStorage, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(StorageError::from)
        .and_then(|raw| storage.set(key, &raw));

    if let Err(e) = result {
        tracing::error!(key, error = %e, "Failed to persist state");
    }
}

/// Load a JSON array, decoding each element on its own.
///
/// Elements that fail to decode are logged and skipped; the rest are kept
/// in order. A value that is not an array at all yields an empty list.
pub(crate) fn load_json_list<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Vec<T> {
    let raw: Vec<serde_json::Value> = load_json(storage, key).unwrap_or_default();

    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(key, index, error = %e, "Skipping malformed persisted entry");
                None
            }
        })
        .collect()
}

/// Delete a key. Failures are logged and swallowed.
pub(crate) fn remove_key(storage: &dyn KeyValueStorage, key: &str) {
    if let Err(e) = storage.remove(key) {
        tracing::error!(key, error = %e, "Failed to remove persisted state");
    }
}
