//! Key-value storage abstraction (one string blob per key).
//!
//! Modeled on browser local storage: values are opaque strings, reads of a
//! missing key are not errors, and writes replace the previous value whole.

mod file;
mod in_memory;

use std::sync::Arc;

use thiserror::Error;

pub use file::FileStorage;
pub use in_memory::InMemoryStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("storage quota exceeded for {key:?} (limit {limit} bytes, attempted {attempted})")]
    QuotaExceeded {
        key: String,
        limit: usize,
        attempted: usize,
    },

    #[error("storage I/O failed for {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage lock poisoned")]
    Poisoned,
}

pub trait KeyValueStorage: Send + Sync {
    /// Current value for `key`, or `None` if nothing was ever written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value for `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S> KeyValueStorage for Arc<S>
where
    S: KeyValueStorage + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

pub(crate) fn check_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
