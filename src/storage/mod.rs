//! Client-side persistence.
//!
//! A [`Store`] wraps a string-keyed [`StorageBackend`] and exposes typed,
//! fail-soft `load`/`save`. Backends only move text; encoding and the
//! recovery policy live in the store.

pub mod memory;
pub mod sqlite;
pub mod store;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
pub use store::Store;

use crate::types::errors::StorageError;

/// Well-known keys of the persistence medium.
pub mod keys {
    pub const WATCHLIST: &str = "watchlist";
    pub const HISTORY: &str = "history";
    pub const PROGRESS: &str = "progress";
    pub const THEME: &str = "theme";
}

/// Current Unix time in milliseconds, the unit of every stored timestamp.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A string-keyed text medium.
///
/// Methods take `&self` so several managers can share one store for the
/// lifetime of a page session.
pub trait StorageBackend {
    /// Returns the stored text, or `None` when the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
