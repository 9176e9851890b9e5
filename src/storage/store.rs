//! Typed, fail-soft access to a [`StorageBackend`].
//!
//! Reads fall back to the caller's default and writes are dropped on
//! failure, each with a logged warning. Every saved value is also kept in a
//! session cache, so after a failed write the in-memory state stays
//! authoritative for the rest of the session.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::StorageBackend;
use crate::types::errors::StorageError;

pub struct Store<B> {
    backend: B,
    prefix: String,
    /// Last text written per full key; `None` marks a removal.
    session: RefCell<HashMap<String, Option<String>>>,
}

impl<B: StorageBackend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self::with_prefix(backend, "")
    }

    /// Namespaces every key as `{prefix}{key}`.
    pub fn with_prefix(backend: B, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
            session: RefCell::new(HashMap::new()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    /// Reads and decodes `key`, returning `default` when the key is absent,
    /// the medium fails, or the stored text does not decode.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                warn!(key, error = %e, "storage read failed, using default");
                default
            }
        }
    }

    /// Encodes and writes `value`. Failures are logged and swallowed.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            warn!(key, error = %e, "storage write failed, keeping in-memory state");
        }
    }

    /// Deletes `key`. Failures are logged and swallowed.
    pub fn remove(&self, key: &str) {
        let full = self.full_key(key);
        self.session.borrow_mut().insert(full.clone(), None);
        if let Err(e) = self.backend.remove(&full) {
            warn!(key, error = %e, "storage remove failed");
        }
    }

    /// Reads the stored text of `key` as is, without JSON decoding. Used
    /// for values the site keeps as bare strings, such as the theme.
    pub fn load_raw(&self, key: &str) -> Option<String> {
        match self.read_text(key) {
            Ok(text) => text,
            Err(e) => {
                warn!(key, error = %e, "storage read failed");
                None
            }
        }
    }

    /// Writes `value` as is, without JSON encoding. Failures are logged and
    /// swallowed.
    pub fn save_raw(&self, key: &str, value: &str) {
        if let Err(e) = self.write_text(key, value.to_string()) {
            warn!(key, error = %e, "storage write failed, keeping in-memory state");
        }
    }

    /// Strict read behind [`Store::load`]. A stored JSON `null` counts as
    /// absent.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(text) = self.read_text(key)? else {
            return Ok(None);
        };
        let value: serde_json::Value = serde_json::from_str(&text)?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(value)?))
    }

    /// Strict write behind [`Store::save`]. The session cache is updated
    /// before the backend is touched, so it holds the value even when this
    /// returns an error.
    pub fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        self.write_text(key, serde_json::to_string(value)?)
    }

    /// Session cache first, then the backend.
    fn read_text(&self, key: &str) -> Result<Option<String>, StorageError> {
        let full = self.full_key(key);
        let cached = self.session.borrow().get(&full).cloned();
        match cached {
            Some(entry) => Ok(entry),
            None => self.backend.read(&full),
        }
    }

    fn write_text(&self, key: &str, text: String) -> Result<(), StorageError> {
        let full = self.full_key(key);
        self.session
            .borrow_mut()
            .insert(full.clone(), Some(text.clone()));
        self.backend.write(&full, &text)?;
        debug!(key, bytes = text.len(), "stored");
        Ok(())
    }
}
