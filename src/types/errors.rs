use thiserror::Error;

// === StorageError ===

/// Errors raised by a storage backend.
///
/// These never leave [`crate::storage::Store`]: the store logs them and
/// falls back to defaults or drops the write.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying medium reported a failure.
    #[error("Storage backend error: {0}")]
    Backend(String),
    /// Writing the value would exceed the medium's quota.
    #[error("Storage quota exceeded: {needed} bytes needed, {limit} allowed")]
    QuotaExceeded { needed: usize, limit: usize },
    /// The medium cannot be accessed at all.
    #[error("Storage unavailable")]
    Unavailable,
    /// A value could not be encoded or decoded.
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Backend(e.to_string())
    }
}

// === SearchError ===

/// Errors from the remote title search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request could not be sent or the body could not be read.
    #[error("Search request failed: {0}")]
    Http(String),
    /// The endpoint answered with a non-success status.
    #[error("Search endpoint returned status {0}")]
    Status(u16),
    /// The body was not the expected JSON shape.
    #[error("Search response parse error: {0}")]
    Parse(String),
    /// The endpoint URL could not be built.
    #[error("Invalid search URL: {0}")]
    InvalidUrl(String),
}

#[cfg(feature = "network")]
impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SearchError::Parse(e.to_string())
        } else {
            SearchError::Http(e.to_string())
        }
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
