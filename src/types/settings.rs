use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppSettings {
    pub search: SearchSettings,
    pub history: HistorySettings,
    pub storage: StorageSettings,
}

/// Remote search tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchSettings {
    /// Origin serving `/api/search/{query}`.
    pub base_url: String,
    pub debounce_ms: u64,
    /// Queries shorter than this (after trimming) never hit the network.
    pub min_query_chars: usize,
    pub max_results: usize,
    pub timeout_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            debounce_ms: 400,
            min_query_chars: 2,
            max_results: 6,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistorySettings {
    pub max_entries: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_entries: 50 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct StorageSettings {
    /// Prepended to every storage key.
    pub key_prefix: String,
    /// SQLite file; `None` uses `animeku.db` in the platform data dir.
    pub database_path: Option<PathBuf>,
}

/// Persisted colour scheme preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The bare value stored under the `theme` key.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parses a stored value; anything but `dark` or `light` is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}
