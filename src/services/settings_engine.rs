// animeku Settings Engine
// Loads, saves, updates and resets `AppSettings`, stored as JSON at the
// platform config path or an explicit override.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::AppSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<AppSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &AppSettings;
    /// Updates one value addressed by a dot path such as `search.debounce_ms`.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &Path;
}

pub struct SettingsEngine {
    config_path: PathBuf,
    settings: AppSettings,
}

impl SettingsEngine {
    /// Uses `path_override` when given, otherwise `settings.json` in the
    /// platform config directory.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let config_path =
            path_override.unwrap_or_else(|| platform::get_config_dir().join("settings.json"));
        Self {
            config_path,
            settings: AppSettings::default(),
        }
    }

    fn validate(settings: &AppSettings) -> Result<(), SettingsError> {
        if settings.search.max_results == 0 {
            return Err(SettingsError::InvalidValue(
                "search.max_results must be at least 1".to_string(),
            ));
        }
        if settings.search.min_query_chars == 0 {
            return Err(SettingsError::InvalidValue(
                "search.min_query_chars must be at least 1".to_string(),
            ));
        }
        if settings.history.max_entries == 0 {
            return Err(SettingsError::InvalidValue(
                "history.max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Missing file → defaults. A file that exists but does not parse is an
    /// error; fields absent from it take their defaults.
    fn load(&mut self) -> Result<AppSettings, SettingsError> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "no settings file, using defaults");
            self.settings = AppSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;
        let settings: AppSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        Self::validate(&settings)?;

        self.settings = settings;
        info!(path = %self.config_path.display(), "settings loaded");
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;
        fs::write(&self.config_path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;
        Ok(())
    }

    fn get_settings(&self) -> &AppSettings {
        &self.settings
    }

    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        let (parents, leaf) = match key.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, key),
        };
        let mut target = &mut json_value;
        for part in parents.into_iter().flat_map(|p| p.split('.')) {
            target = target
                .get_mut(part)
                .ok_or_else(|| SettingsError::InvalidKey(key.to_string()))?;
        }
        match target {
            serde_json::Value::Object(map) if map.contains_key(leaf) => {
                map.insert(leaf.to_string(), value);
            }
            _ => return Err(SettingsError::InvalidKey(key.to_string())),
        }

        let new_settings: AppSettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;
        Self::validate(&new_settings)?;

        self.settings = new_settings;
        self.save()
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = AppSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &Path {
        &self.config_path
    }
}
