//! Unit tests for SettingsEngine, each against its own temporary config file.

use animeku::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use animeku::types::errors::SettingsError;
use animeku::types::settings::AppSettings;
use serde_json::json;
use tempfile::TempDir;

fn engine_in(dir: &TempDir) -> SettingsEngine {
    SettingsEngine::new(Some(dir.path().join("config").join("settings.json")))
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);

    let settings = engine.load().unwrap();
    assert_eq!(settings, AppSettings::default());
    assert_eq!(settings.search.debounce_ms, 400);
    assert_eq!(settings.search.min_query_chars, 2);
    assert_eq!(settings.search.max_results, 6);
    assert_eq!(settings.history.max_entries, 50);
    assert!(!engine.get_config_path().exists());
}

#[test]
fn test_set_value_persists_and_reloads() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);
    engine.load().unwrap();

    engine.set_value("search.debounce_ms", json!(250)).unwrap();
    engine
        .set_value("storage.key_prefix", json!("animeku_"))
        .unwrap();
    assert!(engine.get_config_path().exists());

    let mut reloaded = engine_in(&dir);
    let settings = reloaded.load().unwrap();
    assert_eq!(settings.search.debounce_ms, 250);
    assert_eq!(settings.storage.key_prefix, "animeku_");
    assert_eq!(settings.search.max_results, 6);
}

#[test]
fn test_unknown_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);

    for key in ["", "search.nope", "nope.max_results", "search.debounce_ms.inner"] {
        let err = engine.set_value(key, json!(1)).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidKey(_)),
            "{key:?} gave {err:?}"
        );
    }
    assert_eq!(engine.get_settings(), &AppSettings::default());
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);

    let wrong_type = engine
        .set_value("search.debounce_ms", json!("fast"))
        .unwrap_err();
    assert!(matches!(wrong_type, SettingsError::InvalidValue(_)));

    let zero = engine.set_value("search.max_results", json!(0)).unwrap_err();
    assert!(matches!(zero, SettingsError::InvalidValue(_)));

    let zero_cap = engine.set_value("history.max_entries", json!(0)).unwrap_err();
    assert!(matches!(zero_cap, SettingsError::InvalidValue(_)));

    assert_eq!(engine.get_settings().search.max_results, 6);
    assert!(!engine.get_config_path().exists(), "nothing should be saved");
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"search":{"max_results":3}}"#).unwrap();

    let mut engine = SettingsEngine::new(Some(path));
    let settings = engine.load().unwrap();
    assert_eq!(settings.search.max_results, 3);
    assert_eq!(settings.search.debounce_ms, 400);
    assert_eq!(settings.history.max_entries, 50);
}

#[test]
fn test_corrupted_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ definitely not json").unwrap();

    let mut engine = SettingsEngine::new(Some(path));
    assert!(matches!(
        engine.load(),
        Err(SettingsError::SerializationError(_))
    ));
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);
    engine.set_value("history.max_entries", json!(10)).unwrap();
    assert_eq!(engine.get_settings().history.max_entries, 10);

    engine.reset().unwrap();
    assert_eq!(engine.get_settings(), &AppSettings::default());

    let mut reloaded = engine_in(&dir);
    assert_eq!(reloaded.load().unwrap(), AppSettings::default());
}
