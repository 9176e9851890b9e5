//! Property-based tests for settings persistence.
//!
//! Any valid `AppSettings` survives a JSON round trip, and values written
//! through `SettingsEngine::set_value` are read back by a fresh engine.

use animeku::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use animeku::types::settings::{AppSettings, HistorySettings, SearchSettings, StorageSettings};
use proptest::prelude::*;
use serde_json::json;

fn arb_settings() -> impl Strategy<Value = AppSettings> {
    (
        "https?://[a-z]{3,10}(:[0-9]{2,4})?",
        0u64..5_000,
        1usize..10,
        1usize..50,
        1u64..120,
        1usize..500,
        "[a-z_]{0,10}",
    )
        .prop_map(
            |(base_url, debounce_ms, min_query_chars, max_results, timeout_secs, max_entries, key_prefix)| {
                AppSettings {
                    search: SearchSettings {
                        base_url,
                        debounce_ms,
                        min_query_chars,
                        max_results,
                        timeout_secs,
                    },
                    history: HistorySettings { max_entries },
                    storage: StorageSettings {
                        key_prefix,
                        database_path: None,
                    },
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string(&settings).expect("serialize");
        let parsed: AppSettings = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(parsed, settings);
    }

    #[test]
    fn set_value_is_visible_after_reload(debounce_ms in 0u64..5_000, max_results in 1usize..50) {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("settings.json");

        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine.set_value("search.debounce_ms", json!(debounce_ms)).expect("debounce");
        engine.set_value("search.max_results", json!(max_results)).expect("max_results");

        let mut fresh = SettingsEngine::new(Some(path));
        let loaded = fresh.load().expect("load");
        prop_assert_eq!(loaded.search.debounce_ms, debounce_ms);
        prop_assert_eq!(loaded.search.max_results, max_results);
        prop_assert_eq!(loaded.history.max_entries, 50);
    }
}
