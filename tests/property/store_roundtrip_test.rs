//! Property-based tests for the `Store` codec.
//!
//! Any watchlist or progress map saved through the store loads back equal,
//! on both backends. Any stored text that is not a valid record list loads
//! as the caller's default.

use animeku::storage::{keys, MemoryStorage, SqliteStorage, Store};
use animeku::types::history::{ProgressMap, ProgressRecord};
use animeku::types::watchlist::WatchlistEntry;
use proptest::prelude::*;

fn arb_entry() -> impl Strategy<Value = WatchlistEntry> {
    (
        "[a-z0-9-]{1,20}",
        "\\PC{0,30}",
        proptest::option::of("/[a-z]{1,10}\\.jpg"),
        proptest::option::of(prop_oneof![Just("TV"), Just("Movie"), Just("OVA")]),
        0i64..4_102_444_800_000,
    )
        .prop_map(|(slug, title, poster, kind, added_at)| WatchlistEntry {
            slug,
            title,
            poster,
            kind: kind.map(str::to_string),
            added_at,
        })
}

fn arb_progress() -> impl Strategy<Value = ProgressMap> {
    prop::collection::btree_map(
        "[a-z]{1,10}",
        ("[a-z0-9-]{1,20}", "\\PC{0,20}", 0i64..4_102_444_800_000).prop_map(
            |(ep_slug, ep_name, saved_at)| ProgressRecord {
                ep_slug,
                ep_name,
                saved_at,
            },
        ),
        0..10,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    #[test]
    fn watchlist_roundtrips_through_memory(list in prop::collection::vec(arb_entry(), 0..10)) {
        let store = Store::new(MemoryStorage::new());
        store.save(keys::WATCHLIST, &list);
        // A fresh store over the same text must decode it, not just echo
        // the session cache.
        let raw = store.backend().raw(keys::WATCHLIST).expect("written");
        let reopened = MemoryStorage::new();
        reopened.insert_raw(keys::WATCHLIST, &raw);

        let loaded: Vec<WatchlistEntry> = Store::new(reopened).load(keys::WATCHLIST, Vec::new());
        prop_assert_eq!(loaded, list);
    }

    #[test]
    fn progress_roundtrips_through_sqlite(progress in arb_progress()) {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("animeku.db");
        {
            let store = Store::new(SqliteStorage::open(&path).expect("open"));
            store.save(keys::PROGRESS, &progress);
        }
        let store = Store::new(SqliteStorage::open(&path).expect("reopen"));
        let loaded: ProgressMap = store.load(keys::PROGRESS, ProgressMap::new());
        prop_assert_eq!(loaded, progress);
    }

    #[test]
    fn garbage_loads_as_default(raw in "\\PC{0,40}") {
        let is_list = serde_json::from_str::<Vec<WatchlistEntry>>(&raw)
            .map(|v| !v.is_empty())
            .unwrap_or(false);
        prop_assume!(!is_list);

        let storage = MemoryStorage::new();
        storage.insert_raw(keys::WATCHLIST, &raw);
        let store = Store::new(storage);
        let loaded: Vec<WatchlistEntry> = store.load(keys::WATCHLIST, Vec::new());
        prop_assert!(loaded.is_empty());
    }
}
