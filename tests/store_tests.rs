//! Stash and link store tests
//!
//! Everything runs against a temporary data directory.

use std::fs;

use shortly::config::Config;
use shortly::stash::Stash;
use shortly::store::{LAST_INPUT_KEY, LinkStore, LinkTable, THEME_KEY, Theme, URLS_KEY};
use tempfile::TempDir;

fn temp_config() -> (Config, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        data_dir: temp_dir.path().to_path_buf(),
        ..Config::default()
    };
    (config, temp_dir)
}

fn temp_store() -> (LinkStore, Config, TempDir) {
    let (config, temp_dir) = temp_config();
    let store = LinkStore::open(&config);
    (store, config, temp_dir)
}

// =============================================================================
// Stash file tests
// =============================================================================

#[cfg(test)]
mod stash_tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let (config, _temp) = temp_config();
        let stash = Stash::open(config.stash_path());

        let value = stash.get("urls").expect("get should succeed");
        assert!(value.is_none());
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let (config, _temp) = temp_config();
        let stash = Stash::open(config.stash_path());

        stash.set("urls", "{}").expect("set should succeed");

        let value = stash.get("urls").unwrap();
        assert_eq!(value.as_deref(), Some("{}"));
    }

    #[test]
    fn test_values_persist_across_instances() {
        let (config, _temp) = temp_config();

        Stash::open(config.stash_path()).set("theme", "dark").unwrap();

        let reopened = Stash::open(config.stash_path());
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_set_leaves_no_tmp_file() {
        let (config, _temp) = temp_config();
        let stash = Stash::open(config.stash_path());

        stash.set("urls", "{}").unwrap();

        let tmp = config.stash_path().with_extension("json.tmp");
        assert!(!tmp.exists(), "temp file should be renamed away");
        assert!(config.stash_path().exists());
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let (config, _temp) = temp_config();
        let stash = Stash::open(config.stash_path());

        let removed = stash.remove("never_set").expect("remove should succeed");
        assert!(removed.is_none());
    }

    #[test]
    fn test_remove_returns_old_value() {
        let (config, _temp) = temp_config();
        let stash = Stash::open(config.stash_path());

        stash.set("theme", "dark").unwrap();
        let removed = stash.remove("theme").unwrap();

        assert_eq!(removed.as_deref(), Some("dark"));
        assert!(stash.get("theme").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let (config, _temp) = temp_config();
        fs::write(config.stash_path(), "{not json").unwrap();

        let stash = Stash::open(config.stash_path());
        let err = stash.get("urls").expect_err("corrupt file should error");

        assert_eq!(err.code(), "E002");
    }
}

// =============================================================================
// Link table persistence tests
// =============================================================================

#[cfg(test)]
mod table_persistence_tests {
    use super::*;

    #[test]
    fn test_load_missing_stash_is_empty() {
        let (store, _config, _temp) = temp_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_raw_missing_is_none() {
        let (store, _config, _temp) = temp_store();
        let table = store.load_raw().expect("load_raw should succeed");
        assert!(table.is_none());
    }

    #[test]
    fn test_put_then_load_contains() {
        let (store, _config, _temp) = temp_store();

        store.put("abc123", "https://one.example").unwrap();

        let table = store.load();
        assert_eq!(table.get("abc123"), Some("https://one.example"));
    }

    #[test]
    fn test_save_load_keeps_insertion_order() {
        let (store, _config, _temp) = temp_store();

        let mut table = LinkTable::new();
        table.put("aaaaaa", "https://one.example");
        table.put("bbbbbb", "https://two.example");
        table.put("cccccc", "https://three.example");
        store.save(&table).unwrap();

        let reloaded = store.load();
        let ids: Vec<&str> = reloaded.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["aaaaaa", "bbbbbb", "cccccc"]);

        let newest_first: Vec<&str> = reloaded.iter_newest_first().map(|r| r.id.as_str()).collect();
        assert_eq!(newest_first, vec!["cccccc", "bbbbbb", "aaaaaa"]);
    }

    #[test]
    fn test_remove_reports_presence() {
        let (store, _config, _temp) = temp_store();
        store.put("abc123", "https://one.example").unwrap();

        assert!(store.remove("abc123").unwrap());
        assert!(!store.remove("abc123").unwrap());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_remove_absent_does_not_touch_table() {
        let (store, _config, _temp) = temp_store();
        store.put("abc123", "https://one.example").unwrap();

        assert!(!store.remove("zzzzzz").unwrap());
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_clear_removes_urls_key() {
        let (store, config, _temp) = temp_store();
        store.put("abc123", "https://one.example").unwrap();
        store.set_theme(Theme::Dark).unwrap();

        store.clear().unwrap();

        // The whole key goes away, not just its entries; the theme stays.
        let stash = Stash::open(config.stash_path());
        assert!(stash.get(URLS_KEY).unwrap().is_none());
        assert_eq!(stash.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_table_value_collapses_to_empty() {
        let (store, config, _temp) = temp_store();
        Stash::open(config.stash_path()).set(URLS_KEY, "{oops").unwrap();

        assert!(store.load_raw().is_err());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_stash_file_collapses_to_empty() {
        let (store, config, _temp) = temp_store();
        fs::write(config.stash_path(), "not a stash").unwrap();

        assert!(store.load().is_empty());
    }
}

// =============================================================================
// Theme and draft tests
// =============================================================================

#[cfg(test)]
mod theme_and_draft_tests {
    use super::*;

    #[test]
    fn test_theme_defaults_to_light() {
        let (store, _config, _temp) = temp_store();
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_theme_round_trip() {
        let (store, config, _temp) = temp_store();

        store.set_theme(Theme::Dark).unwrap();
        assert_eq!(store.theme(), Theme::Dark);

        let reopened = LinkStore::open(&config);
        assert_eq!(reopened.theme(), Theme::Dark);
    }

    #[test]
    fn test_unknown_theme_value_reads_light() {
        let (store, config, _temp) = temp_store();
        Stash::open(config.stash_path()).set(THEME_KEY, "blue").unwrap();

        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_last_input_defaults_empty() {
        let (store, _config, _temp) = temp_store();
        assert_eq!(store.last_input(), "");
    }

    #[test]
    fn test_last_input_round_trip() {
        let (store, config, _temp) = temp_store();

        store.set_last_input("https://half-typed.exa").unwrap();

        let reopened = LinkStore::open(&config);
        assert_eq!(reopened.last_input(), "https://half-typed.exa");
    }

    #[test]
    fn test_all_keys_coexist_in_one_file() {
        let (store, config, _temp) = temp_store();

        store.put("abc123", "https://one.example").unwrap();
        store.set_theme(Theme::Dark).unwrap();
        store.set_last_input("draft").unwrap();

        let raw = fs::read_to_string(config.stash_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let object = value.as_object().expect("stash should be a JSON object");

        assert!(object.contains_key(URLS_KEY));
        assert!(object.contains_key(THEME_KEY));
        assert!(object.contains_key(LAST_INPUT_KEY));
    }
}
