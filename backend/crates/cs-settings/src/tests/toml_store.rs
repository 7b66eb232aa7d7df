use crate::{ConnectionSettings, PropertyStore, SettingsError, TomlPropertyStore};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, not, ok, some};
use tempfile::TempDir;

fn store_path(temp: &TempDir) -> std::path::PathBuf {
    temp.path().join("properties.toml")
}

// =========================================================================
// Open Tests
// =========================================================================

#[test]
fn given_missing_file_when_open_then_empty_store() {
    // Given
    let temp = TempDir::new().unwrap();

    // When
    let result = TomlPropertyStore::open(store_path(&temp));

    // Then
    assert_that!(result, ok(anything()));
    let store = result.unwrap();
    assert_that!(store.get("clearspace.host"), none());
    assert_that!(store_path(&temp).exists(), eq(false));
}

#[test]
fn given_nested_tables_when_open_then_dotted_keys_resolve() {
    // Given
    let temp = TempDir::new().unwrap();
    std::fs::write(
        store_path(&temp),
        r#"
            [clearspace]
            host = "cs.example.org"
            port = 8443
            secure = false
        "#,
    )
    .unwrap();

    // When
    let store = TomlPropertyStore::open(store_path(&temp)).unwrap();

    // Then
    assert_that!(store.get("clearspace.host"), some(eq("cs.example.org")));
    assert_that!(store.get("clearspace.port"), some(eq("8443")));
    assert_that!(store.get("clearspace.secure"), some(eq("false")));
    assert_that!(store.get("clearspace"), none());
    assert_that!(store.get("clearspace.host.extra"), none());
}

#[test]
fn given_malformed_file_when_open_then_parse_error_mentions_path() {
    // Given
    let temp = TempDir::new().unwrap();
    std::fs::write(store_path(&temp), "[clearspace\nhost = ").unwrap();

    // When
    let result = TomlPropertyStore::open(store_path(&temp));

    // Then
    assert_that!(result, err(anything()));
    let error = result.unwrap_err();
    assert!(matches!(error, SettingsError::TomlParse { .. }));
    assert_that!(error.to_string(), contains_substring("properties.toml"));
}

// =========================================================================
// Write Tests
// =========================================================================

#[test]
fn given_store_when_put_then_file_contains_nested_value() {
    // Given
    let temp = TempDir::new().unwrap();
    let mut store = TomlPropertyStore::open(store_path(&temp)).unwrap();

    // When
    store.put("clearspace.host", "a.example.com");

    // Then
    let contents = std::fs::read_to_string(store_path(&temp)).unwrap();
    assert_that!(contents, contains_substring("[clearspace]"));
    assert_that!(contents, contains_substring("host = \"a.example.com\""));
}

#[test]
fn given_written_store_when_reopened_then_values_persist() {
    // Given
    let temp = TempDir::new().unwrap();
    let mut store = TomlPropertyStore::open(store_path(&temp)).unwrap();
    store.put("clearspace.host", "cs.example.org");
    store.put("clearspace.sharedSecret", "secret");

    // When
    let reopened = TomlPropertyStore::open(store_path(&temp)).unwrap();

    // Then
    assert_that!(reopened.get("clearspace.host"), some(eq("cs.example.org")));
    assert_that!(reopened.get("clearspace.sharedSecret"), some(eq("secret")));
}

#[test]
fn given_missing_parent_dir_when_put_then_directory_created() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf").join("properties.toml");
    let mut store = TomlPropertyStore::open(&path).unwrap();

    // When
    store.put("clearspace.port", "8080");

    // Then
    assert_that!(path.exists(), eq(true));
}

#[test]
fn given_scalar_in_the_way_when_put_nested_then_replaced_by_table() {
    // Given
    let temp = TempDir::new().unwrap();
    std::fs::write(store_path(&temp), "clearspace = \"flat\"\n").unwrap();
    let mut store = TomlPropertyStore::open(store_path(&temp)).unwrap();

    // When
    store.put("clearspace.host", "h");

    // Then
    assert_that!(store.get("clearspace.host"), some(eq("h")));
}

#[test]
fn given_top_level_key_when_put_then_stored_at_root() {
    // Given
    let temp = TempDir::new().unwrap();
    let mut store = TomlPropertyStore::open(store_path(&temp)).unwrap();

    // When
    store.put("version", "1");

    // Then
    assert_that!(store.get("version"), some(eq("1")));
}

#[test]
fn given_value_when_remove_then_key_and_empty_table_pruned() {
    // Given
    let temp = TempDir::new().unwrap();
    let mut store = TomlPropertyStore::open(store_path(&temp)).unwrap();
    store.put("clearspace.host", "h");

    // When
    store.remove("clearspace.host");

    // Then
    assert_that!(store.get("clearspace.host"), none());
    let contents = std::fs::read_to_string(store_path(&temp)).unwrap();
    assert_that!(contents, not(contains_substring("clearspace")));
}

#[test]
fn given_sibling_keys_when_remove_one_then_others_kept() {
    // Given
    let temp = TempDir::new().unwrap();
    let mut store = TomlPropertyStore::open(store_path(&temp)).unwrap();
    store.put("clearspace.host", "h");
    store.put("clearspace.port", "81");

    // When
    store.remove("clearspace.host");

    // Then
    let reopened = TomlPropertyStore::open(store_path(&temp)).unwrap();
    assert_that!(reopened.get("clearspace.host"), none());
    assert_that!(reopened.get("clearspace.port"), some(eq("81")));
}

#[test]
fn given_missing_key_when_remove_then_file_not_created() {
    // Given
    let temp = TempDir::new().unwrap();
    let mut store = TomlPropertyStore::open(store_path(&temp)).unwrap();

    // When
    store.remove("clearspace.host");

    // Then
    assert_that!(store_path(&temp).exists(), eq(false));
}

// =========================================================================
// Integration with ConnectionSettings
// =========================================================================

#[test]
fn given_toml_store_when_settings_written_then_reloaded_from_disk() {
    // Given
    let temp = TempDir::new().unwrap();
    let settings = ConnectionSettings::new(TomlPropertyStore::open(store_path(&temp)).unwrap());
    settings.set_host("cs.example.org");
    settings.set_port(8443);
    settings.set_path("not-persisted");
    settings.set_secure(false);

    // When
    let reloaded = ConnectionSettings::new(TomlPropertyStore::open(store_path(&temp)).unwrap());

    // Then
    assert_that!(reloaded.host(), some(eq("cs.example.org")));
    assert_that!(reloaded.port(), eq(8443));
    assert_that!(reloaded.path(), eq("clearspace"));
    assert_that!(reloaded.is_secure(), eq(true));
    assert_that!(reloaded.connection_uri(), eq("https://cs.example.org:8443/clearspace"));
}

#[test]
fn given_settings_when_into_store_then_store_returned() {
    // Given
    let temp = TempDir::new().unwrap();
    let settings = ConnectionSettings::new(TomlPropertyStore::open(store_path(&temp)).unwrap());
    settings.set_shared_secret("secret");

    // When
    let store = settings.into_store();

    // Then
    let expected = store_path(&temp);
    assert_that!(store.path(), eq(expected.as_path()));
    assert_that!(store.get("clearspace.sharedSecret"), some(eq("secret")));
}
