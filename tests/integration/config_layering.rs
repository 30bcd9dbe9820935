//! Configuration layering: merge, filter, persist, and reload.

use serde_json::{Map, Value, json};
use std::collections::HashMap;
use sundry::fs::{WriteOptions, safe_write_text};
use sundry::map::{FrozenMap, merge_maps, omit, pick};
use tempfile::tempdir;

fn obj(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

#[test]
fn test_layered_config_written_and_reloaded() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("conf").join("app.json");

    let mut config = obj(json!({
        "server": {"host": "localhost", "port": 80, "tls": {"enabled": false}},
        "retries": 3,
        "_session_token": "abc123"
    }));
    let site = obj(json!({
        "server": {"port": 8443, "tls": {"enabled": true}}
    }));
    let user = obj(json!({
        "retries": 5
    }));

    merge_maps(&mut config, [site, user], true);

    // Internal keys never reach the disk.
    let persisted = omit(&config, ["_session_token"]);
    let rendered = serde_json::to_string_pretty(&Value::Object(persisted)).unwrap();
    safe_write_text(&path, &rendered, WriteOptions::default()).unwrap();

    let reloaded: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reloaded["server"]["host"], json!("localhost"));
    assert_eq!(reloaded["server"]["port"], json!(8443));
    assert_eq!(reloaded["server"]["tls"]["enabled"], json!(true));
    assert_eq!(reloaded["retries"], json!(5));
    assert!(reloaded.get("_session_token").is_none());
}

#[test]
fn test_pick_and_omit_partition_settings() {
    let settings = obj(json!({
        "host": "db.internal",
        "port": 5432,
        "user": "svc",
        "password": "secret",
        "pool_size": 8
    }));

    let connection = pick(&settings, ["host", "port", "user", "password"]);
    let tuning = omit(&settings, ["host", "port", "user", "password"]);

    assert_eq!(connection.len(), 4);
    assert_eq!(tuning.len(), 1);
    assert!(tuning.contains_key("pool_size"));

    // Together they reconstruct the original.
    let mut reunited = connection;
    merge_maps(&mut reunited, [tuning], false);
    assert_eq!(reunited, settings);
}

#[test]
fn test_frozen_map_as_config_cache_key() {
    let mut compiled: HashMap<FrozenMap<String>, &str> = HashMap::new();

    let debug_flags: FrozenMap<String> = [
        ("opt", "0".to_string()),
        ("debug", "true".to_string()),
    ]
    .into_iter()
    .collect();
    compiled.insert(debug_flags, "debug build");

    // Same flags listed in another order find the same slot.
    let probe: FrozenMap<String> = [
        ("debug", "true".to_string()),
        ("opt", "0".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(compiled.get(&probe), Some(&"debug build"));

    // A different flag set is its own key.
    let release_flags: FrozenMap<String> =
        [("opt", "3".to_string())].into_iter().collect();
    assert!(!compiled.contains_key(&release_flags));
    compiled.insert(release_flags, "release build");
    assert_eq!(compiled.len(), 2);
}

#[test]
fn test_frozen_map_serializes_into_config_document() {
    let limits: FrozenMap<u32> = [("cpu", 4), ("memory_gb", 16)].into_iter().collect();

    let document = json!({"limits": limits});
    assert_eq!(document["limits"]["cpu"], json!(4));

    let restored: FrozenMap<u32> = serde_json::from_value(document["limits"].clone()).unwrap();
    assert_eq!(restored, limits);
}
