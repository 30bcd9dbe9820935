//! Key filtering and merging for JSON-style maps.
//!
//! These operations work on [`serde_json::Map`] so they compose directly
//! with configuration and settings documents parsed by `serde_json`.
//! Filtering returns new maps; merging mutates a base map in place.

use serde_json::map::Entry;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Returns a new map holding only the requested keys.
///
/// Keys absent from the source map are ignored, so the result never gains
/// entries the source did not have. Entry order follows the source map, not
/// the key list.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use sundry::map::pick;
///
/// let settings = json!({"host": "localhost", "port": 8080, "debug": true});
/// let settings = settings.as_object().unwrap();
///
/// let network = pick(settings, ["host", "port", "missing"]);
/// assert_eq!(network.len(), 2);
/// assert_eq!(network["port"], json!(8080));
/// assert!(!network.contains_key("debug"));
/// ```
pub fn pick<I>(map: &Map<String, Value>, keys: I) -> Map<String, Value>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let keys: Vec<I::Item> = keys.into_iter().collect();
    let wanted: HashSet<&str> = keys.iter().map(AsRef::as_ref).collect();

    map.iter()
        .filter(|(key, _)| wanted.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Returns a new map with the listed keys removed.
///
/// The complement of [`pick`]: every entry survives except those whose key
/// appears in `keys`. Listing a key the map does not contain is harmless.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use sundry::map::omit;
///
/// let record = json!({"id": 7, "password": "hunter2", "name": "ada"});
/// let record = record.as_object().unwrap();
///
/// let public = omit(record, ["password"]);
/// assert_eq!(public.len(), 2);
/// assert!(!public.contains_key("password"));
/// ```
pub fn omit<I>(map: &Map<String, Value>, keys: I) -> Map<String, Value>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let keys: Vec<I::Item> = keys.into_iter().collect();
    let unwanted: HashSet<&str> = keys.iter().map(AsRef::as_ref).collect();

    map.iter()
        .filter(|(key, _)| !unwanted.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Merges maps into `base`, with later maps winning on key conflicts.
///
/// The maps in `others` are applied left to right. In shallow mode
/// (`deep = false`) a conflicting key is simply overwritten. In deep mode,
/// when both the existing and incoming values are objects they are merged
/// recursively; any other pairing overwrites, so an object in the base can
/// still be replaced wholesale by a scalar or array.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use sundry::map::merge_maps;
///
/// let mut config = json!({"server": {"host": "localhost", "port": 80}})
///     .as_object()
///     .unwrap()
///     .clone();
/// let overrides = json!({"server": {"port": 8080}, "debug": true})
///     .as_object()
///     .unwrap()
///     .clone();
///
/// merge_maps(&mut config, [overrides], true);
///
/// assert_eq!(config["server"]["host"], json!("localhost"));
/// assert_eq!(config["server"]["port"], json!(8080));
/// assert_eq!(config["debug"], json!(true));
/// ```
pub fn merge_maps<I>(base: &mut Map<String, Value>, others: I, deep: bool)
where
    I: IntoIterator<Item = Map<String, Value>>,
{
    for other in others {
        for (key, incoming) in other {
            match base.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(incoming);
                }
                Entry::Occupied(mut slot) => match (deep, slot.get_mut(), incoming) {
                    (true, Value::Object(existing), Value::Object(incoming)) => {
                        merge_maps(existing, [incoming], true);
                    }
                    (_, existing, incoming) => {
                        *existing = incoming;
                    }
                },
            }
        }
    }
}
