//! Property-based tests for `FrozenMap`.
//!
//! Properties under test:
//! - Two maps built from the same entries in any order are equal and hash
//!   identically.
//! - Every inserted entry is retrievable, and duplicate keys resolve to the
//!   last value while keeping the position of the first occurrence.
//! - JSON round trips preserve both values and iteration order.

use proptest::prelude::*;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use sundry::map::FrozenMap;

/// Entries with distinct keys, so reordering never changes which value wins.
fn arb_unique_entries() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::hash_map("[a-z]{1,4}", any::<i64>(), 0..12)
        .prop_map(|entries| entries.into_iter().collect())
}

/// The same distinct entries twice, the second copy in a random order.
fn arb_reordered_entries() -> impl Strategy<Value = (Vec<(String, i64)>, Vec<(String, i64)>)> {
    arb_unique_entries()
        .prop_flat_map(|entries| (Just(entries.clone()), Just(entries).prop_shuffle()))
}

/// Entries drawn from a three-key space, so duplicate keys are common.
fn arb_colliding_entries() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::vec(("[abc]", any::<i64>()), 0..10)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_insertion_order_does_not_affect_identity(
        (original, reordered) in arb_reordered_entries(),
    ) {
        let left: FrozenMap<i64> = original.into_iter().collect();
        let right: FrozenMap<i64> = reordered.into_iter().collect();

        prop_assert_eq!(&left, &right);
        prop_assert_eq!(hash_of(&left), hash_of(&right));
    }

    #[test]
    fn prop_every_entry_is_retrievable(entries in arb_unique_entries()) {
        let map: FrozenMap<i64> = entries.clone().into_iter().collect();

        prop_assert_eq!(map.len(), entries.len());
        for (key, value) in &entries {
            prop_assert_eq!(map.get(key), Some(value));
        }
    }

    #[test]
    fn prop_duplicate_keys_keep_the_last_value(entries in arb_colliding_entries()) {
        let map: FrozenMap<i64> = entries.clone().into_iter().collect();

        let mut model: HashMap<String, i64> = HashMap::new();
        for (key, value) in entries {
            model.insert(key, value);
        }

        prop_assert_eq!(map.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Some(value));
        }
    }

    #[test]
    fn prop_first_occurrence_fixes_key_position(entries in arb_colliding_entries()) {
        let map: FrozenMap<i64> = entries.clone().into_iter().collect();

        let mut expected: Vec<String> = Vec::new();
        for (key, _) in entries {
            if !expected.contains(&key) {
                expected.push(key);
            }
        }

        let actual: Vec<String> = map.keys().map(str::to_string).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_json_round_trip_preserves_order_and_values(entries in arb_unique_entries()) {
        let map: FrozenMap<i64> = entries.into_iter().collect();

        let encoded = serde_json::to_string(&map).unwrap();
        let decoded: FrozenMap<i64> = serde_json::from_str(&encoded).unwrap();

        prop_assert_eq!(&decoded, &map);

        let original_keys: Vec<&str> = map.keys().collect();
        let decoded_keys: Vec<&str> = decoded.keys().collect();
        prop_assert_eq!(decoded_keys, original_keys);
    }
}
