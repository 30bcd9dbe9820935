//! An immutable string-keyed map usable as a hash key.
//!
//! [`FrozenMap`] fixes its entries at construction time. Because nothing
//! can mutate it afterwards, its hash is computed once and cached, which
//! makes it cheap to use as a key in [`HashMap`] or as a member of
//! [`std::collections::HashSet`]. Equality and hashing are independent of
//! construction order.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Index;
use std::sync::OnceLock;

/// An immutable map from strings to `V`, hashable as a whole.
///
/// Entries iterate in construction order. When the input carries a key
/// more than once the last value wins, but the key keeps the position of
/// its first occurrence, matching what repeated inserts into an ordinary
/// ordered map would produce.
///
/// Two maps are equal when they hold the same key-value pairs, regardless
/// of the order they were built in, and equal maps hash identically.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use sundry::map::FrozenMap;
///
/// let forward: FrozenMap<i32> = [("a", 1), ("b", 2)].into_iter().collect();
/// let backward: FrozenMap<i32> = [("b", 2), ("a", 1)].into_iter().collect();
/// assert_eq!(forward, backward);
///
/// let mut seen = HashSet::new();
/// seen.insert(forward);
/// assert!(seen.contains(&backward));
/// ```
#[derive(Debug, Clone)]
pub struct FrozenMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
    cached_hash: OnceLock<u64>,
}

impl<V> FrozenMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            cached_hash: OnceLock::new(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterates entries in construction order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates keys in construction order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates values in construction order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    // Construction-time insert: last value wins, key keeps its first position.
    fn insert_entry(&mut self, key: String, value: V) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }
}

impl<V: Hash> FrozenMap<V> {
    // Key-sorted so that construction order cannot leak into the digest.
    fn order_independent_hash(&self) -> u64 {
        let mut pairs: Vec<(&String, &V)> =
            self.entries.iter().map(|(key, value)| (key, value)).collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        let mut hasher = DefaultHasher::new();
        for (key, value) in pairs {
            key.hash(&mut hasher);
            value.hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl<V> Default for FrozenMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for FrozenMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<V: Eq> Eq for FrozenMap<V> {}

impl<V: Hash> Hash for FrozenMap<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let digest = *self
            .cached_hash
            .get_or_init(|| self.order_independent_hash());
        state.write_u64(digest);
    }
}

impl<V> FromIterator<(String, V)> for FrozenMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert_entry(key, value);
        }
        map
    }
}

impl<'a, V> FromIterator<(&'a str, V)> for FrozenMap<V> {
    fn from_iter<I: IntoIterator<Item = (&'a str, V)>>(iter: I) -> Self {
        iter.into_iter().map(|(key, value)| (key.to_string(), value)).collect()
    }
}

impl<V> From<HashMap<String, V>> for FrozenMap<V> {
    fn from(map: HashMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<V> From<BTreeMap<String, V>> for FrozenMap<V> {
    fn from(map: BTreeMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<V> From<Vec<(String, V)>> for FrozenMap<V> {
    fn from(entries: Vec<(String, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<V> Index<&str> for FrozenMap<V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present. Use [`FrozenMap::get`] for a
    /// fallible lookup.
    fn index(&self, key: &str) -> &V {
        self.get(key)
            .unwrap_or_else(|| panic!("no entry found for key {key:?}"))
    }
}

/// Borrowing iterator over [`FrozenMap`] entries in construction order.
pub struct Iter<'a, V> {
    inner: std::slice::Iter<'a, (String, V)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a FrozenMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for FrozenMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for FrozenMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for FrozenMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FrozenMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for FrozenMapVisitor<V> {
            type Value = FrozenMap<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map with string keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = FrozenMap::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert_entry(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(FrozenMapVisitor(PhantomData))
    }
}
