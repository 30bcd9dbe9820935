//! Map utilities: key filtering, merging, and an immutable hashable map
//!
//! Two families live here. The functions in [`ops`] operate on
//! [`serde_json::Map`] documents, covering the select/drop/merge shapes
//! that configuration layering needs. [`FrozenMap`] is an immutable
//! string-keyed map whose whole value can serve as a [`HashMap`] key,
//! with equality and hashing independent of construction order.
//!
//! [`HashMap`]: std::collections::HashMap
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use sundry::map::{merge_maps, pick};
//!
//! let defaults = json!({"retries": 3, "timeout": 30, "verbose": false});
//! let mut config = defaults.as_object().unwrap().clone();
//!
//! let overrides = json!({"timeout": 5}).as_object().unwrap().clone();
//! merge_maps(&mut config, [overrides], false);
//!
//! let network = pick(&config, ["retries", "timeout"]);
//! assert_eq!(network["timeout"], json!(5));
//! ```

pub mod frozen;
pub mod ops;

pub use frozen::{FrozenMap, Iter};
pub use ops::{merge_maps, omit, pick};
