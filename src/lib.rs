//! sundry - practical utilities for everyday plumbing
//!
//! A small collection of the operations that keep showing up in tools and
//! services: writing files without ever exposing partial content, walking
//! trees lazily, layering configuration maps, grouping iterator output,
//! and caching expensive calls. Everything is synchronous and works on a
//! single thread; there is no runtime to bring up and no global state.
//!
//! # Design Principles
//!
//! - **Atomic by default**: File writes and copies stage next to the
//!   target and land through a single rename, so readers never observe a
//!   half-written file
//! - **Lazy where it counts**: Discovery and line reading are iterators
//!   that touch the disk only as they are consumed
//! - **Typed failures**: Operations return [`anyhow::Result`] with path
//!   context, and the underlying [`error::SundryError`] stays reachable
//!   through downcasting
//! - **Value semantics**: Map operations either return new maps or mutate
//!   an explicit `&mut` base; nothing is shared implicitly
//!
//! # Core Modules
//!
//! - [`fs`] - Atomic writes and copies, directory setup, glob discovery,
//!   lazy line reading
//! - [`map`] - Key filtering and merging for JSON-style maps, plus the
//!   immutable hashable [`map::FrozenMap`]
//! - [`iter`] - Chunking, sliding windows, and order-preserving
//!   deduplication
//! - [`func`] - Function composition and TTL memoization
//! - [`error`] - The shared [`error::SundryError`] type
//!
//! The [`compose!`] macro lives at the crate root, as exported macros do.
//!
//! # Example
//!
//! ```rust,no_run
//! use serde_json::json;
//! use std::path::Path;
//! use sundry::fs::{find_files, safe_write_text, WriteOptions};
//! use sundry::map::merge_maps;
//!
//! # fn example() -> anyhow::Result<()> {
//! // Layer an override onto defaults, then persist atomically.
//! let mut config = json!({"retries": 3, "timeout": 30}).as_object().unwrap().clone();
//! let overrides = json!({"timeout": 5}).as_object().unwrap().clone();
//! merge_maps(&mut config, [overrides], true);
//!
//! let rendered = serde_json::to_string_pretty(&config)?;
//! safe_write_text(Path::new("out/config.json"), &rendered, WriteOptions::default())?;
//!
//! // Everything written so far, lazily.
//! for path in find_files(Path::new("out"), "*.json")? {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

// Core functionality modules
pub mod error;
pub mod fs;
pub mod map;

// Iterator and function adapters
pub mod func;
pub mod iter;
