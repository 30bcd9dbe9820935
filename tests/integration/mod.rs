//! Integration test suite for sundry
//!
//! These tests exercise complete workflows across module boundaries, the
//! way the crate is used from the outside: staging and replacing files,
//! layering configuration, and streaming file content through the
//! iterator and function adapters.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! Tests are organized by functionality area:
//! - **atomic_workflows**: Write, copy, and touch flows with interruption cases
//! - **config_layering**: Map merging and filtering persisted to disk
//! - **frozen_map_properties**: Property-based checks on `FrozenMap` invariants
//! - **pipeline**: Line reading through iterator adapters, memoization, and composition

mod config_layering;
mod frozen_map_properties;
mod pipeline;
