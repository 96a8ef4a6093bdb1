//! Catalogue Module
//!
//! The data layer of the service: loading book records from the CSV source
//! and holding them in memory for the lifetime of the process.
//!
//! ## Overview
//! The catalogue is built exactly once, at startup, and is immutable
//! afterwards. Every query path reads from the same `Catalogue` value behind
//! an `Arc`, so concurrent readers need no locking.
//!
//! ## Submodules
//! - **`loader`**: CSV parsing and decoding of the serialized genre cell.
//! - **`store`**: The in-memory `Catalogue` container and its read-only accessors.
//! - **`types`**: The `Book` record shared across the crate.

pub mod loader;
pub mod store;
pub mod types;
