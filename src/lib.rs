//! Book Catalogue Query Service Library
//!
//! This library crate defines the core modules behind the binary executable
//! (`main.rs`): a read-only book catalogue loaded from CSV at startup and
//! queried over HTTP.
//!
//! ## Architecture Modules
//! The service is composed of three layers:
//!
//! - **`catalogue`**: The data layer. Loads book records from the CSV source
//!   and holds them, together with the derived genre set, in an immutable
//!   in-memory store.
//! - **`search`**: The query logic. Exact and fuzzy title matching, genre
//!   filtering, combined predicates, and the head-limiting query facade.
//! - **`api`**: The HTTP layer. Axum handlers, request/response models, and
//!   all caller-side validation (limit bounds, genre existence, id positivity).

pub mod api;
pub mod catalogue;
pub mod search;
