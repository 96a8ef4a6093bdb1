//! API Module
//!
//! The HTTP surface of the service, built on Axum.
//!
//! ## Overview
//! Handlers receive the shared catalogue via `Extension` and delegate all
//! querying to the search facade. Request validation lives here: limit
//! bounds, genre existence, and positive book ids are checked before any
//! core call, so the core can assume clean inputs.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Request and response models (JSON bodies).

pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
