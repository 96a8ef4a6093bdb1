//! Search Module
//!
//! The core query logic of the service: matching books against title and
//! genre criteria and shaping the result for the API layer.
//!
//! ## Overview
//! All searches run over the in-memory catalogue, so every operation is a
//! pure function of the stored books and the query parameters. Title search
//! supports exact (case-insensitive substring) and fuzzy (similarity score)
//! modes; genre search supports exact and partial matching.
//!
//! ## Submodules
//! - **`fuzzy`**: Edit-distance similarity scoring on a 0-100 scale.
//! - **`engine`**: Title, genre, and combined filtering over book slices.
//! - **`query`**: The query facade: filter path selection and head-limiting.

pub mod engine;
pub mod fuzzy;
pub mod query;
