use serde::{Deserialize, Serialize};

/// A single book record. Built once by the loader, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub url: String,
    pub description: String,
    pub genres: Vec<String>,
}
