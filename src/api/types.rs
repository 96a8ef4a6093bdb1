use crate::catalogue::types::Book;
use crate::search::engine::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};

fn default_limit() -> i64 {
    10
}

fn default_fuzzy() -> bool {
    true
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}

fn default_genre_limit() -> i64 {
    100
}

#[derive(Debug, Deserialize)]
pub struct GetBooksRequest {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_fuzzy")]
    pub fuzzy: bool,
    #[serde(default = "default_threshold")]
    pub threshold: u32,
}

#[derive(Debug, Deserialize)]
pub struct GetBookByIdRequest {
    pub book_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct GetGenresRequest {
    #[serde(default = "default_genre_limit")]
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct BooksListResponse {
    pub books: Vec<Book>,
    pub total: usize,
    pub limit: i64,
    pub page: u32,
}

#[derive(Debug, Serialize)]
pub struct GenresResponse {
    pub genres: Vec<String>,
    pub total: usize,
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub catalogue_loaded: bool,
    pub total_books: usize,
    pub total_genres: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub error_code: String,
}
