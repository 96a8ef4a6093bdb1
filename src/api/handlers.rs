use super::types::{
    BooksListResponse, ErrorResponse, GenresResponse, GetBookByIdRequest, GetBooksRequest,
    GetGenresRequest, HealthResponse,
};
use crate::catalogue::store::{Catalogue, CatalogueStats};
use crate::catalogue::types::Book;
use crate::search::query::{self, BookQuery};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::json;
use std::sync::Arc;

/// Error branch of every handler: status code plus `{detail, error_code}`.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(detail: impl Into<String>, error_code: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            detail: detail.into(),
            error_code: error_code.to_string(),
        }),
    )
}

fn validate_limit(limit: i64) -> Result<usize, ApiError> {
    if limit < 1 {
        return Err(bad_request("Limit must be greater than 0", "INVALID_LIMIT"));
    }
    if limit > 1000 {
        return Err(bad_request("Limit cannot exceed 1000", "LIMIT_TOO_HIGH"));
    }
    Ok(limit as usize)
}

fn validate_genre(genre: &str, catalogue: &Catalogue) -> Result<(), ApiError> {
    if catalogue.has_genre(genre) {
        return Ok(());
    }
    let available = catalogue.all_genres().join(", ");
    Err(bad_request(
        format!("Unknown genre: '{}'. Available genres: {}", genre, available),
        "INVALID_GENRE",
    ))
}

pub async fn handle_root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Book Catalogue API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "books": "/api/v1/books",
            "genres": "/api/v1/genres",
        },
    }))
}

pub async fn handle_health(
    Extension(catalogue): Extension<Arc<Catalogue>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        catalogue_loaded: true,
        total_books: catalogue.len(),
        total_genres: catalogue.all_genres().len(),
    })
}

/// Lists books with optional genre and/or title filtering.
///
/// Limit must be 1-1000; a supplied genre must exist in the catalogue
/// (case-insensitively). Both checks happen here so the search facade can
/// skip them.
pub async fn handle_get_books(
    Extension(catalogue): Extension<Arc<Catalogue>>,
    Json(req): Json<GetBooksRequest>,
) -> Result<Json<BooksListResponse>, ApiError> {
    let limit = validate_limit(req.limit)?;

    if let Some(genre) = req.genre.as_deref() {
        if !genre.is_empty() {
            validate_genre(genre, &catalogue)?;
        }
    }

    let outcome = query::run(
        &catalogue,
        &BookQuery {
            title: req.title,
            genre: req.genre,
            fuzzy: req.fuzzy,
            threshold: req.threshold,
            limit,
        },
    );

    tracing::debug!(
        "Books query matched {} records, returning {}",
        outcome.total,
        outcome.books.len()
    );

    Ok(Json(BooksListResponse {
        books: outcome.books,
        total: outcome.total,
        limit: req.limit,
        page: 1,
    }))
}

pub async fn handle_get_book_by_id(
    Extension(catalogue): Extension<Arc<Catalogue>>,
    Json(req): Json<GetBookByIdRequest>,
) -> Result<Json<Book>, ApiError> {
    if req.book_id < 1 {
        return Err(bad_request(
            "Book ID must be greater than 0",
            "INVALID_BOOK_ID",
        ));
    }

    u32::try_from(req.book_id)
        .ok()
        .and_then(|id| catalogue.book_by_id(id))
        .map(|book| Json(book.clone()))
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    detail: format!("Book with ID {} not found", req.book_id),
                    error_code: "BOOK_NOT_FOUND".to_string(),
                }),
            )
        })
}

pub async fn handle_get_genres(
    Extension(catalogue): Extension<Arc<Catalogue>>,
    Json(req): Json<GetGenresRequest>,
) -> Result<Json<GenresResponse>, ApiError> {
    let limit = validate_limit(req.limit)?;

    let all_genres = catalogue.all_genres();
    let genres: Vec<String> = all_genres.iter().take(limit).cloned().collect();

    Ok(Json(GenresResponse {
        genres,
        total: all_genres.len(),
        limit: req.limit,
    }))
}

pub async fn handle_get_stats(
    Extension(catalogue): Extension<Arc<Catalogue>>,
) -> Json<CatalogueStats> {
    Json(catalogue.stats())
}
