//! API Module Tests
//!
//! Exercises the HTTP handlers directly, with the catalogue injected the same
//! way the router does it at runtime.
//!
//! ## Test Scopes
//! - **Validation**: Limit bounds, genre existence, and book id checks.
//! - **Books endpoint**: Filter selection, head-limiting, and totals.
//! - **Lookup/genres/stats/health**: Response shapes and error codes.

#[cfg(test)]
mod tests {
    use crate::api::handlers::{
        handle_get_book_by_id, handle_get_books, handle_get_genres, handle_get_stats,
        handle_health, handle_root,
    };
    use crate::api::types::{GetBookByIdRequest, GetBooksRequest, GetGenresRequest};
    use crate::catalogue::store::Catalogue;
    use crate::catalogue::types::Book;
    use axum::http::StatusCode;
    use axum::{Extension, Json};
    use std::sync::Arc;

    fn book(id: u32, title: &str, genres: &[&str]) -> Book {
        Book {
            id,
            title: title.to_string(),
            url: format!("https://books.example/{}", id),
            description: format!("Description of {}", title),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn catalogue() -> Extension<Arc<Catalogue>> {
        Extension(Arc::new(Catalogue::from_books(vec![
            book(1, "Harry Potter and the Philosopher's Stone", &["Fantasy", "Magic"]),
            book(2, "The Hobbit", &["Fantasy", "Adventure"]),
            book(3, "Dune", &["Science Fiction"]),
        ])))
    }

    fn books_request() -> GetBooksRequest {
        GetBooksRequest {
            limit: 10,
            genre: None,
            title: None,
            fuzzy: true,
            threshold: 80,
        }
    }

    // ============================================================
    // BOOKS ENDPOINT TESTS
    // ============================================================

    #[tokio::test]
    async fn test_get_books_no_filters_returns_all() {
        let Json(body) = handle_get_books(catalogue(), Json(books_request()))
            .await
            .unwrap();

        assert_eq!(body.total, 3);
        assert_eq!(body.books.len(), 3);
        assert_eq!(body.page, 1);
    }

    #[tokio::test]
    async fn test_get_books_limit_truncates_head() {
        let req = GetBooksRequest {
            limit: 2,
            ..books_request()
        };
        let Json(body) = handle_get_books(catalogue(), Json(req)).await.unwrap();

        assert_eq!(body.total, 3);
        assert_eq!(body.books.len(), 2);
        assert_eq!(body.books[0].id, 1);
        assert_eq!(body.books[1].id, 2);
        assert_eq!(body.limit, 2);
    }

    #[tokio::test]
    async fn test_get_books_by_genre_is_case_insensitive() {
        let req = GetBooksRequest {
            genre: Some("fantasy".to_string()),
            ..books_request()
        };
        let Json(body) = handle_get_books(catalogue(), Json(req)).await.unwrap();

        assert_eq!(body.total, 2);
        assert_eq!(
            body.books.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[tokio::test]
    async fn test_get_books_by_fuzzy_title() {
        let req = GetBooksRequest {
            title: Some("Hobbit".to_string()),
            threshold: 50,
            ..books_request()
        };
        let Json(body) = handle_get_books(catalogue(), Json(req)).await.unwrap();

        assert_eq!(body.total, 1);
        assert_eq!(body.books[0].title, "The Hobbit");
    }

    #[tokio::test]
    async fn test_get_books_by_exact_title() {
        let req = GetBooksRequest {
            title: Some("potter".to_string()),
            fuzzy: false,
            ..books_request()
        };
        let Json(body) = handle_get_books(catalogue(), Json(req)).await.unwrap();

        assert_eq!(body.total, 1);
        assert_eq!(body.books[0].id, 1);
    }

    #[tokio::test]
    async fn test_get_books_title_and_genre_combined() {
        let req = GetBooksRequest {
            title: Some("Hobbit".to_string()),
            genre: Some("Adventure".to_string()),
            threshold: 50,
            ..books_request()
        };
        let Json(body) = handle_get_books(catalogue(), Json(req)).await.unwrap();

        assert_eq!(body.total, 1);
        assert_eq!(body.books[0].id, 2);
    }

    // ============================================================
    // VALIDATION TESTS
    // ============================================================

    #[tokio::test]
    async fn test_get_books_rejects_zero_limit() {
        let req = GetBooksRequest {
            limit: 0,
            ..books_request()
        };
        let (status, Json(error)) = handle_get_books(catalogue(), Json(req))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error_code, "INVALID_LIMIT");
    }

    #[tokio::test]
    async fn test_get_books_rejects_limit_over_1000() {
        let req = GetBooksRequest {
            limit: 1001,
            ..books_request()
        };
        let (status, Json(error)) = handle_get_books(catalogue(), Json(req))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error_code, "LIMIT_TOO_HIGH");
    }

    #[tokio::test]
    async fn test_get_books_accepts_limit_bounds() {
        for limit in [1, 1000] {
            let req = GetBooksRequest {
                limit,
                ..books_request()
            };
            assert!(handle_get_books(catalogue(), Json(req)).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_get_books_rejects_unknown_genre() {
        let req = GetBooksRequest {
            genre: Some("Cooking".to_string()),
            ..books_request()
        };
        let (status, Json(error)) = handle_get_books(catalogue(), Json(req))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error_code, "INVALID_GENRE");
        // The message lists what is available
        assert!(error.detail.contains("Cooking"));
        assert!(error.detail.contains("Fantasy"));
    }

    #[tokio::test]
    async fn test_get_books_empty_genre_skips_validation() {
        let req = GetBooksRequest {
            genre: Some(String::new()),
            ..books_request()
        };
        let Json(body) = handle_get_books(catalogue(), Json(req)).await.unwrap();

        assert_eq!(body.total, 3);
    }

    // ============================================================
    // BOOK LOOKUP TESTS
    // ============================================================

    #[tokio::test]
    async fn test_get_book_by_id_found() {
        let req = GetBookByIdRequest { book_id: 2 };
        let Json(found) = handle_get_book_by_id(catalogue(), Json(req)).await.unwrap();

        assert_eq!(found.id, 2);
        assert_eq!(found.title, "The Hobbit");
    }

    #[tokio::test]
    async fn test_get_book_by_id_not_found() {
        let req = GetBookByIdRequest { book_id: 999 };
        let (status, Json(error)) = handle_get_book_by_id(catalogue(), Json(req))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error.error_code, "BOOK_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_book_by_id_rejects_non_positive() {
        for book_id in [0, -5] {
            let req = GetBookByIdRequest { book_id };
            let (status, Json(error)) = handle_get_book_by_id(catalogue(), Json(req))
                .await
                .unwrap_err();

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(error.error_code, "INVALID_BOOK_ID");
        }
    }

    // ============================================================
    // GENRES / STATS / HEALTH TESTS
    // ============================================================

    #[tokio::test]
    async fn test_get_genres_sorted_with_limit() {
        let req = GetGenresRequest { limit: 2 };
        let Json(body) = handle_get_genres(catalogue(), Json(req)).await.unwrap();

        assert_eq!(body.genres, ["Adventure", "Fantasy"]);
        assert_eq!(body.total, 4);
        assert_eq!(body.limit, 2);
    }

    #[tokio::test]
    async fn test_get_genres_rejects_invalid_limit() {
        let req = GetGenresRequest { limit: -1 };
        let (status, Json(error)) = handle_get_genres(catalogue(), Json(req))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error_code, "INVALID_LIMIT");
    }

    #[tokio::test]
    async fn test_get_stats_matches_catalogue() {
        let Json(stats) = handle_get_stats(catalogue()).await;

        assert_eq!(stats.total_books, 3);
        assert_eq!(stats.total_genres, 4);
        assert_eq!(
            stats.genres,
            ["Adventure", "Fantasy", "Magic", "Science Fiction"]
        );
    }

    #[tokio::test]
    async fn test_health_reports_catalogue() {
        let Json(health) = handle_health(catalogue()).await;

        assert_eq!(health.status, "healthy");
        assert!(health.catalogue_loaded);
        assert_eq!(health.total_books, 3);
        assert_eq!(health.total_genres, 4);
    }

    #[tokio::test]
    async fn test_root_lists_endpoints() {
        let Json(info) = handle_root().await;

        assert_eq!(info["endpoints"]["books"], "/api/v1/books");
        assert_eq!(info["endpoints"]["genres"], "/api/v1/genres");
    }
}
