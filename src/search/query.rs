use super::engine::{self, GenreMatch, TitleMatch};
use crate::catalogue::store::Catalogue;
use crate::catalogue::types::Book;

/// A validated book query. The API layer checks limit bounds (1-1000) and
/// genre existence before building one of these; the facade does not
/// re-validate.
#[derive(Debug, Clone)]
pub struct BookQuery {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub fuzzy: bool,
    pub threshold: u32,
    pub limit: usize,
}

/// Query result: the head-truncated book list plus the match count before
/// truncation.
#[derive(Debug)]
pub struct QueryOutcome {
    pub books: Vec<Book>,
    pub total: usize,
}

/// Runs a query against the catalogue.
///
/// Selects one of four filter paths (none / title / genre / both), then
/// truncates to the first `limit` entries while reporting the pre-truncation
/// total. Empty strings count as absent filters.
pub fn run(catalogue: &Catalogue, query: &BookQuery) -> QueryOutcome {
    let title = query.title.as_deref().unwrap_or("");
    let genre = query.genre.as_deref().unwrap_or("");
    let title_mode = if query.fuzzy {
        TitleMatch::Fuzzy {
            threshold: query.threshold,
        }
    } else {
        TitleMatch::Exact
    };

    let mut books = match (!title.is_empty(), !genre.is_empty()) {
        (true, true) => engine::books_by_title_and_genre(
            catalogue.all_books(),
            title,
            genre,
            title_mode,
            GenreMatch::Exact,
        ),
        (true, false) => engine::books_by_title(catalogue.all_books(), title, title_mode),
        (false, true) => engine::books_by_genre(catalogue.all_books(), genre, GenreMatch::Exact),
        (false, false) => catalogue.all_books().to_vec(),
    };

    let total = books.len();
    books.truncate(query.limit);

    QueryOutcome { books, total }
}
