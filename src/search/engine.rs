use super::fuzzy;
use crate::catalogue::types::Book;

/// Default minimum similarity score for fuzzy title matching.
pub const DEFAULT_THRESHOLD: u32 = 80;

/// Title matching mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleMatch {
    /// Case-insensitive substring containment, results in load order.
    Exact,
    /// Similarity scoring; keeps books scoring at least `threshold` (0-100),
    /// sorted by score descending.
    Fuzzy { threshold: u32 },
}

/// Genre matching mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreMatch {
    /// Case-insensitive equality with one of the book's genres.
    Exact,
    /// Case-insensitive substring containment within one of the book's genres.
    Partial,
}

/// Books matching the title query. An empty query matches everything.
///
/// Exact mode preserves catalogue load order. Fuzzy mode sorts by score
/// descending; the sort is stable, so equal scores keep load order.
pub fn books_by_title(books: &[Book], title: &str, mode: TitleMatch) -> Vec<Book> {
    if title.is_empty() {
        return books.to_vec();
    }

    match mode {
        TitleMatch::Exact => {
            let needle = title.to_lowercase();
            books
                .iter()
                .filter(|book| book.title.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
        TitleMatch::Fuzzy { threshold } => {
            let mut scored: Vec<(&Book, u32)> = books
                .iter()
                .map(|book| (book, fuzzy::score(title, &book.title)))
                .filter(|(_, score)| *score >= threshold)
                .collect();

            scored.sort_by(|a, b| b.1.cmp(&a.1));
            scored.into_iter().map(|(book, _)| book.clone()).collect()
        }
    }
}

/// Books matching the genre query, in load order. An empty query matches
/// everything.
pub fn books_by_genre(books: &[Book], genre: &str, mode: GenreMatch) -> Vec<Book> {
    if genre.is_empty() {
        return books.to_vec();
    }

    let needle = genre.to_lowercase();
    books
        .iter()
        .filter(|book| match mode {
            GenreMatch::Exact => book.genres.iter().any(|g| g.to_lowercase() == needle),
            GenreMatch::Partial => book.genres.iter().any(|g| g.to_lowercase().contains(&needle)),
        })
        .cloned()
        .collect()
}

/// Books matching both criteria: the title filter narrows the candidate set
/// first, then the genre filter runs over the survivors. Genre filtering
/// never reorders, so the title ordering carries through.
pub fn books_by_title_and_genre(
    books: &[Book],
    title: &str,
    genre: &str,
    title_mode: TitleMatch,
    genre_mode: GenreMatch,
) -> Vec<Book> {
    let candidates = books_by_title(books, title, title_mode);
    books_by_genre(&candidates, genre, genre_mode)
}
