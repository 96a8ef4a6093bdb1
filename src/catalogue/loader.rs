use super::types::Book;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Raw CSV row. The `genres` cell carries a serialized string list
/// (e.g. `['Fantasy', 'Magic']`) that is decoded separately.
#[derive(Debug, Deserialize)]
struct BookRow {
    id: u32,
    title: String,
    url: String,
    description: String,
    genres: String,
}

/// Loads every book from the CSV file at `path`, preserving file order.
///
/// A missing file or a row whose `id` is not numeric fails the whole load.
/// An undecodable genre cell is recoverable: the row keeps an empty genre
/// list and loading continues.
pub fn load_books(path: &Path) -> Result<Vec<Book>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open catalogue file: {}", path.display()))?;

    let mut books = Vec::new();
    for (index, row) in reader.deserialize::<BookRow>().enumerate() {
        let row = row.with_context(|| format!("invalid book record {}", index + 1))?;

        let genres = match parse_genre_list(&row.genres) {
            Some(genres) => genres,
            None => {
                tracing::warn!(
                    "Unparsable genres cell for book {}: {:?}, falling back to empty list",
                    row.id,
                    row.genres
                );
                Vec::new()
            }
        };

        books.push(Book {
            id: row.id,
            title: row.title,
            url: row.url,
            description: row.description,
            genres,
        });
    }

    Ok(books)
}

/// Decodes a bracketed, quoted, comma-separated string list.
///
/// Accepted grammar: `[` item (`,` item)* `]` with single- or double-quoted
/// items and optional whitespace, or empty brackets. Anything else returns
/// `None`, and the caller falls back to an empty list.
pub(crate) fn parse_genre_list(cell: &str) -> Option<Vec<String>> {
    let inner = cell.trim().strip_prefix('[')?.strip_suffix(']')?;

    let mut genres = Vec::new();
    let mut rest = inner.trim();
    if rest.is_empty() {
        return Some(genres);
    }

    loop {
        let quote = rest.chars().next()?;
        if quote != '\'' && quote != '"' {
            return None;
        }
        let body = &rest[1..];
        let end = body.find(quote)?;
        genres.push(body[..end].to_string());

        rest = body[end + 1..].trim_start();
        if rest.is_empty() {
            return Some(genres);
        }
        rest = rest.strip_prefix(',')?.trim_start();
        if rest.is_empty() {
            // Trailing comma is outside the grammar
            return None;
        }
    }
}
