use super::loader;
use super::types::Book;
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Basic catalogue statistics, serialized as-is by the stats endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogueStats {
    pub total_books: usize,
    pub total_genres: usize,
    pub genres: Vec<String>,
}

/// The in-memory book catalogue.
///
/// Owns the full ordered book list (load order preserved) and the derived
/// set of distinct genres, both fixed at construction time. Safe to share
/// across request handlers without locking.
pub struct Catalogue {
    books: Vec<Book>,
    genres: Vec<String>,
}

impl Catalogue {
    /// Builds the catalogue from the CSV file at `path`.
    ///
    /// Fails if the file is missing or any row has a non-numeric id; the
    /// process must not serve traffic in that case.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let books = loader::load_books(path.as_ref())?;
        Ok(Self::from_books(books))
    }

    /// Builds the catalogue from already-parsed records.
    pub fn from_books(books: Vec<Book>) -> Self {
        // Sorted + deduplicated union of every book's genres, case-sensitive.
        let genres: BTreeSet<String> = books
            .iter()
            .flat_map(|book| book.genres.iter().cloned())
            .collect();

        Self {
            books,
            genres: genres.into_iter().collect(),
        }
    }

    /// Every book, in load order.
    pub fn all_books(&self) -> &[Book] {
        &self.books
    }

    /// First book with a matching id, in load order. O(n) scan.
    pub fn book_by_id(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// All distinct genres, lexicographically sorted.
    pub fn all_genres(&self) -> &[String] {
        &self.genres
    }

    /// Case-insensitive genre existence check, used by request validation.
    pub fn has_genre(&self, genre: &str) -> bool {
        let needle = genre.to_lowercase();
        self.genres.iter().any(|g| g.to_lowercase() == needle)
    }

    pub fn stats(&self) -> CatalogueStats {
        CatalogueStats {
            total_books: self.books.len(),
            total_genres: self.genres.len(),
            genres: self.genres.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
