//! Storage module for persisting scraped books
//!
//! This module handles the relational sink:
//! - SQLite database initialization and schema management
//! - Replace-all persistence of the books table
//! - Loading stored books back for reporting

mod schema;
mod sqlite;
mod traits;

pub use schema::BOOK_COLUMNS;
pub use sqlite::SqliteStorage;
pub use traits::{Storage, StorageError, StorageResult};

use crate::book::Book;
use crate::ScraperError;
use std::path::Path;

/// Initializes or opens a storage database
pub fn open_storage(path: &Path) -> Result<SqliteStorage, ScraperError> {
    SqliteStorage::new(path)
}

/// Writes books to the `books` table, replacing its previous contents
///
/// The connection is opened and closed within this call. An empty input
/// leaves the database untouched.
///
/// # Returns
///
/// * `Ok(true)` - Table replaced with `books`
/// * `Ok(false)` - Nothing to save
/// * `Err(ScraperError)` - Failed to open or write the database
pub fn write_table(books: &[Book], path: &Path) -> Result<bool, ScraperError> {
    if books.is_empty() {
        tracing::info!("No books to save.");
        return Ok(false);
    }

    let mut storage = open_storage(path)?;
    let inserted = storage.replace_all(books)?;
    tracing::info!("Saved {} books to {}", inserted, path.display());

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{Rating, NO_CATEGORY, NO_DESCRIPTION};
    use tempfile::TempDir;

    fn sample_books() -> Vec<Book> {
        vec![
            Book {
                title: "Sharp Objects".to_string(),
                price: "£47.82".to_string(),
                availability: "In stock (20 available)".to_string(),
                rating: Rating::Four,
                description: "WICKED above her hipbone".to_string(),
                category: "Mystery".to_string(),
                url: "https://books.toscrape.com/catalogue/sharp-objects_997/index.html"
                    .to_string(),
            },
            Book {
                title: "Soumission".to_string(),
                price: "£50.10".to_string(),
                availability: "In stock (20 available)".to_string(),
                rating: Rating::One,
                description: NO_DESCRIPTION.to_string(),
                category: NO_CATEGORY.to_string(),
                url: "https://books.toscrape.com/catalogue/soumission_998/index.html".to_string(),
            },
        ]
    }

    #[test]
    fn test_write_table_twice_keeps_one_row_per_book() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("books.db");
        let books = sample_books();

        assert!(write_table(&books, &db_path).unwrap());
        assert!(write_table(&books, &db_path).unwrap());

        let storage = open_storage(&db_path).unwrap();
        assert_eq!(storage.count_books().unwrap(), 2);
        assert_eq!(storage.load_books().unwrap(), books);
    }

    #[test]
    fn test_write_table_empty_is_noop() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("books.db");

        assert!(!write_table(&[], &db_path).unwrap());
        assert!(!db_path.exists());
    }

    #[test]
    fn test_write_table_empty_keeps_previous_rows() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("books.db");

        write_table(&sample_books(), &db_path).unwrap();
        write_table(&[], &db_path).unwrap();

        let storage = open_storage(&db_path).unwrap();
        assert_eq!(storage.count_books().unwrap(), 2);
    }
}
