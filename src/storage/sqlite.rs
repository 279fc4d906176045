//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the Storage trait.

use crate::book::{Book, BookRow};
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{Storage, StorageError, StorageResult};
use crate::ScraperError;
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens or creates the database and ensures the books table exists
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(ScraperError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, ScraperError> {
        let conn = Connection::open(path)?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self, ScraperError> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl Storage for SqliteStorage {
    fn replace_all(&mut self, books: &[Book]) -> StorageResult<usize> {
        // Delete and reinsert commit together
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM books", [])?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO books (title, price, availability, rating, description, category, url)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;

            for book in books {
                let row = BookRow::from(book.clone());
                stmt.execute(params![
                    row.title,
                    row.price,
                    row.availability,
                    row.rating,
                    row.description,
                    row.category,
                    row.url
                ])?;
            }
        }

        tx.commit()?;
        Ok(books.len())
    }

    fn load_books(&self) -> StorageResult<Vec<Book>> {
        let mut stmt = self.conn.prepare(
            "SELECT title, price, availability, rating, description, category, url
             FROM books ORDER BY rowid",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(BookRow {
                    title: row.get(0)?,
                    price: row.get(1)?,
                    availability: row.get(2)?,
                    rating: row.get(3)?,
                    description: row.get(4)?,
                    category: row.get(5)?,
                    url: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|row| Book::try_from(row).map_err(|e| StorageError::InvalidRow(e.to_string())))
            .collect()
    }

    fn count_books(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
