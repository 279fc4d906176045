//! Storage traits and error types
//!
//! This module defines the trait interface for storage backends and
//! associated error types.

use crate::book::Book;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid stored row: {0}")]
    InvalidRow(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for book storage backends
///
/// Persistence is replace-all: every write discards the previous contents.
pub trait Storage {
    /// Replaces every stored book with `books`, keeping input order
    ///
    /// # Returns
    ///
    /// The number of rows inserted
    fn replace_all(&mut self, books: &[Book]) -> StorageResult<usize>;

    /// Loads all stored books in insertion order
    fn load_books(&self) -> StorageResult<Vec<Book>>;

    /// Counts stored books
    fn count_books(&self) -> StorageResult<u64>;
}
