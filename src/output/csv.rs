//! CSV sink
//!
//! Books are written through their `BookRow` form, so the header is
//! `Title,Price,Availability,Rating,Description,Category,URL` and every row
//! carries the same seven fields.

use crate::book::Book;
use crate::output::OutputResult;
use std::path::Path;

/// Writes books to a CSV file, truncating any previous contents
///
/// An empty input writes nothing and leaves any existing file untouched.
///
/// # Returns
///
/// * `Ok(true)` - File written with a header and one row per book
/// * `Ok(false)` - Nothing to save
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_csv(books: &[Book], path: &Path) -> OutputResult<bool> {
    if books.is_empty() {
        tracing::info!("No books to save.");
        return Ok(false);
    }

    let mut writer = csv::Writer::from_path(path)?;
    for book in books {
        writer.serialize(book)?;
    }
    writer.flush()?;

    tracing::info!("Saved {} books to {}", books.len(), path.display());
    Ok(true)
}

/// Reads books back from a CSV file produced by `write_csv`
pub fn read_csv(path: &Path) -> OutputResult<Vec<Book>> {
    let mut reader = csv::Reader::from_path(path)?;
    let books = reader.deserialize().collect::<Result<Vec<Book>, _>>()?;
    Ok(books)
}
