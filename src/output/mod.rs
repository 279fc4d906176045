//! Output module for writing and summarising scraped books
//!
//! This module handles:
//! - Writing and reading the CSV file
//! - Computing the catalogue report from the table or the CSV file
//! - Rendering the report as markdown

mod csv;
mod markdown;
pub mod report;

pub use self::csv::{read_csv, write_csv};
pub use markdown::{format_markdown_report, generate_markdown_report};
pub use report::{print_report, CatalogueReport, PricedTitle};

use crate::storage::Storage;
use crate::ScraperError;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Builds the catalogue report from the books held in storage
///
/// # Returns
///
/// * `Ok(CatalogueReport)` - Report over every stored book
/// * `Err(ScraperError)` - Failed to load the books
pub fn load_report(storage: &dyn Storage) -> Result<CatalogueReport, ScraperError> {
    let books = storage.load_books()?;
    tracing::debug!("Loaded {} books from storage", books.len());
    Ok(CatalogueReport::from_books(&books))
}

/// Builds the catalogue report from a CSV file written by `write_csv`
pub fn load_csv_report(path: &Path) -> Result<CatalogueReport, ScraperError> {
    let books = read_csv(path)?;
    tracing::debug!("Loaded {} books from {}", books.len(), path.display());
    Ok(CatalogueReport::from_books(&books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{Book, Rating, NO_CATEGORY};
    use crate::storage::SqliteStorage;
    use tempfile::TempDir;

    fn sample_books() -> Vec<Book> {
        vec![
            Book {
                title: "It's Only the Himalayas".to_string(),
                price: "£45.17".to_string(),
                availability: "In stock (19 available)".to_string(),
                rating: Rating::Two,
                description: "Wherever you go, whatever you do".to_string(),
                category: "Travel".to_string(),
                url: "https://books.toscrape.com/catalogue/himalayas_981/index.html".to_string(),
            },
            Book {
                title: "Libertarianism for Beginners".to_string(),
                price: "£51.33".to_string(),
                availability: "In stock (19 available)".to_string(),
                rating: Rating::Two,
                description: "Libertarianism is a political philosophy".to_string(),
                category: NO_CATEGORY.to_string(),
                url: "https://books.toscrape.com/catalogue/libertarianism_982/index.html"
                    .to_string(),
            },
        ]
    }

    #[test]
    fn test_csv_and_table_reports_agree() {
        let dir = TempDir::new().unwrap();
        let csv_path = dir.path().join("books.csv");
        let db_path = dir.path().join("books.db");
        let books = sample_books();

        write_csv(&books, &csv_path).unwrap();
        let mut storage = SqliteStorage::new(&db_path).unwrap();
        storage.replace_all(&books).unwrap();

        let from_csv = load_csv_report(&csv_path).unwrap();
        let from_table = load_report(&storage).unwrap();

        assert_eq!(from_csv.total_books, 2);
        assert_eq!(from_csv.rating_count(Rating::Two), 2);
        assert_eq!(from_csv.category_counts, from_table.category_counts);
        assert_eq!(from_csv.most_expensive, from_table.most_expensive);
    }

    #[test]
    fn test_missing_csv_is_an_output_error() {
        let result = load_csv_report(Path::new("/nonexistent/books.csv"));
        assert!(matches!(result, Err(ScraperError::Output(_))));
    }
}
