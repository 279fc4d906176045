//! Book record module
//!
//! A `Book` is one catalogue item parsed from a detail page. Fields a page
//! may lack are filled with fixed placeholders at parse time, so every CSV
//! row and table row has the same seven fields and persistence copies the
//! text unchanged.

mod rating;

pub use rating::{Rating, NO_RATING};

use crate::ParseError;
use serde::{Deserialize, Serialize};

/// Placeholder written when a detail page has no description block
pub const NO_DESCRIPTION: &str = "No Description";

/// Placeholder written when the breadcrumb has fewer than two entries
pub const NO_CATEGORY: &str = "No Category";

/// One parsed catalogue item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "BookRow", try_from = "BookRow")]
pub struct Book {
    pub title: String,

    /// Price as advertised, currency symbol included (e.g. "£51.77")
    pub price: String,

    /// Free-text stock statement (e.g. "In stock (22 available)")
    pub availability: String,

    pub rating: Rating,

    /// `NO_DESCRIPTION` when the page has no description block
    pub description: String,

    /// `NO_CATEGORY` when the breadcrumb is too short
    pub category: String,

    /// The detail page this book was parsed from
    pub url: String,
}

impl Book {
    /// Numeric price with the currency symbol stripped
    ///
    /// Returns None if the remaining text is not a number.
    pub fn price_value(&self) -> Option<f64> {
        self.price
            .trim()
            .trim_start_matches(|c: char| !c.is_ascii_digit())
            .parse()
            .ok()
    }

    /// Number of copies in stock, taken from the first number in the
    /// availability text. Statements without a number count as zero.
    pub fn stock_count(&self) -> u32 {
        let digits: String = self
            .availability
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(0)
    }

    /// True unless the description is the placeholder
    pub fn has_description(&self) -> bool {
        self.description != NO_DESCRIPTION
    }
}

/// Flat seven-column form of a book, as written to CSV and SQLite
///
/// Field order here defines the CSV header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRow {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Price")]
    pub price: String,

    #[serde(rename = "Availability")]
    pub availability: String,

    #[serde(rename = "Rating")]
    pub rating: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "URL")]
    pub url: String,
}

impl BookRow {
    /// Column names in persisted order
    pub const FIELD_NAMES: [&'static str; 7] = [
        "Title",
        "Price",
        "Availability",
        "Rating",
        "Description",
        "Category",
        "URL",
    ];
}

impl From<Book> for BookRow {
    fn from(book: Book) -> Self {
        Self {
            rating: book.rating.to_db_string().to_string(),
            description: book.description,
            category: book.category,
            title: book.title,
            price: book.price,
            availability: book.availability,
            url: book.url,
        }
    }
}

impl TryFrom<BookRow> for Book {
    type Error = ParseError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let rating =
            Rating::from_db_string(&row.rating).ok_or_else(|| ParseError::UnknownRating {
                label: row.rating.clone(),
                url: row.url.clone(),
            })?;

        Ok(Self {
            title: row.title,
            price: row.price,
            availability: row.availability,
            rating,
            description: row.description,
            category: row.category,
            url: row.url,
        })
    }
}
