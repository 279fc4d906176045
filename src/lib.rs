//! Book Scraper: a sequential catalogue scraper
//!
//! This crate fetches book listings from the books.toscrape.com demo catalogue,
//! parses each book's detail page, and persists the result set to a CSV file
//! and a SQLite table. A small report module summarises the scraped catalogue.

pub mod book;
pub mod config;
pub mod crawler;
pub mod output;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Book Scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while extracting a book from a detail page
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Missing {field} on {url}")]
    MissingField { field: &'static str, url: String },

    #[error("Unknown rating label '{label}' on {url}")]
    UnknownRating { label: String, url: String },

    #[error("Invalid selector '{0}'")]
    Selector(String),
}

/// Result type alias for Book Scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for detail page parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

// Re-export commonly used types
pub use book::{Book, BookRow, Rating};
pub use config::Config;
pub use crawler::{Coordinator, ScrapeReport};
